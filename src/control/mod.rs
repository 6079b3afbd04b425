pub mod config;
pub mod flight;
pub mod propulsion;
pub mod rocket;
