pub mod aerodynamics;
pub mod integrator;
pub mod kinematics;
