use std::io::{self, Write};

use crate::control::flight::FlightReport;
use crate::control::rocket::Outcome;

/// Presentation selected solely by a run's [`Outcome`].
pub trait OutcomeRenderer {
    fn render(&self, report: &FlightReport, out: &mut dyn Write) -> io::Result<()>;
}

pub struct SuccessRenderer;

pub struct FailureRenderer;

impl OutcomeRenderer for SuccessRenderer {
    fn render(&self, report: &FlightReport, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Result: SUCCESS - The rocket successfully lifted off.")?;
        if let Some(time) = report.liftoff_time_s() {
            writeln!(out, "Liftoff achieved at T+{:.2} seconds.", time)?;
        }
        Ok(())
    }
}

impl OutcomeRenderer for FailureRenderer {
    fn render(&self, report: &FlightReport, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Result: FAILURE - The rocket did not achieve sustained liftoff."
        )?;
        writeln!(out, "Run ended: {:?}.", report.termination)
    }
}

pub fn renderer_for(outcome: Outcome) -> Box<dyn OutcomeRenderer> {
    match outcome {
        Outcome::Success => Box::new(SuccessRenderer),
        Outcome::Failure => Box::new(FailureRenderer),
    }
}
