//! Services built on top of the ports.

mod reporter;
mod slot_writer;

pub use reporter::{EnvironmentReporter, ReportSummary};
pub use slot_writer::SlotWriter;
