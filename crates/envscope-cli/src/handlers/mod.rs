//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that run the reporter and format output for the terminal
//!
//! Handlers should NOT construct adapters; that happens in `bootstrap`.

pub mod report;
pub mod slots;
