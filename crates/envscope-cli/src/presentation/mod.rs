//! Rendering of a finished surface for the terminal.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no probing and no slot writes
//! - Every renderer takes the surface snapshot ordered by slot key

pub mod html;
pub mod json;
pub mod tables;

pub use html::render_html;
pub use json::render_json;
pub use tables::{plain_text, render_table, truncate_string};
