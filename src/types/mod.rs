//! Shared data structures for well trajectory analysis
//!
//! - `survey`: input stations and the trajectory envelope
//! - `analysis`: derived statistics, DLS series and summaries

mod analysis;
mod survey;

pub use analysis::*;
pub use survey::*;
