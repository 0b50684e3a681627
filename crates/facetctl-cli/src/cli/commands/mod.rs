//! CLI command handlers, one per file.

mod apply;
mod completions;
mod show;

pub use apply::run_apply;
pub use completions::{run_completions, run_man};
pub use show::run_show;
