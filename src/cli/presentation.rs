//! CLI presentation: text and json formatters per command.

mod generate;
mod plan;

pub use generate::format_generation_report;
pub use plan::format_plan;
