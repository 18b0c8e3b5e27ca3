//! CLI domain: parse, route, help, output, and presentation only.
//! Generation itself lives in the library; the route table only wires it up.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_generation_report, format_plan};
pub use route::RunContext;
