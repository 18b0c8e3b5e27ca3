//! Integration tests for ensemble generation

mod batch_generation;
mod end_to_end;
mod template_isolation;
pub mod test_utils;

pub use test_utils::*;
