//! Layout helpers for slidepanel

mod alignment;

pub use alignment::*;

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
