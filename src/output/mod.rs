//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_batch_result, print_filter_report, print_generate_result,
    print_json, print_puzzle, print_suggestion_report, print_words_result,
};
