//! Command implementations

pub mod analyze;
pub mod batch;
pub mod filter;
pub mod generate;
pub mod simple;
pub mod suggest;
pub mod words;

pub use analyze::{AnalysisResult, CenterAnalysis, analyze_letters};
pub use batch::{BatchResult, run_batch};
pub use filter::{FilterReport, apply_exclusions, filter_dictionary};
pub use generate::{GenerateResult, draw_source, generate};
pub use simple::run_simple;
pub use suggest::{SuggestionReport, Suggestions, apply_suggestions, apply_to_words};
pub use words::{WordsResult, find_words};
