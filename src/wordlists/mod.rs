//! Word lists for Spelling Bee
//!
//! Provides the embedded default dictionary and file loaders.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::DictionaryError;
