//! Spelling Bee
//!
//! A Spelling Bee puzzle generator and player. The generator draws seven
//! letters, tries each as the required center letter, and keeps the
//! pairing whose answer list is best balanced between letter coverage and
//! total points.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::Dictionary;
//! use spelling_bee::generator::{GeneratorConfig, RandomDraw, generate_puzzle};
//!
//! let dictionary = Dictionary::new(["TASTE", "SUITE", "SEAT", "STATE"]);
//! let config = GeneratorConfig::default();
//! let mut source = RandomDraw::seeded(7);
//!
//! let puzzle = generate_puzzle(&dictionary, &config, &mut source).unwrap();
//! assert!(puzzle.letters.contains(puzzle.center_letter));
//! println!("{} (center {})", puzzle.letters, puzzle.center_letter);
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Playing a puzzle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
