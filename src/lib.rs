//! Case-insensitive literal substring matching, and a line filter built on it.
//!
//! [`fuzzy_match`] answers whether a string contains the literal text of a
//! pattern, ignoring letter case. Regex metacharacters in the pattern are
//! escaped, so `3.14` never matches `3x14`.

pub mod app;
pub mod cli;
pub mod config;
pub mod filter;
pub mod logging;
pub mod matcher;
pub mod processing;
pub mod utils;
pub mod version;

shadow_rs::shadow!(build);

pub use matcher::{LiteralMatcher, escape_pattern, fuzzy_match, try_fuzzy_match};
