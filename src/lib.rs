//! # brickseek
//!
//! Query understanding and result ranking for LEGO catalog search.
//!
//! Turns free-text queries about sets into structured intent, generates
//! candidate query strings for external search collaborators, and scores and
//! orders the records they return.
//!
//! ## Features
//!
//! - Controlled-vocabulary extraction of themes and recency/size/price
//!   modifiers, with a fuzzy fallback for misspelled themes
//! - Candidate-query expansion with deterministic, deduplicated order
//! - Additive multi-signal ranking with a stable sort
//! - Trait seams for the external record, semantic, and completion
//!   collaborators, with a JSONL-backed reference source
//!
//! ## Example
//!
//! ```
//! use brickseek::analysis::QueryAnalyzer;
//! use brickseek::expand::expand;
//!
//! let analyzer = QueryAnalyzer::new();
//! let intent = analyzer.analyze("oldest star wars sets");
//! let candidates = expand(&intent);
//! assert_eq!(candidates[0], "oldest star wars sets");
//! ```

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod expand;
pub mod pipeline;
pub mod providers;
pub mod rank;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
