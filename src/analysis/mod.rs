//! Query analysis.
//!
//! This module turns a raw free-text query into a [`intent::QueryIntent`]:
//! the decomposed, typed representation of what the user asked for. The
//! analyzer never fails; a field that cannot be extracted is simply absent.
//!
//! # Components
//!
//! - [`analyzer::QueryAnalyzer`] - the per-field extraction pipeline
//! - [`intent::QueryIntent`] - the structured output
//! - [`keywords`] - keyword tokenization and the stop-word list
//! - [`fuzzy`] - string-similarity kernels used for the theme fallback
//!
//! # Examples
//!
//! ```
//! use brickseek::analysis::analyzer::QueryAnalyzer;
//! use brickseek::vocabulary::Recency;
//!
//! let analyzer = QueryAnalyzer::new();
//! let intent = analyzer.analyze("oldest star wars sets");
//!
//! assert_eq!(intent.theme.as_deref(), Some("star wars"));
//! assert_eq!(intent.recency, Some(Recency::Oldest));
//! ```

pub mod analyzer;
pub mod fuzzy;
pub mod intent;
pub mod keywords;

pub use analyzer::QueryAnalyzer;
pub use intent::QueryIntent;
