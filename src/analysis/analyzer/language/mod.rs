//! Language-specific analyzers.
//!
//! - [`portuguese`] - Portuguese text analysis with stop words and RSLP stemming

pub mod portuguese;
