//! License coverage matching engine.
//!
//! This module implements the full matching pipeline: a text normalizer, a
//! per-license start-index, a greedy longest-run submatch finder, a
//! URL-based license detector, and an aggregator that arbitrates overlaps
//! across licenses and projects word offsets back to byte offsets.
//! [`Checker`] is the single public entry point.

mod aggregate;
mod checker;
mod index;
mod license;
mod normalize;
mod seq_match;
mod types;
mod url_match;

pub use checker::{global_checker, install_global_checker, Checker};
pub use types::{
    CompiledLicense, Coverage, Document, License, LicenseType, Match, Options, ResolvedOptions,
    Submatch,
};
