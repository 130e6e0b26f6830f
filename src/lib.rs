//! # licensecover
//!
//! Classifies arbitrary input text against a set of known open-source
//! license templates and reports which licenses appear, where, and how
//! confidently.
//!
//! Typical callers are source-code auditing tools that scan
//! `LICENSE`/`COPYING` files, some of which concatenate several licenses
//! or reference licenses by URL instead of including their text.
//!
//! ## Quick start
//!
//! ```
//! use licensecover::license_detection::{Checker, License, Options};
//!
//! let mit_text = "Permission is hereby granted, free of charge, to any \
//!     person obtaining a copy of this software and associated \
//!     documentation files (the \"Software\"), to deal in the Software \
//!     without restriction, including without limitation the rights to \
//!     use, copy, modify, merge, publish, distribute, sublicense, and/or \
//!     sell copies of the Software.";
//!
//! let checker = Checker::new(vec![License {
//!     name: "MIT".to_string(),
//!     text: mit_text.to_string(),
//!     url: String::new(),
//! }]);
//!
//! let (coverage, found) = checker.cover(mit_text.as_bytes(), Options::default());
//! assert!(found);
//! assert_eq!(coverage.matches[0].name, "MIT");
//! ```
//!
//! ## Architecture
//!
//! The matching engine is a noise-tolerant approximate-substring search
//! over normalized token streams:
//!
//! 1. [`license_detection`]'s normalizer turns bytes into a parallel
//!    `(words, byte offsets)` pair, identically for license templates and
//!    scanned input.
//! 2. Each compiled license gets a start-index (word -> positions) built
//!    once at [`license_detection::Checker::new`] time.
//! 3. A greedy longest-run matcher walks the input once per license,
//!    admitting runs above a minimum length and bridging small gaps (years,
//!    names) under a slop budget.
//! 4. A URL finder resolves bare license references by URL in whatever gaps
//!    remain between text matches.
//! 5. An aggregator arbitrates overlapping matches across licenses, folds
//!    in URL matches, and projects everything back to byte offsets for the
//!    caller.
//!
//! ## Non-goals
//!
//! This crate does not produce SPDX-grade legal conclusions, does not
//! reason about license compatibility or composition, and does not perform
//! exact-match identification of unknown licenses. It also does not embed
//! any license corpus — callers supply their own `License` records.
//!
//! ## Concurrency
//!
//! [`license_detection::Checker`] is immutable after construction and
//! `Sync`; a single checker can be shared across threads and called from
//! independent workers without synchronization. Each `cover` call has no
//! shared mutable state and no I/O.

pub mod license_detection;
