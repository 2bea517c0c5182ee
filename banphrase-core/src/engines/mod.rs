// banphrase-core/src/engines/mod.rs
//! This module contains the `PhraseEngine` implementations.
//!
//! Each engine is a separate file within this directory. The regex-based
//! `Finder` is the only built-in engine; callers with their own detectors
//! implement `PhraseEngine` directly.

pub mod regex_finder;
