//! Pattern-list handling for banphrase.
//!
//! A pattern list is an ordered sequence of regular-expression fragments.
//! Fragments prefixed with `!` are bypass patterns; everything else is a ban
//! pattern. This module splits the list and compiles each half into a single
//! alternation.

pub mod compiler;
