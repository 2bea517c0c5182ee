// banphrase-loader/src/lib.rs
//! # banphrase Loader
//!
//! Reads banphrase pattern lists from files or HTTP and compiles them into a
//! `banphrase_core::Finder`. This is the only crate in the workspace that
//! performs I/O; everything it hands to the core is an ordered list of
//! pattern strings.
//!
//! ## Modules
//!
//! * `parse`: The line-based pattern-list format.
//! * `fetcher`: The `ResourceFetcher` trait with file and HTTP implementations.
//! * `loader`: `PatternLoader` and the `create_finder_from_*` helpers.
//! * `config`: HTTP fetch settings.
//! * `error`: The `LoaderError` type.
//!
//! ## Usage Example
//!
//! ```no_run
//! use banphrase_loader::create_finder_from_file;
//!
//! # async fn run() -> Result<(), banphrase_loader::LoaderError> {
//! let finder = create_finder_from_file("blacklist.lst").await?;
//! let tokens = finder.find("some text to check");
//! println!("{} banned phrases found", tokens.len());
//! # Ok(())
//! # }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod parse;

pub use config::{LoaderConfig, DEFAULT_TIMEOUT_SECS};
pub use error::LoaderError;
#[cfg(not(target_arch = "wasm32"))]
pub use fetcher::FileFetcher;
pub use fetcher::{DefaultFetcher, HttpFetcher, ResourceFetcher};
pub use loader::{create_finder_from_file, create_finder_from_url, PatternLoader};
pub use parse::parse_pattern_list;
