//! typetour
//!
//! A guided console tour of type semantics: value types that copy on
//! assignment, immutable text with an explicit canonicalization pool, and a
//! generic growable ordered collection.
//!
//! # Example
//!
//! ```no_run
//! use typetour::Result;
//!
//! fn main() -> Result<()> {
//!     typetour::run()?;
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod collection;
pub mod text;
pub mod tour;
pub mod value;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use collection::OrderedCollection;
pub use text::TextBuffer;
pub use tour::{RunOptions, TourError, Vignette};
pub use value::ValueRecord;

use tracing::debug;

/// Tour version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tour name
pub const NAME: &str = "typetour";

/// Run the whole tour against stdout with default options.
pub fn run() -> Result<()> {
    debug!("run: starting full tour");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tour::run_all(&mut out, &RunOptions::default())?;
    debug!("run: tour complete");
    Ok(())
}
