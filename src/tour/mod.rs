//! Demonstration runner
//!
//! Each teaching block of the tour is a [`Vignette`]: a self-contained,
//! side-effect-free demonstration that writes labeled lines to an output
//! sink. The runner executes them in fixed order with a banner per block.

mod collections;
mod strings;
mod values;

pub use collections::CollectionsVignette;
pub use strings::StringsVignette;
pub use values::ValuesVignette;

use std::io::{self, Write};

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::debug;

/// Errors produced by the runner.
#[derive(Debug, Error)]
pub enum TourError {
    /// The output sink rejected a write.
    #[error("failed to write vignette output: {0}")]
    Write(#[from] io::Error),

    /// No vignette is registered under the requested name.
    #[error("unknown vignette: {0}")]
    UnknownVignette(String),
}

/// Options controlling how the tour is rendered.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Style banners with ANSI colors.
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

impl RunOptions {
    /// Options for plain, uncolored output (tests, piped output).
    pub fn plain() -> Self {
        Self { color: false }
    }
}

/// A self-contained teaching block.
///
/// Implementations write human-readable lines to `out` and have no other
/// side effects; running a vignette twice produces the same output.
pub trait Vignette {
    /// Stable identifier, selectable from the CLI.
    fn name(&self) -> &'static str;

    /// Banner text shown above the vignette's output.
    fn title(&self) -> &'static str;

    /// Execute the vignette against the given sink.
    fn run(
        &self,
        out: &mut dyn Write,
    ) -> Result<(), TourError>;
}

/// All vignettes in their fixed execution order.
pub fn all() -> Vec<Box<dyn Vignette>> {
    vec![
        Box::new(ValuesVignette),
        Box::new(StringsVignette),
        Box::new(CollectionsVignette),
    ]
}

/// Run every vignette in order.
pub fn run_all(
    out: &mut dyn Write,
    options: &RunOptions,
) -> Result<(), TourError> {
    let vignettes = all();
    let last = vignettes.len().saturating_sub(1);
    for (index, vignette) in vignettes.iter().enumerate() {
        debug!("running vignette: {}", vignette.name());
        banner(out, vignette.title(), options)?;
        vignette.run(out)?;
        if index != last {
            writeln!(out, "{}", "-".repeat(66))?;
        }
    }
    Ok(())
}

/// Run the single vignette registered under `name`.
pub fn run_one(
    name: &str,
    out: &mut dyn Write,
    options: &RunOptions,
) -> Result<(), TourError> {
    for vignette in all() {
        if vignette.name() == name {
            debug!("running vignette: {}", name);
            banner(out, vignette.title(), options)?;
            return vignette.run(out);
        }
    }
    Err(TourError::UnknownVignette(name.to_string()))
}

fn banner(
    out: &mut dyn Write,
    title: &str,
    options: &RunOptions,
) -> Result<(), TourError> {
    let line = format!("****************** {} ******************", title);
    if options.color {
        writeln!(out, "{}", line.cyan().bold())?;
    } else {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
