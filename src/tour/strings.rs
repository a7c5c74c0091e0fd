//! Immutable-text vignette

use std::io::Write;
use std::sync::Arc;

use super::{TourError, Vignette};
use crate::text::intern::{intern, literal, same_instance};
use crate::text::{
    accumulate_digits_buffered, accumulate_digits_naive, concat, join, replace, upper,
};

/// Shows that text operations return new values, how the canonicalization
/// pool shares identity between equal content, and why accumulation wants a
/// dedicated buffer.
pub struct StringsVignette;

impl Vignette for StringsVignette {
    fn name(&self) -> &'static str {
        "strings"
    }

    fn title(&self) -> &'static str {
        "immutable text"
    }

    fn run(
        &self,
        out: &mut dyn Write,
    ) -> Result<(), TourError> {
        let name = "John";
        writeln!(out, "Hello, {}!", name)?;
        // let name: &str = 42; would not compile: i64 is not a string.

        // Transformations build new values; the original binding is intact.
        let s = "Hello";
        writeln!(out, "upper: {}", upper(s))?;
        writeln!(out, "original after upper: {}", s)?;
        writeln!(out, "length: {}", s.len())?;

        let replaced = replace("abc", "a", "F");
        writeln!(out, "replace(\"abc\", \"a\", \"F\"): {}", replaced)?;

        writeln!(out, "concat: {}", concat(&["A", "B", "C"]))?;
        writeln!(out, "join: {}", join(&["A", "B", "C"], ","))?;
        let full_name = concat(&["John", " ", "Doe"]);
        writeln!(out, "full name: {}", full_name)?;

        // Canonicalization. Two literals with the same content resolve to
        // one shared instance; concat! folds at compile time, so the folded
        // spelling is the same literal.
        let a1 = literal("hello");
        let b1 = literal("hello");
        writeln!(out, "literal vs literal shares instance: {}", same_instance(&a1, &b1))?;

        let a2 = literal(concat!("hel", "lo"));
        writeln!(
            out,
            "compile-time folded concat shares instance: {}",
            same_instance(&a2, &b1)
        )?;

        // Runtime concatenation produces a fresh allocation. Equal content,
        // different instance, until it is explicitly interned.
        let part = String::from("hel");
        let a3: Arc<str> = Arc::from(concat(&[&part, "lo"]));
        writeln!(
            out,
            "runtime concat shares instance: {} (content equal: {})",
            same_instance(&a3, &b1),
            &*a3 == &*b1
        )?;

        let a4 = intern(&a3);
        writeln!(out, "after intern, shares instance: {}", same_instance(&a4, &b1))?;

        // Accumulation: rebuild-per-step vs one growable buffer. Identical
        // output, very different cost curve.
        let slow = accumulate_digits_naive(1000);
        let fast = accumulate_digits_buffered(1000);
        writeln!(
            out,
            "digits 0..999 (naive, {} bytes): {}...",
            slow.len(),
            &slow[..32]
        )?;
        writeln!(
            out,
            "digits 0..999 (buffered, {} bytes): {}...",
            fast.len(),
            &fast[..32]
        )?;
        writeln!(out, "strategies agree: {}", slow == fast)?;

        Ok(())
    }
}
