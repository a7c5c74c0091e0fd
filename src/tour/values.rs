//! Value-type vignette

use std::io::Write;

use super::{TourError, Vignette};
use crate::value::ValueRecord;

/// Shows copy-by-value: assigning an integer or a [`ValueRecord`] copies
/// it, and mutating the copy leaves the original untouched.
pub struct ValuesVignette;

impl Vignette for ValuesVignette {
    fn name(&self) -> &'static str {
        "values"
    }

    fn title(&self) -> &'static str {
        "value types"
    }

    fn run(
        &self,
        out: &mut dyn Write,
    ) -> Result<(), TourError> {
        let age: i64 = 30;
        writeln!(out, "Hello, you are {} years old.", age)?;
        // let age: i64 = "30"; would not compile: "30" is a &str, not i64.

        let a: i64 = 5;
        let mut b = a;
        writeln!(out, "b starts as a copy of a: {}", b)?;
        b = 10;
        // b was copied from a, so reassigning b never touches a.
        writeln!(out, "a: {}, b: {}", a, b)?;

        let mut p1 = ValueRecord::new(30);
        let mut p2 = ValueRecord::new(40);
        writeln!(out, "p1.age: {}, p2.age: {}", p1.age, p2.age)?;

        p1.age = 31;
        p2.age = 41;
        writeln!(out, "after independent mutation: p1 = {}, p2 = {}", p1, p2)?;

        Ok(())
    }
}
