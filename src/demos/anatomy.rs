//! The parts of a closure expression, in one closure:
//!
//! ```text
//! move        || -> Result<i32> { let n = x + y; x = y; y = n; Ok(n) }
//! (capture)  (params) (return type, fallible)  (body)
//! ```
//!
//! `move` copies `x` and `y` in, `let mut` on the binding allows the body to
//! change those copies, and the `Result` return type is how the body reports
//! failure.

use std::io::Write;

use crate::{Error, Result};

/**
 * Stepper over its own copies of `x` and `y`. Each call returns `x + y` and
 * shifts the pair; overflow is an error and leaves the pair unchanged.
 */
pub fn stepper(mut x: i32, mut y: i32) -> impl FnMut() -> Result<i32> {
    move || -> Result<i32> {
        let n = x.checked_add(y).ok_or(Error::Overflow { x, y })?;
        x = y;
        y = n;
        Ok(n)
    }
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let (x, y) = (0, 1);
    let mut next = stepper(x, y);
    for _ in 0..5 {
        write!(out, "{} ", next()?)?;
    }
    writeln!(out)?;
    writeln!(out, "x = {}, y = {}", x, y)?;
    Ok(())
}
