//! Predicate search: first element divisible by a captured divisor.

use std::io::Write;

use log::debug;

use crate::{callable::find_if, Result};

#[cfg(feature = "function-object")]
use crate::callable::CanDivide;

pub const INPUT: [i32; 10] = [9, 7, 5, 3, 1, -2, -4, -6, -8, 0];

#[cfg(feature = "lambda-expression")]
pub(crate) const DESCRIPTION: &str = "first element divisible by a captured divisor (closure)";
#[cfg(feature = "function-object")]
pub(crate) const DESCRIPTION: &str = "first element divisible by a divisor (CanDivide object)";

/**
 * First element of `seq` divisible by `n`.
 * Panics if `n` is zero.
 */
#[cfg(feature = "lambda-expression")]
pub fn first_divisible(seq: &[i32], n: i32) -> Option<i32> {
    assert!(n != 0, "divisor must be non-zero");
    find_if(seq, move |x: &i32| x % n == 0)
}

/**
 * First element of `seq` divisible by `n`.
 * Panics if `n` is zero.
 */
#[cfg(feature = "function-object")]
pub fn first_divisible(seq: &[i32], n: i32) -> Option<i32> {
    find_if(seq, CanDivide::new(n))
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let n = 4;
    match first_divisible(&INPUT, n) {
        Some(found) => writeln!(out, "{} can be divided by {}", found, n)?,
        None => debug!("nothing in {:?} divides by {}", INPUT, n),
    }
    Ok(())
}
