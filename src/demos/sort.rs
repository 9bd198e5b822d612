//! Comparator sort by absolute value.

use std::io::Write;

use crate::{callable::sort_by_less, Result};

#[cfg(feature = "function-object")]
use crate::callable::AbsLess;

use super::search::INPUT;

#[cfg(feature = "lambda-expression")]
pub(crate) const DESCRIPTION: &str = "sort by absolute value with a captureless closure";
#[cfg(feature = "function-object")]
pub(crate) const DESCRIPTION: &str = "sort by absolute value with the AbsLess object";

/// Equal magnitudes (`2` and `-2`) may come out in either order.
#[cfg(feature = "lambda-expression")]
pub fn sort_by_magnitude(seq: &mut [i32]) {
    sort_by_less(seq, |x: &i32, y: &i32| x.unsigned_abs() < y.unsigned_abs());
}

/// Equal magnitudes (`2` and `-2`) may come out in either order.
#[cfg(feature = "function-object")]
pub fn sort_by_magnitude(seq: &mut [i32]) {
    sort_by_less(seq, AbsLess);
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut ar = INPUT;
    sort_by_magnitude(&mut ar);

    #[cfg(feature = "lambda-expression")]
    ar.iter().try_for_each(|x| write!(out, "{} ", x))?;

    #[cfg(feature = "function-object")]
    for x in ar {
        write!(out, "{} ", x)?;
    }

    writeln!(out)?;
    Ok(())
}
