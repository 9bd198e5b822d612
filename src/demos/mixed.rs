//! One closure, two capture modes: `count` by mutable reference, `target` by value.

use std::io::Write;

use crate::Result;

pub const DATA: [i32; 8] = [1, 3, 5, 7, 2, 4, 6, 8];

/// Number of elements of `data` strictly below `target`.
pub fn count_less(data: &[i32], target: i32) -> usize {
    let mut count = 0;
    let count_less = |x: &i32| {
        if *x < target {
            count += 1;
        }
    };
    data.iter().for_each(count_less);
    count
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let target = 5;
    let count = count_less(&DATA, target);
    writeln!(out, "{} Numbers Less Than {}", count, target)?;
    Ok(())
}
