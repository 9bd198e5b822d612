use std::io::Write;

use crate::{numbers::Numbers, Result};

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut ints = Numbers::new();
    ints.add(1);
    ints.add(2);
    ints.add(3);
    ints.print_all(out)?;
    writeln!(out)?;
    Ok(())
}
