//! Closures held in variables: one with an inferred closure type, one in an
//! explicit `Function<str, String>`.

use std::io::Write;

use crate::{callable::Function, Result};

/// Appends the honorific.
pub fn polite() -> Function<str, String> {
    Function::new(|s: &str| format!("{} SIR ", s))
}

pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut println = |s: &str| writeln!(out, "{}", s);
    let polite = polite();

    let msg = polite.call("Ben");
    println(&msg)?;
    println(&polite.call("Bingshiue"))?;
    Ok(())
}
