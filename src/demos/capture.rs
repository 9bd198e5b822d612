//! Capture by value, mutable capture by value, and capture by reference.

use std::{cell::Cell, io::Write};

use log::debug;

use crate::Result;

/**
 * `move` copies `number` into the closure. Reassigning `number` afterwards
 * leaves the copy at 123.
 */
pub fn by_value<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut number = 123;
    let capt_print = move |out: &mut W| writeln!(out, "{} Captured ", number);
    number = 456;
    debug!("number reassigned to {} after capture", number);
    capt_print(out)?;
    Ok(())
}

/**
 * The closure owns its copy of `number2` and increments it on every call:
 * print first, then increment. `number2` itself stays 123.
 */
pub fn mutable_by_value<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let mut number2 = 123;
    let mut capt_print2 = move |out: &mut W| -> std::io::Result<()> {
        writeln!(out, "{} Captured ", number2)?;
        number2 += 1;
        Ok(())
    };
    capt_print2(out)?;
    capt_print2(out)?;
    capt_print2(out)?;
    writeln!(out, "number2 = {}", number2)?;
    Ok(())
}

/**
 * The closure borrows `number3`, so every call reads and bumps the live value
 * and assignments made in between are seen on the next call.
 */
pub fn by_reference<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let number3 = Cell::new(123);
    let capt_print3 = |out: &mut W| -> std::io::Result<()> {
        writeln!(out, "{} Captured ", number3.get())?;
        number3.set(number3.get() + 1);
        Ok(())
    };
    capt_print3(out)?;
    capt_print3(out)?;
    capt_print3(out)?;
    writeln!(out, "number3 = {}", number3.get())?;
    number3.set(456);
    capt_print3(out)?;
    writeln!(out, "number3 = {}", number3.get())?;
    Ok(())
}
