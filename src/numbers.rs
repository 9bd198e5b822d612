//! Growable sequence whose traversal goes through a closure borrowing `self`.

use std::{fmt::Display, io::Write};

#[derive(Debug, Clone, Default)]
pub struct Numbers<T> {
    data: Vec<T>,
}

impl<T: Display> Numbers<T> {
    pub fn new() -> Self {
        Numbers { data: Vec::new() }
    }

    /// Appends `x` to the end.
    pub fn add(&mut self, x: T) {
        self.data.push(x);
    }

    /**
     * Writes every element in insertion order, each followed by a space.
     * The per-element closure captures `self` to reach `print_one` and lives only for this call.
     */
    pub fn print_all<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        self.data.iter().try_for_each(|x| self.print_one(out, x))
    }

    fn print_one<W: Write + ?Sized>(&self, out: &mut W, x: &T) -> std::io::Result<()> {
        write!(out, "{} ", x)
    }
}

#[cfg(test)]
mod tests {
    use super::Numbers;

    fn printed<T: std::fmt::Display>(numbers: &Numbers<T>) -> String {
        let mut out = Vec::new();
        numbers.print_all(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_in_insertion_order() {
        let mut ints = Numbers::new();
        ints.add(1);
        ints.add(2);
        ints.add(3);
        assert_eq!(printed(&ints), "1 2 3 ");
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let mut ints = Numbers::new();
        for x in [5, 1, 5, -3, 1] {
            ints.add(x);
        }
        assert_eq!(printed(&ints), "5 1 5 -3 1 ");
    }

    #[test]
    fn empty_prints_nothing() {
        let words: Numbers<&str> = Numbers::new();
        assert_eq!(printed(&words), "");
    }

    #[test]
    fn printing_twice_is_identical() {
        let mut words = Numbers::new();
        words.add("a");
        words.add("b");
        assert_eq!(printed(&words), printed(&words));
    }
}
