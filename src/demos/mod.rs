//! Closure capture demonstrations.
//!
//! Each demo is self-contained: it declares its own inputs, builds its
//! closures, and writes its lines to the given output.
//!
//! 1. [`search`] - predicate search with a captured divisor
//! 2. [`sort`] - comparator sort by absolute value
//! 3. [`stored`] - closures held in variables
//! 4. [`capture`] - by value, mutable by value, by reference
//! 5. [`mixed`] - one closure capturing by reference and by value
//! 6. [`members`] - a closure capturing `self`
//! 7. [`anatomy`] - the parts of a closure expression

pub mod anatomy;
pub mod capture;
pub mod members;
pub mod mixed;
pub mod search;
pub mod sort;
pub mod stored;

use std::{fmt, io::Write, str::FromStr};

use crate::{Error, Result};

/// Demo selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Search,
    Sort,
    Stored,
    ByValue,
    MutableByValue,
    ByReference,
    Mixed,
    Members,
    Anatomy,
}

impl Demo {
    /// Every demo, in presentation order.
    pub const ALL: [Demo; 9] = [
        Demo::Search,
        Demo::Sort,
        Demo::Stored,
        Demo::ByValue,
        Demo::MutableByValue,
        Demo::ByReference,
        Demo::Mixed,
        Demo::Members,
        Demo::Anatomy,
    ];

    /// The sequence run when no demo is named.
    pub const DEFAULT: [Demo; 8] = [
        Demo::Search,
        Demo::Sort,
        Demo::Stored,
        Demo::ByValue,
        Demo::MutableByValue,
        Demo::ByReference,
        Demo::Mixed,
        Demo::Members,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Search => "search",
            Demo::Sort => "sort",
            Demo::Stored => "stored",
            Demo::ByValue => "by-value",
            Demo::MutableByValue => "mutable-by-value",
            Demo::ByReference => "by-reference",
            Demo::Mixed => "mixed",
            Demo::Members => "members",
            Demo::Anatomy => "anatomy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::Search => search::DESCRIPTION,
            Demo::Sort => sort::DESCRIPTION,
            Demo::Stored => "closures stored with an inferred type and in a Function",
            Demo::ByValue => "a copy taken at capture time ignores later reassignment",
            Demo::MutableByValue => "a closure mutating its own copy",
            Demo::ByReference => "a closure reading and writing a live variable",
            Demo::Mixed => "one closure capturing by reference and by value",
            Demo::Members => "a closure capturing self to call a private method",
            Demo::Anatomy => "captures, mutability, fallibility and return type",
        }
    }

    /// Whether a blank line sets this demo apart from the next one.
    pub fn trailing_blank_line(&self) -> bool {
        !matches!(self, Demo::Search | Demo::Sort | Demo::Stored)
    }

    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self {
            Demo::Search => search::run(out),
            Demo::Sort => sort::run(out),
            Demo::Stored => stored::run(out),
            Demo::ByValue => capture::by_value(out),
            Demo::MutableByValue => capture::mutable_by_value(out),
            Demo::ByReference => capture::by_reference(out),
            Demo::Mixed => mixed::run(out),
            Demo::Members => members::run(out),
            Demo::Anatomy => anatomy::run(out),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Demo::ALL
            .iter()
            .copied()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| Error::UnknownDemo(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Demo;
    use crate::Error;

    #[test]
    fn names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().unwrap(), demo);
            assert_eq!(demo.to_string(), demo.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        match "lambda".parse::<Demo>() {
            Err(Error::UnknownDemo(name)) => assert_eq!(name, "lambda"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn default_sequence_leaves_out_anatomy() {
        assert!(!Demo::DEFAULT.contains(&Demo::Anatomy));
        assert_eq!(Demo::DEFAULT[..], Demo::ALL[..8]);
    }
}
