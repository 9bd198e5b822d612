//! Main Crate Error

#[derive(thiserror::Error, Debug)]
/// crate error enum.
pub enum Error {
    /// A demo name that no demo answers to.
    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    /// Checked addition failed inside a fallible closure.
    #[error("Overflow adding {x} and {y}")]
    Overflow { x: i32, y: i32 },

    #[error(transparent)]
    /// Transparent [std::io::Error]
    IO(#[from] std::io::Error),
}

// Alias Result to be the crate Result.
pub type Result<T, E = Error> = core::result::Result<T, E>;
