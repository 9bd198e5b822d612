//! Runnable demonstrations of closure capture: by value, by reference, mutable
//! copies, closures stored in variables, and closures capturing `self`,
//! contrasted with hand-written callable objects.

#[cfg(all(feature = "function-object", feature = "lambda-expression"))]
compile_error!("Both `function-object` and `lambda-expression` enabled");

#[cfg(not(any(feature = "function-object", feature = "lambda-expression")))]
compile_error!("Enable one of `function-object` or `lambda-expression`");

pub mod callable;
pub mod demos;
pub mod error;
pub mod numbers;
pub mod runner;

pub use crate::callable::{AbsLess, CanDivide, Function};
pub use crate::demos::Demo;
pub use crate::error::{Error, Result};
pub use crate::numbers::Numbers;
pub use crate::runner::{Builder, Runner};
