//! Build tool runner.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod make;

pub use make::MakeActionRunner;
