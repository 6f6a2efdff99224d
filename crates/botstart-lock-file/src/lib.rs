//! File lock module.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod file;

pub use file::FileLockService;
