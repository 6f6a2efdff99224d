//! Action runner interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
mod status;

pub use errors::RunnerError;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockActionRunner;
pub use interface::ActionRunner;
pub use status::ActionStatus;
