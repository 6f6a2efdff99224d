//! Launcher logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod outcome;
pub mod pipeline;
pub mod shutdown;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    launch_pipeline::LaunchPipeline, run_pipeline::RunPipeline, unlock_instance::UnlockInstance,
};

module! {
    pub CoreModule {
        components = [LaunchPipeline, RunPipeline, UnlockInstance],
        providers = []
    }
}
