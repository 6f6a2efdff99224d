pub mod launch_pipeline;
pub mod run_pipeline;
pub mod unlock_instance;
