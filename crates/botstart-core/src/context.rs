use botstart_config::Config;
use botstart_lock_interface::LockService;
use botstart_runner_interface::ActionRunner;

use crate::{shutdown::ShutdownService, CoreModule};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub runner_service: &'a (dyn ActionRunner + 'a),
    pub lock_service: &'a (dyn LockService + 'a),
    pub shutdown_service: &'a (dyn ShutdownService + 'a),
}
