mod context;
mod logging;
mod manifest;

pub use context::{resolve_deploy_context, resolve_deploy_context_with, ContextOverrides};
pub use logging::setup_logging;
pub use manifest::{parse_service_manifest, read_service_manifest, unresolved_variables};
