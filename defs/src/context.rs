use serde::{Deserialize, Serialize};

pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Where a run is addressed. `stack_name` of `None` means every stack in the region.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DeployContext {
    pub stage: String,
    pub region: String,
    pub stack_name: Option<String>,
}
