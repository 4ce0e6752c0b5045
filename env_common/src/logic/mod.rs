mod apply;
mod attach;
mod extract;
mod merge;
mod resolve;

pub use apply::{apply_bucket_configurations, ApplyReport};
pub use attach::{
    attach_existing_bucket_events, collect_bucket_configurations, AttachOptions, AttachOutcome,
};
pub use extract::extract_function_configurations;
pub use merge::merge_bucket_configurations;
pub use resolve::{resolve_function_arns, FunctionArnIndex};
