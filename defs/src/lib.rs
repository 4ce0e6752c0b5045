mod context;
mod errors;
mod manifest;
mod notification;
mod provider;
mod stack;

pub use context::{DeployContext, DEFAULT_REGION, DEFAULT_STAGE};
pub use errors::NotificationError;
pub use manifest::{
    get_function_name, EventBinding, ExistingBucketBinding, FilterRuleSpec, FunctionDefinition,
    FunctionManifest, ProviderSection, ServiceManifest, ServiceName,
};
pub use notification::{
    get_notification_identifier, BucketConfiguration, FilterRule, KeyFilter, NotificationConfiguration,
    NotificationEntry, NotificationFilter, DEFAULT_BUCKET_EVENT,
};
pub use provider::CloudProvider;
pub use stack::{collect_output_values, StackDescription, StackOutput};
