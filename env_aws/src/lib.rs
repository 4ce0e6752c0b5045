mod api_bucket;
mod api_stack;
mod provider;
mod utils;

pub use api_bucket::put_bucket_notification_configuration;
pub use api_stack::describe_stacks;
pub use provider::AwsCloudProvider;
