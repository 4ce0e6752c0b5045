use async_trait::async_trait;

use crate::{BucketConfiguration, StackDescription};

#[async_trait]
pub trait CloudProvider: Send + Sync {
    fn get_stage(&self) -> &str;
    fn get_region(&self) -> &str;
    /// Describes the named stack, or every stack when `stack_name` is `None`.
    /// A named stack that does not exist yields an empty list, not an error.
    async fn describe_stacks(
        &self,
        stack_name: Option<&str>,
    ) -> Result<Vec<StackDescription>, anyhow::Error>;
    /// Replaces the whole notification configuration of the bucket.
    async fn put_bucket_notification_configuration(
        &self,
        configuration: &BucketConfiguration,
    ) -> Result<(), anyhow::Error>;
}
