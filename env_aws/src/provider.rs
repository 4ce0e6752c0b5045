use async_trait::async_trait;
use log::info;
use s3deploy_defs::{BucketConfiguration, CloudProvider, DeployContext, StackDescription};

use crate::utils::{cloudformation_client, get_aws_config, s3_client};

#[derive(Clone)]
pub struct AwsCloudProvider {
    pub stage: String,
    pub region: String,
    cloudformation: aws_sdk_cloudformation::Client,
    s3: aws_sdk_s3::Client,
}

impl AwsCloudProvider {
    /// `endpoint_url` points both clients at a local emulator instead of AWS.
    pub async fn new(context: &DeployContext, endpoint_url: Option<&str>) -> Self {
        info!(
            "Using stage: {} and region: {}",
            context.stage, context.region
        );
        let shared_config = get_aws_config(&context.region).await;
        AwsCloudProvider {
            stage: context.stage.clone(),
            region: context.region.clone(),
            cloudformation: cloudformation_client(&shared_config, endpoint_url),
            s3: s3_client(&shared_config, endpoint_url),
        }
    }
}

#[async_trait]
impl CloudProvider for AwsCloudProvider {
    fn get_stage(&self) -> &str {
        &self.stage
    }
    fn get_region(&self) -> &str {
        &self.region
    }
    async fn describe_stacks(
        &self,
        stack_name: Option<&str>,
    ) -> Result<Vec<StackDescription>, anyhow::Error> {
        crate::describe_stacks(&self.cloudformation, stack_name).await
    }
    async fn put_bucket_notification_configuration(
        &self,
        configuration: &BucketConfiguration,
    ) -> Result<(), anyhow::Error> {
        crate::put_bucket_notification_configuration(&self.s3, configuration).await
    }
}
