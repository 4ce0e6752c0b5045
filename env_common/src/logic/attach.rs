use log::info;
use s3deploy_defs::{BucketConfiguration, CloudProvider, FunctionDefinition, NotificationError};

use super::{
    apply_bucket_configurations, extract_function_configurations, merge_bucket_configurations,
    resolve_function_arns, ApplyReport, FunctionArnIndex,
};

#[derive(Clone, Debug, Default)]
pub struct AttachOptions {
    /// Stack to read function ARNs from, every stack in the region when `None`.
    pub stack_name: Option<String>,
    pub dry_run: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttachOutcome {
    NothingToAttach,
    DryRun(Vec<BucketConfiguration>),
    Applied(ApplyReport),
}

/// Unresolved configurations, function names still in place of ARNs.
pub fn collect_bucket_configurations(functions: &[FunctionDefinition]) -> Vec<BucketConfiguration> {
    merge_bucket_configurations(
        functions
            .iter()
            .flat_map(extract_function_configurations)
            .collect(),
    )
}

pub async fn attach_existing_bucket_events(
    provider: &dyn CloudProvider,
    functions: &[FunctionDefinition],
    options: &AttachOptions,
) -> Result<AttachOutcome, NotificationError> {
    let configurations = collect_bucket_configurations(functions);
    if configurations.is_empty() {
        info!("No existingS3 events declared, nothing to attach");
        return Ok(AttachOutcome::NothingToAttach);
    }

    let stacks = provider
        .describe_stacks(options.stack_name.as_deref())
        .await
        .map_err(NotificationError::DescribeStacks)?;
    let index = FunctionArnIndex::from_stacks(&stacks);
    let configurations = resolve_function_arns(configurations, &index)?;

    if options.dry_run {
        return Ok(AttachOutcome::DryRun(configurations));
    }

    let report = apply_bucket_configurations(provider, &configurations).await?;
    Ok(AttachOutcome::Applied(report))
}
