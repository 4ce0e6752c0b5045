use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("It looks like the function {0} has not yet been deployed. You must use 'sls deploy' before doing 's3deploy events'.")]
    FunctionNotDeployed(String),

    #[error("Failed to describe stacks: {0}")]
    DescribeStacks(anyhow::Error),

    #[error(
        "Failed to update notification configuration for {}; buckets already updated: [{}]",
        format_failed_buckets(.failed),
        .succeeded.join(", ")
    )]
    ApplyFailed {
        failed: Vec<(String, String)>,
        succeeded: Vec<String>,
    },

    #[error("Invalid service manifest: {0}")]
    Manifest(String),

    #[error("Other error occurred: {0}")]
    Other(#[from] anyhow::Error),
}

fn format_failed_buckets(failed: &[(String, String)]) -> String {
    failed
        .iter()
        .map(|(bucket, message)| format!("{} ({})", bucket, message))
        .collect::<Vec<String>>()
        .join(", ")
}
