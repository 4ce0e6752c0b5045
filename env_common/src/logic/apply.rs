use futures::future::join_all;
use log::{error, info};
use s3deploy_defs::{BucketConfiguration, CloudProvider, NotificationError};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApplyReport {
    pub updated_buckets: Vec<String>,
}

/// Replaces the notification configuration of every bucket, all buckets at once.
///
/// Each call is a full replace: notifications on the bucket that are not in
/// `configurations` are removed. A failure on one bucket does not undo the
/// buckets that were already updated; they are listed in the error instead.
pub async fn apply_bucket_configurations(
    provider: &dyn CloudProvider,
    configurations: &[BucketConfiguration],
) -> Result<ApplyReport, NotificationError> {
    println!(
        "Attaching event(s) to: {}",
        configurations
            .iter()
            .map(|configuration| configuration.bucket.as_str())
            .collect::<Vec<&str>>()
            .join(" ")
    );
    info!(
        "Applying {} bucket notification configuration(s) for stage {} in region {}",
        configurations.len(),
        provider.get_stage(),
        provider.get_region()
    );

    let puts = configurations.iter().map(|configuration| async move {
        let result = provider
            .put_bucket_notification_configuration(configuration)
            .await;
        (configuration.bucket.clone(), result)
    });

    let mut updated_buckets = vec![];
    let mut failed = vec![];
    for (bucket, result) in join_all(puts).await {
        match result {
            Ok(()) => updated_buckets.push(bucket),
            Err(e) => {
                error!("Failed to update notification configuration of {}: {}", bucket, e);
                failed.push((bucket, e.to_string()));
            }
        }
    }

    if failed.is_empty() {
        Ok(ApplyReport { updated_buckets })
    } else {
        Err(NotificationError::ApplyFailed {
            failed,
            succeeded: updated_buckets,
        })
    }
}
