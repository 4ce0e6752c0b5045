use indexmap::IndexMap;
use s3deploy_defs::{BucketConfiguration, NotificationEntry};

/// Groups entries per bucket name. Buckets keep the order they were first
/// seen in and entries keep their encounter order within a bucket.
pub fn merge_bucket_configurations(
    configurations: Vec<(String, NotificationEntry)>,
) -> Vec<BucketConfiguration> {
    let mut buckets: IndexMap<String, BucketConfiguration> = IndexMap::new();
    for (bucket, entry) in configurations {
        buckets
            .entry(bucket)
            .or_insert_with_key(|bucket| BucketConfiguration::new(bucket))
            .entries_mut()
            .push(entry);
    }
    buckets.into_values().collect()
}
