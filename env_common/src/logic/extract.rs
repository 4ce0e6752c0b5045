use log::warn;
use s3deploy_defs::{
    get_notification_identifier, EventBinding, ExistingBucketBinding, FilterRule,
    FunctionDefinition, KeyFilter, NotificationEntry, NotificationFilter, DEFAULT_BUCKET_EVENT,
};

/// One `(bucket, entry)` pair per `existingS3` event of the function, in declaration order.
pub fn extract_function_configurations(
    function: &FunctionDefinition,
) -> Vec<(String, NotificationEntry)> {
    function
        .events
        .iter()
        .filter_map(|event| match event {
            EventBinding::ExistingBucket { existing_s3 } => Some(existing_s3),
            EventBinding::Other(value) => {
                if value.get("existingS3").is_some() {
                    warn!(
                        "Ignoring malformed existingS3 event on function {}: {:?}",
                        function.name, value
                    );
                }
                None
            }
        })
        .map(|binding| {
            (
                binding.bucket.clone(),
                get_notification_entry(&function.name, binding),
            )
        })
        .collect()
}

fn get_notification_entry(function_name: &str, binding: &ExistingBucketBinding) -> NotificationEntry {
    let events = match binding.declared_events() {
        Some(events) if !events.is_empty() => events.to_vec(),
        _ => vec![DEFAULT_BUCKET_EVENT.to_string()],
    };

    let filter_rules = binding
        .declared_rules()
        .iter()
        .flat_map(|rule| {
            rule.iter().map(|(name, value)| FilterRule {
                name: name.clone(),
                value: value.clone(),
            })
        })
        .collect::<Vec<FilterRule>>();

    // S3 treats a missing filter and an empty one differently
    let filter = if filter_rules.is_empty() {
        None
    } else {
        Some(NotificationFilter {
            key: KeyFilter { filter_rules },
        })
    };

    NotificationEntry {
        id: get_notification_identifier(function_name, &events),
        lambda_function_arn: function_name.to_string(),
        events,
        filter,
    }
}
