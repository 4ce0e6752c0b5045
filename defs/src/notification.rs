use serde::{Deserialize, Serialize};

pub const DEFAULT_BUCKET_EVENT: &str = "s3:ObjectCreated:*";

/// Identifier for a notification entry. Equal for equal function name and
/// event list, so a later run overwrites the entry instead of adding one.
pub fn get_notification_identifier(function_name: &str, events: &[String]) -> String {
    let events: String = events
        .join(",")
        .chars()
        .filter(|c| !matches!(c, '.' | ':' | '*'))
        .collect();
    format!("trigger--{}--when--{}", function_name, events)
}

// Field names match the S3 PutBucketNotificationConfiguration payload

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FilterRule {
    pub name: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct KeyFilter {
    pub filter_rules: Vec<FilterRule>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationFilter {
    pub key: KeyFilter,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationEntry {
    pub id: String,
    /// Holds the function name until the ARN has been resolved.
    pub lambda_function_arn: String,
    pub events: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<NotificationFilter>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationConfiguration {
    pub lambda_function_configurations: Vec<NotificationEntry>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BucketConfiguration {
    pub bucket: String,
    pub notification_configuration: NotificationConfiguration,
}

impl BucketConfiguration {
    pub fn new(bucket: &str) -> Self {
        BucketConfiguration {
            bucket: bucket.to_string(),
            notification_configuration: NotificationConfiguration::default(),
        }
    }

    pub fn entries(&self) -> &[NotificationEntry] {
        &self.notification_configuration.lambda_function_configurations
    }

    pub fn entries_mut(&mut self) -> &mut Vec<NotificationEntry> {
        &mut self.notification_configuration.lambda_function_configurations
    }
}
