use anyhow::anyhow;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    Event, FilterRule, FilterRuleName, LambdaFunctionConfiguration, NotificationConfigurationFilter,
    S3KeyFilter,
};
use log::info;
use s3deploy_defs::{BucketConfiguration, NotificationConfiguration, NotificationEntry};

pub async fn put_bucket_notification_configuration(
    client: &aws_sdk_s3::Client,
    configuration: &BucketConfiguration,
) -> Result<(), anyhow::Error> {
    let notification_configuration =
        to_sdk_notification_configuration(&configuration.notification_configuration)?;

    client
        .put_bucket_notification_configuration()
        .bucket(&configuration.bucket)
        .notification_configuration(notification_configuration)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    info!(
        "Replaced notification configuration of bucket {} with {} entry(ies)",
        configuration.bucket,
        configuration.entries().len()
    );
    Ok(())
}

fn to_sdk_notification_configuration(
    configuration: &NotificationConfiguration,
) -> Result<aws_sdk_s3::types::NotificationConfiguration, anyhow::Error> {
    let lambda_function_configurations = configuration
        .lambda_function_configurations
        .iter()
        .map(to_sdk_lambda_function_configuration)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(aws_sdk_s3::types::NotificationConfiguration::builder()
        .set_lambda_function_configurations(Some(lambda_function_configurations))
        .build())
}

fn to_sdk_lambda_function_configuration(
    entry: &NotificationEntry,
) -> Result<LambdaFunctionConfiguration, anyhow::Error> {
    let filter = entry.filter.as_ref().map(|filter| {
        let filter_rules = filter
            .key
            .filter_rules
            .iter()
            .map(|rule| {
                FilterRule::builder()
                    .name(FilterRuleName::from(rule.name.as_str()))
                    .value(&rule.value)
                    .build()
            })
            .collect::<Vec<FilterRule>>();
        NotificationConfigurationFilter::builder()
            .key(
                S3KeyFilter::builder()
                    .set_filter_rules(Some(filter_rules))
                    .build(),
            )
            .build()
    });

    LambdaFunctionConfiguration::builder()
        .id(&entry.id)
        .lambda_function_arn(&entry.lambda_function_arn)
        .set_events(Some(
            entry
                .events
                .iter()
                .map(|event| Event::from(event.as_str()))
                .collect(),
        ))
        .set_filter(filter)
        .build()
        .map_err(|e| anyhow!("Invalid notification entry {}: {}", entry.id, e))
}
