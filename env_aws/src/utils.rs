use aws_config::SdkConfig;

pub async fn get_aws_config(region: &str) -> SdkConfig {
    aws_config::from_env()
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}

pub fn s3_client(config: &SdkConfig, endpoint_url: Option<&str>) -> aws_sdk_s3::Client {
    match endpoint_url {
        // Local emulators (localstack, minio) only serve path-style requests
        Some(endpoint_url) => {
            let s3_config = aws_sdk_s3::config::Builder::from(config)
                .endpoint_url(endpoint_url)
                .force_path_style(true)
                .build();
            aws_sdk_s3::Client::from_conf(s3_config)
        }
        None => aws_sdk_s3::Client::new(config),
    }
}

pub fn cloudformation_client(
    config: &SdkConfig,
    endpoint_url: Option<&str>,
) -> aws_sdk_cloudformation::Client {
    match endpoint_url {
        Some(endpoint_url) => {
            let cloudformation_config = aws_sdk_cloudformation::config::Builder::from(config)
                .endpoint_url(endpoint_url)
                .build();
            aws_sdk_cloudformation::Client::from_conf(cloudformation_config)
        }
        None => aws_sdk_cloudformation::Client::new(config),
    }
}
