use std::path::Path;

use log::{info, warn};
use s3deploy_defs::{NotificationError, ServiceManifest};

pub fn read_service_manifest(path: &Path) -> Result<ServiceManifest, NotificationError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        NotificationError::Manifest(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let manifest = parse_service_manifest(&contents)
        .map_err(|e| NotificationError::Manifest(format!("{}: {}", path.display(), e)))?;
    info!(
        "Read manifest for service {} with {} function(s) from {}",
        manifest.service_name(),
        manifest.functions.len(),
        path.display()
    );
    for (field, value) in unresolved_variables(&manifest) {
        warn!(
            "{} is set to {} which contains a variable; it is used literally, pass the value with a flag or environment variable instead",
            field, value
        );
    }
    Ok(manifest)
}

/// Fields holding a `${...}` variable reference. Variables are not
/// interpolated, so these values are used as written.
pub fn unresolved_variables(manifest: &ServiceManifest) -> Vec<(String, String)> {
    let mut fields = vec![("service".to_string(), manifest.service_name().to_string())];
    let provider = &manifest.provider;
    for (field, value) in [
        ("provider.stage", &provider.stage),
        ("provider.region", &provider.region),
        ("provider.stackName", &provider.stack_name),
    ] {
        if let Some(value) = value {
            fields.push((field.to_string(), value.clone()));
        }
    }
    for (key, function) in &manifest.functions {
        if let Some(name) = &function.name {
            fields.push((format!("functions.{}.name", key), name.clone()));
        }
        for binding in function.events.iter().flatten() {
            if let Some(existing) = binding.existing_bucket() {
                fields.push((
                    format!("functions.{}.existingS3.bucket", key),
                    existing.bucket.clone(),
                ));
            }
        }
    }
    fields.retain(|(_, value)| value.contains("${"));
    fields
}

pub fn parse_service_manifest(contents: &str) -> Result<ServiceManifest, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}
