use s3deploy_defs::{DeployContext, ServiceManifest, DEFAULT_REGION, DEFAULT_STAGE};

/// Values given on the command line, each one wins over every other source.
#[derive(Clone, Debug, Default)]
pub struct ContextOverrides {
    pub stage: Option<String>,
    pub region: Option<String>,
    pub stack_name: Option<String>,
    pub all_stacks: bool,
}

pub fn resolve_deploy_context(
    overrides: &ContextOverrides,
    manifest: &ServiceManifest,
) -> DeployContext {
    resolve_deploy_context_with(overrides, manifest, |key| std::env::var(key).ok())
}

/// Precedence: override, environment, manifest provider section, default.
pub fn resolve_deploy_context_with<F>(
    overrides: &ContextOverrides,
    manifest: &ServiceManifest,
    env: F,
) -> DeployContext
where
    F: Fn(&str) -> Option<String>,
{
    let first_env = |keys: &[&str]| {
        keys.iter()
            .filter_map(|key| env(*key))
            .find(|value| !value.is_empty())
    };

    let stage = overrides
        .stage
        .clone()
        .or_else(|| first_env(&["SLS_STAGE", "STAGE"]))
        .or_else(|| manifest.provider.stage.clone())
        .unwrap_or_else(|| DEFAULT_STAGE.to_string());

    let region = overrides
        .region
        .clone()
        .or_else(|| first_env(&["AWS_REGION", "AWS_DEFAULT_REGION"]))
        .or_else(|| manifest.provider.region.clone())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    let stack_name = if overrides.all_stacks {
        None
    } else {
        Some(
            overrides
                .stack_name
                .clone()
                .unwrap_or_else(|| manifest.default_stack_name(&stage)),
        )
    };

    DeployContext {
        stage,
        region,
        stack_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_service_manifest;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn manifest() -> ServiceManifest {
        parse_service_manifest(
            r#"
service: media
provider:
  stage: staging
  region: eu-west-1
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_manifest_values_used_without_env() {
        let context =
            resolve_deploy_context_with(&ContextOverrides::default(), &manifest(), |_| None);
        assert_eq!(
            context,
            DeployContext {
                stage: "staging".to_string(),
                region: "eu-west-1".to_string(),
                stack_name: Some("media-staging".to_string()),
            }
        );
    }

    #[test]
    fn test_env_wins_over_manifest_and_flags_win_over_env() {
        let env: HashMap<&str, &str> = [("STAGE", "qa"), ("AWS_REGION", "us-west-2")].into();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let context = resolve_deploy_context_with(&ContextOverrides::default(), &manifest(), lookup);
        assert_eq!(context.stage, "qa");
        assert_eq!(context.region, "us-west-2");
        assert_eq!(context.stack_name.as_deref(), Some("media-qa"));

        let overrides = ContextOverrides {
            stage: Some("prod".to_string()),
            region: Some("ap-south-1".to_string()),
            stack_name: Some("custom".to_string()),
            all_stacks: false,
        };
        let context = resolve_deploy_context_with(&overrides, &manifest(), lookup);
        assert_eq!(context.stage, "prod");
        assert_eq!(context.region, "ap-south-1");
        assert_eq!(context.stack_name.as_deref(), Some("custom"));
    }

    #[test]
    fn test_defaults_and_all_stacks() {
        let manifest = parse_service_manifest("service: bare").unwrap();
        let overrides = ContextOverrides {
            all_stacks: true,
            ..Default::default()
        };
        let context = resolve_deploy_context_with(&overrides, &manifest, |_| None);
        assert_eq!(context.stage, DEFAULT_STAGE);
        assert_eq!(context.region, DEFAULT_REGION);
        assert_eq!(context.stack_name, None);
    }
}
