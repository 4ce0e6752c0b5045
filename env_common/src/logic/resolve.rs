use std::collections::HashMap;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use s3deploy_defs::{
    collect_output_values, BucketConfiguration, NotificationError, StackDescription,
};

// One function ARN with an optional version or alias qualifier. Outputs may hold
// several ARNs joined by commas or whitespace, or embed one in a longer path such
// as an API Gateway integration URI ending in `/invocations`.
static FUNCTION_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\s,/]*:function:([A-Za-z0-9_-]+)(?::[A-Za-z0-9_$-]+)?").unwrap()
});

// Qualified ARNs carry the published version, e.g. `...:function:name:3`
static VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r":\d$").unwrap());

/// Deployed function ARNs keyed by function name, built once from stack outputs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FunctionArnIndex {
    arns: HashMap<String, String>,
}

impl FunctionArnIndex {
    pub fn from_stacks(stacks: &[StackDescription]) -> Self {
        Self::from_output_values(&collect_output_values(stacks))
    }

    /// The first ARN referencing a function wins.
    pub fn from_output_values(values: &[String]) -> Self {
        let mut arns = HashMap::new();
        for value in values {
            for captures in FUNCTION_REFERENCE.captures_iter(value) {
                let function_name = captures[1].to_string();
                let arn = VERSION_SUFFIX.replace(&captures[0], "").to_string();
                debug!("Found deployed function {} at {}", function_name, arn);
                arns.entry(function_name).or_insert(arn);
            }
        }
        FunctionArnIndex { arns }
    }

    pub fn get(&self, function_name: &str) -> Option<&str> {
        self.arns.get(function_name).map(|arn| arn.as_str())
    }

    pub fn len(&self) -> usize {
        self.arns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arns.is_empty()
    }
}

/// Swaps every function name placeholder for the deployed ARN. Fails on the
/// first function without a deployed ARN, leaving nothing half resolved.
pub fn resolve_function_arns(
    configurations: Vec<BucketConfiguration>,
    index: &FunctionArnIndex,
) -> Result<Vec<BucketConfiguration>, NotificationError> {
    let mut resolved = Vec::with_capacity(configurations.len());
    for mut configuration in configurations {
        for entry in configuration.entries_mut().iter_mut() {
            let arn = index.get(&entry.lambda_function_arn).ok_or_else(|| {
                NotificationError::FunctionNotDeployed(entry.lambda_function_arn.clone())
            })?;
            entry.lambda_function_arn = arn.to_string();
        }
        resolved.push(configuration);
    }
    info!(
        "Resolved function ARNs for {} bucket(s) using {} deployed function(s)",
        resolved.len(),
        index.len()
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use s3deploy_defs::{NotificationEntry, StackOutput};

    fn configuration(bucket: &str, function_names: &[&str]) -> BucketConfiguration {
        let mut configuration = BucketConfiguration::new(bucket);
        for name in function_names {
            configuration.entries_mut().push(NotificationEntry {
                id: format!("trigger--{}--when--s3ObjectCreated", name),
                lambda_function_arn: name.to_string(),
                events: vec!["s3:ObjectCreated:*".to_string()],
                filter: None,
            });
        }
        configuration
    }

    #[test]
    fn test_index_strips_version_qualifier() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn:3".to_string(),
            "arn:aws:lambda:eu-west-1:123456789012:function:otherFn".to_string(),
            "https://abc.execute-api.eu-west-1.amazonaws.com/dev".to_string(),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn")
        );
        assert_eq!(
            index.get("otherFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:otherFn")
        );
    }

    #[test]
    fn test_first_matching_output_wins() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn".to_string(),
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn:3".to_string(),
        ]);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn")
        );

        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn:3".to_string(),
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn".to_string(),
        ]);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn")
        );
    }

    #[test]
    fn test_only_single_digit_versions_are_stripped() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:myFn:12".to_string(),
        ]);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn:12")
        );
    }

    #[test]
    fn test_name_match_is_exact() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:myFnOther:1".to_string(),
        ]);
        assert_eq!(index.get("myFn"), None);
    }

    #[test]
    fn test_index_reads_arn_inside_invocation_uri() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:apigateway:eu-west-1:lambda:path/2015-03-31/functions/arn:aws:lambda:eu-west-1:123456789012:function:myFn/invocations".to_string(),
        ]);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn")
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_index_reads_every_arn_in_joined_list() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:a:1, arn:aws:lambda:eu-west-1:123456789012:function:b".to_string(),
            "arn:aws:lambda:eu-west-1:123456789012:function:c:live arn:aws:lambda:eu-west-1:123456789012:function:d:4".to_string(),
        ]);
        assert_eq!(index.len(), 4);
        assert_eq!(
            index.get("a"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:a")
        );
        assert_eq!(
            index.get("b"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:b")
        );
        assert_eq!(
            index.get("c"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:c:live")
        );
        assert_eq!(
            index.get("d"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:d")
        );
    }

    #[test]
    fn test_index_from_stacks_ignores_missing_values() {
        let stacks = vec![StackDescription {
            stack_name: Some("svc-dev".to_string()),
            outputs: vec![
                StackOutput {
                    output_key: Some("MyFnLambdaFunctionQualifiedArn".to_string()),
                    output_value: None,
                },
                StackOutput {
                    output_key: Some("MyFnLambdaFunctionQualifiedArn".to_string()),
                    output_value: Some(
                        "arn:aws:lambda:eu-west-1:123456789012:function:myFn:7".to_string(),
                    ),
                },
            ],
        }];
        let index = FunctionArnIndex::from_stacks(&stacks);
        assert_eq!(
            index.get("myFn"),
            Some("arn:aws:lambda:eu-west-1:123456789012:function:myFn")
        );
    }

    #[test]
    fn test_resolve_function_arns() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:a:1".to_string(),
            "arn:aws:lambda:eu-west-1:123456789012:function:b".to_string(),
        ]);
        let resolved = resolve_function_arns(
            vec![configuration("uploads", &["a", "b"]), configuration("archive", &["b"])],
            &index,
        )
        .unwrap();

        assert_eq!(
            resolved
                .iter()
                .flat_map(|c| c.entries().iter().map(|e| e.lambda_function_arn.as_str()))
                .collect::<Vec<_>>(),
            vec![
                "arn:aws:lambda:eu-west-1:123456789012:function:a",
                "arn:aws:lambda:eu-west-1:123456789012:function:b",
                "arn:aws:lambda:eu-west-1:123456789012:function:b",
            ]
        );
        // Identifiers stay keyed on the function name
        assert_eq!(resolved[0].entries()[0].id, "trigger--a--when--s3ObjectCreated");
    }

    #[test]
    fn test_resolve_fails_for_undeployed_function() {
        let index = FunctionArnIndex::from_output_values(&[
            "arn:aws:lambda:eu-west-1:123456789012:function:a".to_string(),
        ]);
        let result =
            resolve_function_arns(vec![configuration("uploads", &["a", "missing"])], &index);
        match result {
            Err(NotificationError::FunctionNotDeployed(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected FunctionNotDeployed, got {:?}", other),
        }
    }
}
