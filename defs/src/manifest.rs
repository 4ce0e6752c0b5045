use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One filter rule as written in the manifest, e.g. `{ prefix: images/ }`.
/// Key order is preserved since each key becomes one S3 filter rule.
pub type FilterRuleSpec = IndexMap<String, String>;

// These are only used to parse serverless.yml, nothing here is written back

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum ServiceName {
    Name(String),
    Object { name: String },
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ProviderSection {
    pub name: Option<String>,
    pub stage: Option<String>,
    pub region: Option<String>,
    #[serde(rename = "stackName")]
    pub stack_name: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServiceManifest {
    pub service: ServiceName,
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionManifest>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct FunctionManifest {
    pub name: Option<String>,
    pub events: Option<Vec<EventBinding>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum EventBinding {
    ExistingBucket {
        #[serde(rename = "existingS3")]
        existing_s3: ExistingBucketBinding,
    },
    // http, schedule, sqs, s3 and every other event type the framework knows about
    Other(serde_yaml::Value),
}

impl EventBinding {
    pub fn existing_bucket(&self) -> Option<&ExistingBucketBinding> {
        match self {
            EventBinding::ExistingBucket { existing_s3 } => Some(existing_s3),
            EventBinding::Other(_) => None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct ExistingBucketBinding {
    pub bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(
        default,
        rename = "bucketEvents",
        skip_serializing_if = "Option::is_none"
    )]
    pub bucket_events: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<FilterRuleSpec>>,
    #[serde(default, rename = "eventRules", skip_serializing_if = "Option::is_none")]
    pub event_rules: Option<Vec<FilterRuleSpec>>,
}

impl ExistingBucketBinding {
    /// `events` takes precedence over `bucketEvents`.
    pub fn declared_events(&self) -> Option<&[String]> {
        self.events
            .as_deref()
            .or(self.bucket_events.as_deref())
    }

    /// `rules` takes precedence over `eventRules`.
    pub fn declared_rules(&self) -> &[FilterRuleSpec] {
        self.rules
            .as_deref()
            .or(self.event_rules.as_deref())
            .unwrap_or(&[])
    }
}

/// A function as seen after manifest resolution: `name` is the name the
/// function is deployed under, which is what shows up in its ARN.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
    pub key: String,
    pub name: String,
    pub events: Vec<EventBinding>,
}

pub fn get_function_name(service: &str, stage: &str, function_key: &str) -> String {
    format!("{}-{}-{}", service, stage, function_key)
}

impl ServiceManifest {
    pub fn service_name(&self) -> &str {
        match &self.service {
            ServiceName::Name(name) => name,
            ServiceName::Object { name } => name,
        }
    }

    pub fn default_stack_name(&self, stage: &str) -> String {
        match &self.provider.stack_name {
            Some(stack_name) => stack_name.clone(),
            None => format!("{}-{}", self.service_name(), stage),
        }
    }

    pub fn function_definitions(&self, stage: &str) -> Vec<FunctionDefinition> {
        self.functions
            .iter()
            .map(|(key, function)| FunctionDefinition {
                key: key.clone(),
                name: function
                    .name
                    .clone()
                    .unwrap_or_else(|| get_function_name(self.service_name(), stage, key)),
                events: function.events.clone().unwrap_or_default(),
            })
            .collect()
    }
}
