use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StackOutput {
    pub output_key: Option<String>,
    pub output_value: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct StackDescription {
    pub stack_name: Option<String>,
    #[serde(default)]
    pub outputs: Vec<StackOutput>,
}

/// Outputs of all stacks in the order they were returned, valueless outputs dropped.
pub fn collect_output_values(stacks: &[StackDescription]) -> Vec<String> {
    stacks
        .iter()
        .flat_map(|stack| stack.outputs.iter())
        .filter_map(|output| output.output_value.clone())
        .filter(|value| !value.is_empty())
        .collect()
}
