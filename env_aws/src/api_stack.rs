use anyhow::anyhow;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::{Output, Stack};
use log::{debug, info, warn};
use s3deploy_defs::{StackDescription, StackOutput};

/// Describes one stack, or every stack in the region when `stack_name` is `None`.
/// All result pages are followed. A named stack that does not exist yields an
/// empty list, the same as a region without stacks.
pub async fn describe_stacks(
    client: &aws_sdk_cloudformation::Client,
    stack_name: Option<&str>,
) -> Result<Vec<StackDescription>, anyhow::Error> {
    let mut stacks = vec![];
    let mut next_token: Option<String> = None;

    loop {
        let result = client
            .describe_stacks()
            .set_stack_name(stack_name.map(|name| name.to_string()))
            .set_next_token(next_token.clone())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let service_error = e.as_service_error();
                let code = service_error.and_then(|error| error.code());
                let message = service_error.and_then(|error| error.message());
                if let Some(stack_name) = stack_name {
                    if is_missing_stack_error(code, message) {
                        warn!("Stack {} does not exist, it has not been deployed yet", stack_name);
                        return Ok(vec![]);
                    }
                }
                return Err(anyhow!("{}", DisplayErrorContext(&e)));
            }
        };

        stacks.extend(response.stacks().iter().map(stack_description));

        next_token = response.next_token().map(|token| token.to_string());
        if next_token.is_none() {
            break;
        }
        debug!("Fetching next page of stacks");
    }

    info!(
        "Described {} stack(s) with {} output(s)",
        stacks.len(),
        stacks.iter().map(|s| s.outputs.len()).sum::<usize>()
    );
    Ok(stacks)
}

// CloudFormation reports an unknown stack name as
// `ValidationError: Stack with id <name> does not exist`
fn is_missing_stack_error(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some("ValidationError")
        && message.is_some_and(|message| message.contains("does not exist"))
}

fn stack_description(stack: &Stack) -> StackDescription {
    StackDescription {
        stack_name: stack.stack_name().map(|name| name.to_string()),
        outputs: stack_outputs(stack.outputs()),
    }
}

fn stack_outputs(outputs: &[Output]) -> Vec<StackOutput> {
    outputs
        .iter()
        .map(|output| StackOutput {
            output_key: output.output_key().map(|key| key.to_string()),
            output_value: output.output_value().map(|value| value.to_string()),
        })
        .collect()
}
