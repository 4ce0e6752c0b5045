use colored::Colorize;
use log::info;
use s3deploy_aws::AwsCloudProvider;
use s3deploy_common::{attach_existing_bucket_events, AttachOptions, AttachOutcome};
use s3deploy_defs::NotificationError;
use s3deploy_utils::{read_service_manifest, resolve_deploy_context, ContextOverrides};

use crate::EventsArgs;

pub async fn handle_events(args: &EventsArgs) -> Result<(), NotificationError> {
    match run_events(args).await {
        Ok(AttachOutcome::NothingToAttach) => {
            info!("No existingS3 events found in {}", args.config.display());
            Ok(())
        }
        Ok(AttachOutcome::DryRun(configurations)) => {
            let rendered = serde_json::to_string_pretty(&configurations)
                .map_err(|e| NotificationError::Other(e.into()))?;
            println!("{}", rendered);
            Ok(())
        }
        Ok(AttachOutcome::Applied(report)) => {
            info!("Updated bucket(s): {}", report.updated_buckets.join(", "));
            println!("{}", "Done.".green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "Error attaching event(s)".red(), e);
            Err(e)
        }
    }
}

async fn run_events(args: &EventsArgs) -> Result<AttachOutcome, NotificationError> {
    let manifest = read_service_manifest(&args.config)?;
    let overrides = ContextOverrides {
        stage: args.stage.clone(),
        region: args.region.clone(),
        stack_name: args.stack_name.clone(),
        all_stacks: args.all_stacks,
    };
    let context = resolve_deploy_context(&overrides, &manifest);
    let functions = manifest.function_definitions(&context.stage);

    let provider = AwsCloudProvider::new(&context, args.endpoint_url.as_deref()).await;
    let options = AttachOptions {
        stack_name: context.stack_name.clone(),
        dry_run: args.dry_run,
    };
    attach_existing_bucket_events(&provider, &functions, &options).await
}
