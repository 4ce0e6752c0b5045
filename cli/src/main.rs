mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "s3deploy",
    version,
    about = "Attach event notifications on existing S3 buckets to deployed functions"
)]
struct Cli {
    /// Log at info level regardless of LOG_LEVEL
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the notification configuration of every bucket referenced by an existingS3 event
    Events(EventsArgs),
}

#[derive(Args)]
pub struct EventsArgs {
    /// Service manifest declaring the functions
    #[arg(short, long, default_value = "serverless.yml")]
    pub config: PathBuf,

    /// Stage, e.g. dev, prod
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Region, e.g. eu-west-1
    #[arg(short, long)]
    pub region: Option<String>,

    /// Stack to read function ARNs from, defaults to <service>-<stage>
    #[arg(long, conflicts_with = "all_stacks")]
    pub stack_name: Option<String>,

    /// Search the outputs of every stack in the region
    #[arg(long)]
    pub all_stacks: bool,

    /// Print the resolved configurations instead of applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Send S3 and CloudFormation requests to this endpoint, e.g. http://localhost:4566
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = s3deploy_utils::setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match &cli.command {
        Commands::Events(args) => {
            if commands::handle_events(args).await.is_err() {
                std::process::exit(1);
            }
        }
    }
}
