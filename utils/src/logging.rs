use std::env;

use chrono::Local;
use log::LevelFilter;

fn level_from_env() -> LevelFilter {
    match env::var("LOG_LEVEL").as_deref() {
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // Default to Warn if variable is unset or has an unrecognized value
    }
}

/// `verbose` raises the level to at least Info regardless of `LOG_LEVEL`.
pub fn setup_logging(verbose: bool) -> Result<(), fern::InitError> {
    let level = match level_from_env() {
        LevelFilter::Warn | LevelFilter::Error if verbose => LevelFilter::Info,
        level => level,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // The AWS SDK is chatty at info
        .level_for("aws_config", LevelFilter::Warn)
        .level_for("aws_smithy_runtime", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
