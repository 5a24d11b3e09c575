use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use circularize::{CropSpec, circularize_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Map the `-v` count to the most verbose level that gets printed.
pub fn level_for_verbosity(count: u8) -> Level {
    match count {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Filter for the `-v` count. Built from the count alone, no environment lookup.
pub fn filter_for_verbosity(count: u8) -> EnvFilter {
    EnvFilter::default().add_directive(LevelFilter::from_level(level_for_verbosity(count)).into())
}

fn init_logging(verbosity: u8) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for_verbosity(verbosity))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn resolve_spec(args: &CliArgs) -> Result<CropSpec, AppError> {
    let preset = match &args.params {
        Some(path) => {
            info!("Loading crop parameters from: {:?}", path);
            CropSpec::from_json_file(path)?
        }
        None => CropSpec::default(),
    };
    Ok(preset.overridden_by(args.crop_spec()))
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.verbose)?;

    let spec = resolve_spec(&args)?;
    let output = args.output();
    let region = circularize_to_path(&args.path, &output, &spec)?;
    info!(
        "Successfully processed: {:?} -> {:?} ({} px circle from {})",
        args.path,
        output,
        region.side(),
        region
    );
    Ok(())
}
