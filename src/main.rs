use adfetch::core::config::{self, CliOverrides};
use adfetch::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adfetch", version, about = "Browse and download Amiga disk images")]
struct Args {
    /// Directory downloads are saved to
    #[arg(short, long)]
    target_dir: Option<String>,

    /// URL of the JSON catalog feed
    #[arg(short, long)]
    catalog_url: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = "adfetch.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("ADFetch {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            target_directory: args.target_dir,
            catalog_url: args.catalog_url,
        },
    );

    tui::run(resolved).await
}
