use anyhow::Result;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use gamemaster_fetch::Fetcher;

fn setup_logging() -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    // stderr only; data/ must hold nothing but the fetched file.
    WriteLogger::init(LevelFilter::Info, config, std::io::stderr())?;

    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;

    let fetcher = Fetcher::default();
    info!("gamemaster-fetch starting");

    match fetcher.run() {
        Ok(()) => {
            info!("Saved {:?}", fetcher.output_path());
            Ok(())
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            error!("Fetch failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
