use clap::Parser;

use log::{error, info, warn};

use labelme2bbox::{process_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
    let args = Args::parse();

    if !args.input_dir.is_dir() {
        warn!(
            "The specified input directory does not exist: {}",
            args.input_dir.display()
        );
    }

    info!("Starting the conversion process...");

    if let Err(e) = process_dataset(&args) {
        error!("Failed to process dataset: {}", e);
    }
}
