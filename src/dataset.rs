use indicatif::ProgressBar;
use log::{error, info};
use std::path::Path;

use crate::config::Args;
use crate::conversion::process_annotation;
use crate::error::Result;
use crate::io::{collect_json_files, setup_output_directories};
use crate::types::{ClassTable, ProcessingStats};
use crate::utils::create_progress_bar;

/// Main conversion pipeline.
///
/// Documents are converted one at a time in sorted order. A document that
/// fails is logged and skipped; only setting up the output directories can
/// fail the whole run.
pub fn process_dataset(args: &Args) -> Result<ProcessingStats> {
    let output_dirs = setup_output_directories(&args.out_dir)?;
    let class_table = ClassTable::new(&args.classes);

    let json_files = collect_json_files(&args.input_dir);
    if json_files.is_empty() {
        info!("No .json files found in {}", args.input_dir.display());
        return Ok(ProcessingStats::new());
    }
    info!("Found {} JSON files.", json_files.len());

    let pb = if args.verbose {
        ProgressBar::hidden()
    } else {
        create_progress_bar(json_files.len() as u64, "Convert")
    };

    let mut stats = ProcessingStats::new();
    for json_path in &json_files {
        match process_annotation(json_path, &output_dirs, &class_table, args) {
            Ok(outcome) => stats.record_success(outcome.boxes),
            Err(e) => {
                let name = file_name(json_path);
                let message = e.to_string();
                pb.suspend(|| error!("[ERROR] {}: {}", name, message));
                stats.record_failure(name, message);
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Conversion complete");

    stats.print_summary();
    info!("Output written to: {}", args.out_dir.display());
    info!("Images: {}", output_dirs.images_dir.display());
    info!("Labels: {}", output_dirs.labels_dir.display());
    info!("Class mapping (name -> id): {}", class_table);
    info!("Label format: {}", args.label_format_description());

    Ok(stats)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
