use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::AnnotationDocument;

/// Read and parse a single JSON file into an AnnotationDocument.
/// The document is deserialized straight from a buffered file stream.
pub fn read_and_parse_json(path: &Path) -> Result<AnnotationDocument> {
    let file = fs::File::open(path)?;
    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok(document)
}

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Make sure an output directory exists, keeping anything already inside it
pub fn create_output_directory(path: &Path) -> std::io::Result<PathBuf> {
    if !path.is_dir() {
        log::debug!("Creating directory {:?}", path);
        fs::create_dir_all(path)?;
    }
    Ok(path.to_path_buf())
}

/// File name component of `path`, unchanged
pub fn output_file_name(path: &Path) -> Option<OsString> {
    path.file_name().map(OsStr::to_os_string)
}

/// File stem of `path`, unchanged
pub fn output_file_stem(path: &Path) -> Option<OsString> {
    path.file_stem().map(OsStr::to_os_string)
}
