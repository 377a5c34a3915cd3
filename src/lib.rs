//! LabelMe to bounding-box label converter
//!
//! This library converts LabelMe JSON annotations into one bounding-box label
//! file per image, in normalized or pixel coordinates, for object detection
//! training.

pub mod config;
pub mod conversion;
pub mod dataset;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{convert_to_label_records, format_label_record, process_annotation};
pub use dataset::process_dataset;
pub use error::ConvertError;
pub use io::{collect_json_files, resolve_image, setup_output_directories};
pub use types::{
    AnnotationDocument, BoundingBox, ClassTable, ConversionOutcome, DocumentFailure, ImageSource,
    OutputDirs, ProcessingStats, ResolvedImage, Shape,
};
