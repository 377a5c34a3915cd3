use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

// Extensions tried, in order, when looking for an image next to its JSON file
pub const SAME_BASENAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// Suffix of the image materialized from an embedded imageData payload
pub const EMBEDDED_IMAGE_SUFFIX: &str = "_fromjson.jpg";

// The Shape struct representing one labeled polygon or point set
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Shape {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub points: Vec<(f64, f64)>,
}

impl Shape {
    /// Label used for class lookup, without surrounding whitespace
    pub fn class_label(&self) -> &str {
        self.label.trim()
    }
}

/// The subset of a LabelMe document this converter consumes.
///
/// Every field is optional in the file: `imagePath` and `imageData` default to
/// absent and `shapes` to empty. Unknown keys are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDocument {
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl AnnotationDocument {
    /// Declared image reference, treating an empty string as absent
    pub fn image_reference(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Embedded base64 payload, treating an empty string as absent
    pub fn embedded_image(&self) -> Option<&str> {
        self.image_data.as_deref().filter(|d| !d.is_empty())
    }
}

/// Ordered label to class id mapping, built once from the user's class list.
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl ClassTable {
    /// Ids follow list order; a repeated name keeps the id of its first occurrence.
    pub fn new<S: AsRef<str>>(classes: &[S]) -> Self {
        let mut ids = HashMap::with_capacity(classes.len());
        let mut names = Vec::with_capacity(classes.len());
        for (id, name) in classes.iter().enumerate() {
            let name = name.as_ref();
            if !ids.contains_key(name) {
                ids.insert(name.to_string(), id);
                names.push(name.to_string());
            }
        }
        Self { ids, names }
    }

    pub fn id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names.iter().map(|name| (name.as_str(), self.ids[name]))
    }
}

impl fmt::Display for ClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, id)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", name, id)?;
        }
        f.write_str("}")
    }
}

/// Axis-aligned envelope of a shape's points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Independent min/max over x and y. `None` when there are no points.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let (x_min, y_min, x_max, y_max) = points.iter().fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |(x_min, y_min, x_max, y_max), &(x, y)| {
                (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
            },
        );
        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

// Which resolution strategy located the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    RelativeReference,
    AbsoluteReference,
    SameBasename,
    Embedded,
}

// An image located for an annotation document
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub source: ImageSource,
}

// Struct to hold the paths to the output directories
#[derive(Debug, Clone)]
pub struct OutputDirs {
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
}

// Result of converting one annotation document
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub image_path: PathBuf,
    pub label_path: PathBuf,
    pub boxes: usize,
}

// A JSON file that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub file_name: String,
    pub message: String,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub documents_processed: usize,
    pub total_boxes: usize,
    pub failures: Vec<DocumentFailure>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, boxes: usize) {
        self.documents_processed += 1;
        self.total_boxes += boxes;
    }

    pub fn record_failure(&mut self, file_name: String, message: String) {
        self.failures.push(DocumentFailure { file_name, message });
    }

    pub fn failed_documents(&self) -> usize {
        self.failures.len()
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Processed JSON files: {}", self.documents_processed);
        log::info!("Total boxes exported: {}", self.total_boxes);
        if !self.failures.is_empty() {
            log::warn!("Failed JSON files: {}", self.failed_documents());
        }
    }
}
