use glob::glob;
use image::{DynamicImage, ImageFormat};
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::types::{
    AnnotationDocument, ImageSource, OutputDirs, ResolvedImage, EMBEDDED_IMAGE_SUFFIX,
    SAME_BASENAME_EXTENSIONS,
};
use crate::utils::create_output_directory;

/// Set up the `images/` and `labels/` output directories
pub fn setup_output_directories(out_dir: &Path) -> std::io::Result<OutputDirs> {
    let images_dir = create_output_directory(&out_dir.join("images"))?;
    let labels_dir = create_output_directory(&out_dir.join("labels"))?;
    Ok(OutputDirs {
        images_dir,
        labels_dir,
    })
}

/// List the `*.json` files directly inside `input_dir`, sorted by path
pub fn collect_json_files(input_dir: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/*.json",
        glob::Pattern::escape(&input_dir.to_string_lossy())
    );

    let mut json_files: Vec<PathBuf> = match glob(&pattern) {
        Ok(paths) => paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect(),
        Err(e) => {
            warn!("Invalid glob pattern {}: {}", pattern, e);
            Vec::new()
        }
    };
    json_files.sort();
    json_files
}

/// Locate the image an annotation document refers to.
///
/// Strategies, first hit wins:
/// 1. `imagePath` relative to the JSON file's directory
/// 2. `imagePath` as given
/// 3. the JSON file's stem with `.jpg`, `.jpeg` or `.png` next to it
/// 4. the embedded `imageData`, decoded and written to `<stem>_fromjson.jpg`
///    next to the JSON file
///
/// Returns `None` when nothing can be found or decoded. The first candidate
/// path that exists ends the search, even if it is not a readable image file.
pub fn resolve_image(json_path: &Path, document: &AnnotationDocument) -> Option<ResolvedImage> {
    let json_dir = json_path.parent().unwrap_or_else(|| Path::new(""));

    if let Some(reference) = document.image_reference() {
        let relative = json_dir.join(reference);
        if relative.exists() {
            return load_image(relative, ImageSource::RelativeReference);
        }
        let as_given = PathBuf::from(reference);
        if as_given.exists() {
            return load_image(as_given, ImageSource::AbsoluteReference);
        }
    }

    let stem = json_path.file_stem()?.to_string_lossy().into_owned();
    for ext in SAME_BASENAME_EXTENSIONS {
        let candidate = json_dir.join(format!("{}.{}", stem, ext));
        if candidate.exists() {
            return load_image(candidate, ImageSource::SameBasename);
        }
    }

    let data = document.embedded_image()?;
    let target = json_dir.join(format!("{}{}", stem, EMBEDDED_IMAGE_SUFFIX));
    match materialize_embedded_image(data, &target) {
        Ok((width, height)) => Some(ResolvedImage {
            path: target,
            width,
            height,
            source: ImageSource::Embedded,
        }),
        Err(e) => {
            warn!(
                "Failed to decode imageData in {}: {}",
                json_path.display(),
                e
            );
            None
        }
    }
}

fn load_image(path: PathBuf, source: ImageSource) -> Option<ResolvedImage> {
    match image::image_dimensions(&path) {
        Ok((width, height)) => {
            debug!("Resolved image {} via {:?}", path.display(), source);
            Some(ResolvedImage {
                path,
                width,
                height,
                source,
            })
        }
        Err(e) => {
            warn!("Failed to read image {}: {}", path.display(), e);
            None
        }
    }
}

/// Decode a base64 image payload and write it to `target` as JPEG.
/// Returns the decoded image's dimensions.
fn materialize_embedded_image(
    data: &str,
    target: &Path,
) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let compact: String = data.split_ascii_whitespace().collect();
    let image_bytes = base64::decode(compact)?;
    let decoded = image::load_from_memory(&image_bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    DynamicImage::ImageRgb8(decoded.to_rgb8()).save_with_format(target, ImageFormat::Jpeg)?;
    Ok((width, height))
}
