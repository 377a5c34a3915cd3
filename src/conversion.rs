use log::{debug, info};
use std::fs::{self, copy, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Args;
use crate::error::{ConvertError, Result};
use crate::io::resolve_image;
use crate::types::{
    AnnotationDocument, BoundingBox, ClassTable, ConversionOutcome, OutputDirs, ResolvedImage,
};
use crate::utils::{output_file_name, output_file_stem, read_and_parse_json};

/// Convert one LabelMe JSON file: resolve its image, copy it unless disabled,
/// and write the label file. Nothing is written when the image can't be found.
pub fn process_annotation(
    json_path: &Path,
    output_dirs: &OutputDirs,
    class_table: &ClassTable,
    args: &Args,
) -> Result<ConversionOutcome> {
    let document = read_and_parse_json(json_path)?;
    let image = resolve_image(json_path, &document)
        .ok_or_else(|| ConvertError::ImageNotFound(json_path.to_path_buf()))?;

    let (image_name, image_stem) =
        match (output_file_name(&image.path), output_file_stem(&image.path)) {
            (Some(name), Some(stem)) => (name, stem),
            _ => return Err(ConvertError::ImageNotFound(image.path)),
        };
    let image_output_path = output_dirs.images_dir.join(image_name);
    let mut label_name = image_stem;
    label_name.push(".txt");
    let label_output_path = output_dirs.labels_dir.join(label_name);

    if !args.no_copy_images {
        if is_same_file(&image.path, &image_output_path) {
            return Err(ConvertError::SameFile(image.path));
        }
        copy(&image.path, &image_output_path)?;
    }

    let records = convert_to_label_records(&document, &image, class_table, args);
    let mut writer = BufWriter::new(File::create(&label_output_path)?);
    writer.write_all(records.join("\n").as_bytes())?;
    writer.flush()?;

    let outcome = ConversionOutcome {
        image_path: image_output_path,
        label_path: label_output_path,
        boxes: records.len(),
    };
    let message = format!(
        "[OK] {} -> {}, {} boxes -> {}",
        display_name(json_path),
        display_name(&outcome.image_path),
        outcome.boxes,
        display_name(&outcome.label_path)
    );
    if args.verbose {
        info!("{}", message);
    } else {
        debug!("{}", message);
    }
    Ok(outcome)
}

/// Label lines for every shape that has points and a known class
pub fn convert_to_label_records(
    document: &AnnotationDocument,
    image: &ResolvedImage,
    class_table: &ClassTable,
    args: &Args,
) -> Vec<String> {
    let mut records = Vec::with_capacity(document.shapes.len());
    for shape in &document.shapes {
        let bbox = match BoundingBox::from_points(&shape.points) {
            Some(bbox) => bbox,
            None => continue,
        };
        let label = shape.class_label();
        let class_id = match class_table.id(label) {
            Some(class_id) => class_id,
            None => continue,
        };
        records.push(format_label_record(
            label,
            class_id,
            &bbox,
            (image.width, image.height),
            args,
        ));
    }
    records
}

/// Format one box as `<class> <x_center> <y_center> <width> <height>`.
///
/// Pixel mode truncates toward zero. Normalized mode divides by the image size
/// and prints six decimals; values are not clamped.
pub fn format_label_record(
    label: &str,
    class_id: usize,
    bbox: &BoundingBox,
    (image_width, image_height): (u32, u32),
    args: &Args,
) -> String {
    let class_token = if args.use_names {
        label.to_string()
    } else {
        class_id.to_string()
    };
    let (x_center, y_center) = bbox.center();
    let (width, height) = (bbox.width(), bbox.height());

    if args.pixels {
        format!(
            "{} {} {} {} {}",
            class_token,
            x_center.trunc() as i64,
            y_center.trunc() as i64,
            width.trunc() as i64,
            height.trunc() as i64
        )
    } else {
        let image_width = f64::from(image_width);
        let image_height = f64::from(image_height);
        format!(
            "{} {:.6} {:.6} {:.6} {:.6}",
            class_token,
            x_center / image_width,
            y_center / image_height,
            width / image_width,
            height / image_height
        )
    }
}

// Copying a file onto itself truncates it
fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
