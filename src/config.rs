use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for converting LabelMe JSON to bounding-box label files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the LabelMe JSON files and their images
    #[arg(short = 'i', long = "input-dir")]
    pub input_dir: PathBuf,

    /// Output directory (images/ and labels/ are created inside it)
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: PathBuf,

    /// Ordered class list; the position of a name defines its class id
    #[arg(short = 'c', long = "classes", num_args = 1.., default_value = "plate")]
    pub classes: Vec<String>,

    /// Write the class name instead of the numeric id as the first field
    #[arg(long = "use-names")]
    pub use_names: bool,

    /// Write center and size in integer pixels instead of normalized values
    #[arg(long = "pixels")]
    pub pixels: bool,

    /// Do not copy images into the output images directory
    #[arg(long = "no-copy-images")]
    pub no_copy_images: bool,

    /// Log one line per converted file
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Human-readable layout of the label lines produced with these settings
    pub fn label_format_description(&self) -> &'static str {
        match (self.use_names, self.pixels) {
            (true, true) => "<class_name> <x_center_px> <y_center_px> <w_px> <h_px>",
            (true, false) => "<class_name> <x_center> <y_center> <w> <h>",
            (false, true) => "<class_id> <x_center_px> <y_center_px> <w_px> <h_px>",
            (false, false) => "<class_id> <x_center> <y_center> <w> <h> (normalized)",
        }
    }
}
