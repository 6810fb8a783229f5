mod scan;

pub use scan::{run_image, run_link, run_templates, run_text, ImageScanArgs};
