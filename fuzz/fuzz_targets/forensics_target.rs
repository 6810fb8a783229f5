#![no_main]

use libfuzzer_sys::fuzz_target;

use augur::engine::assess_image;
use augur::{ImageMetadata, ImageSize};

fuzz_target!(|data: &[u8]| {
    // Metadata arrives from untrusted files; scoring must never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(metadata) = serde_json::from_str::<ImageMetadata>(text) {
            let size = ImageSize {
                width: u32::from(data.first().copied().unwrap_or(0)),
                height: u32::from(data.last().copied().unwrap_or(0)),
            };
            let _ = assess_image(Some(&metadata), size, text);
        }
    }
});
