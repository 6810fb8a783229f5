use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{ImageMetadata, ImageSize};
use crate::engine::templates::{find_template, RATIO_TOLERANCE};

const EDITING_TOOL_POINTS: u32 = 40;
const ALTERED_TIMESTAMP_POINTS: u32 = 30;
const EXIF_CONTRADICTION_POINTS: u32 = 15;
const GEOMETRY_MISMATCH_POINTS: u32 = 20;

static EDITING_TOOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)photoshop|gimp|canva|picsart|snapseed|lightroom|pixlr|editor|paint|express")
        .expect("Invalid regex pattern")
});

/// Accumulated output of the local forensic pass: a raw additive score and
/// the reasons behind it, in rule-evaluation order.
///
/// The raw score is not clamped here; all five rules firing at once exceeds
/// 100 and the merger clamps on construction of the final result.
#[derive(Debug, Clone, Default)]
pub struct HeuristicReport {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Score an image from its metadata and claimed platform. Synchronous,
/// deterministic, no I/O.
///
/// Rule order is part of the user-visible contract: editing tool,
/// timestamp, EXIF contradiction, GPS, geometry.
#[must_use]
pub fn assess_image(
    metadata: Option<&ImageMetadata>,
    size: ImageSize,
    platform: &str,
) -> HeuristicReport {
    let mut score = 0u32;
    let mut reasons = Vec::new();

    if let Some(meta) = metadata {
        if let Some(software) = meta.software.as_deref() {
            if EDITING_TOOL.is_match(software) {
                score += EDITING_TOOL_POINTS;
                reasons.push(format!(
                    "Image was processed with editing software: {software}"
                ));
            }
        }

        if meta.is_altered_timestamp {
            score += ALTERED_TIMESTAMP_POINTS;
            reasons.push(
                "File modification time does not match the capture timestamp (possible tampering)"
                    .to_string(),
            );
        }

        if meta.has_exif && meta.is_screenshot && (meta.make.is_some() || meta.model.is_some()) {
            score += EXIF_CONTRADICTION_POINTS;
            reasons.push(
                "Screenshot carries camera make/model EXIF fields, which screen captures never record"
                    .to_string(),
            );
        }

        // Location presence is informational, not a risk signal.
        if let (Some(lat), Some(lon)) = (meta.gps_latitude, meta.gps_longitude) {
            reasons.push(format!(
                "Capture location embedded in metadata: {lat:.2}, {lon:.2}"
            ));
        }
    }

    if let Some(template) = find_template(platform) {
        // A zero dimension makes the ratio meaningless; skip the check
        // rather than manufacture a mismatch.
        if size.width > 0 && size.height > 0 {
            let ratio = f64::from(size.height) / f64::from(size.width);
            let matches_any = template
                .aspect_ratios
                .iter()
                .any(|&expected| (ratio - expected).abs() <= RATIO_TOLERANCE);
            if !matches_any {
                score += GEOMETRY_MISMATCH_POINTS;
                reasons.push(format!(
                    "Image aspect ratio does not match any known {platform} screen layout"
                ));
            }
        }
    }

    HeuristicReport { score, reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> ImageSize {
        ImageSize { width, height }
    }

    #[test]
    fn test_editing_tool_adds_40_and_names_the_tool() {
        let meta = ImageMetadata {
            software: Some("Adobe Photoshop CC".to_string()),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 40);
        assert_eq!(report.reasons.len(), 1);
        assert!(report.reasons[0].contains("Adobe Photoshop CC"));
    }

    #[test]
    fn test_editing_tool_match_is_case_insensitive() {
        let meta = ImageMetadata {
            software: Some("PICSART 19.0".to_string()),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 40);
    }

    #[test]
    fn test_camera_firmware_software_does_not_fire() {
        let meta = ImageMetadata {
            software: Some("Pixel 8 Pro HDR+".to_string()),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 0);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_altered_timestamp_adds_30() {
        let meta = ImageMetadata {
            is_altered_timestamp: true,
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 30);
        assert!(report.reasons[0].contains("timestamp"));
    }

    #[test]
    fn test_exif_contradiction_requires_all_three_signals() {
        let meta = ImageMetadata {
            has_exif: true,
            is_screenshot: true,
            model: Some("NIKON D850".to_string()),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 15);

        // Screenshot without camera fields is not a contradiction.
        let meta = ImageMetadata {
            has_exif: true,
            is_screenshot: true,
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_gps_is_informational_only_and_rounded() {
        let meta = ImageMetadata {
            gps_latitude: Some(12.971_598),
            gps_longitude: Some(77.594_566),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert_eq!(report.score, 0);
        assert_eq!(report.reasons.len(), 1);
        assert!(report.reasons[0].contains("12.97, 77.59"));
    }

    #[test]
    fn test_lone_gps_coordinate_is_ignored() {
        let meta = ImageMetadata {
            gps_latitude: Some(12.97),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 2340), "General");
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_matching_ratio_does_not_fire_geometry() {
        // 2340/1080 = 2.1667, within tolerance of the Google Pay set.
        let report = assess_image(None, size(1080, 2340), "Google Pay");
        assert_eq!(report.score, 0);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_mismatched_ratio_adds_20() {
        // 1920/1080 = 1.7778, outside every Google Pay ratio by > 0.1.
        let report = assess_image(None, size(1080, 1920), "Google Pay");
        assert_eq!(report.score, 20);
        assert!(report.reasons[0].contains("Google Pay"));
    }

    #[test]
    fn test_unknown_platform_skips_geometry() {
        let report = assess_image(None, size(1080, 1920), "General");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_zero_dimension_skips_geometry() {
        let report = assess_image(None, size(0, 1920), "Google Pay");
        assert_eq!(report.score, 0);
        let report = assess_image(None, size(1080, 0), "Google Pay");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_all_rules_accumulate_past_100_unclamped() {
        let meta = ImageMetadata {
            software: Some("Snapseed".to_string()),
            is_altered_timestamp: true,
            has_exif: true,
            is_screenshot: true,
            make: Some("Canon".to_string()),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 1920), "Google Pay");
        assert_eq!(report.score, 105);
        assert_eq!(report.reasons.len(), 4);
    }

    #[test]
    fn test_reason_order_follows_rule_order() {
        let meta = ImageMetadata {
            software: Some("Canva".to_string()),
            is_altered_timestamp: true,
            gps_latitude: Some(1.0),
            gps_longitude: Some(2.0),
            ..ImageMetadata::default()
        };
        let report = assess_image(Some(&meta), size(1080, 1920), "Google Pay");
        assert!(report.reasons[0].contains("Canva"));
        assert!(report.reasons[1].contains("timestamp"));
        assert!(report.reasons[2].contains("location"));
        assert!(report.reasons[3].contains("aspect ratio"));
    }

    #[test]
    fn test_no_metadata_no_signals() {
        let report = assess_image(None, size(1080, 2340), "General");
        assert_eq!(report.score, 0);
        assert!(report.reasons.is_empty());
    }
}
