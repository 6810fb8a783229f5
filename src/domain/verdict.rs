use serde::{Deserialize, Deserializer, Serialize};

/// Three-tier risk verdict. Derived from the final score, never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Which analysis path a scan went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Text,
    Link,
    Forensic,
}

/// Verdict on whether a screenshot's visual structure matches its claimed
/// platform. Only meaningful for forensic scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCheck {
    Passed,
    Failed,
    Suspicious,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl LayoutCheck {
    /// Parse a gateway-supplied layout status. Anything other than the four
    /// exact verdict strings counts as absent, not as an error.
    #[must_use]
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "Passed" => Some(Self::Passed),
            "Failed" => Some(Self::Failed),
            "Suspicious" => Some(Self::Suspicious),
            "N/A" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

/// Anomaly severity is binary: the deep-vision pass never reports Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalySeverity {
    High,
    Medium,
}

impl<'de> Deserialize<'de> for AnomalySeverity {
    // Remote models drift on enum casing; anything that is not "high"
    // collapses to Medium rather than poisoning the whole reply.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else {
            Ok(Self::Medium)
        }
    }
}

/// A localized visual defect reported by the deep-vision pass.
///
/// Coordinates live in the caller-supplied image space; the core does not
/// validate bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAnomaly {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub severity: AnomalySeverity,
}

/// Caller-supplied pixel dimensions of the image under audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Optional forensic signals extracted from the image file by the caller.
///
/// Every field is optional; an absent field means "signal not applicable",
/// never "signal is negative".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageMetadata {
    pub software: Option<String>,
    pub is_altered_timestamp: bool,
    pub has_exif: bool,
    pub is_screenshot: bool,
    pub make: Option<String>,
    pub model: Option<String>,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
}

/// The universal analysis output. Every scan entry point returns one of
/// these; none of them ever surfaces an error to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub risk_level: RiskLevel,
    /// Always within `0..=100`.
    pub score: u32,
    pub explanation: String,
    /// Distinct finding strings, first-occurrence order.
    pub reasons: Vec<String>,
    /// Mode-specific recommendations. Not deduplicated.
    pub advice: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_check: Option<LayoutCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomalies: Option<Vec<TemplateAnomaly>>,
}

impl ScanResult {
    /// Fixed zero-risk result for empty or whitespace-only text input.
    #[must_use]
    pub fn empty_input() -> Self {
        Self {
            risk_level: RiskLevel::Low,
            score: 0,
            explanation: "Please enter a message.".to_string(),
            reasons: Vec::new(),
            advice: Vec::new(),
            layout_check: None,
            anomalies: None,
        }
    }

    /// Fixed degraded result when the gateway is unreachable or unusable
    /// on the text/link paths.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            risk_level: RiskLevel::Low,
            score: 0,
            explanation: "Analysis failed.".to_string(),
            reasons: Vec::new(),
            advice: Vec::new(),
            layout_check: None,
            anomalies: None,
        }
    }
}
