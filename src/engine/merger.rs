use crate::domain::{LayoutCheck, RiskLevel, ScanResult};
use crate::engine::heuristics::HeuristicReport;
use crate::gateway::GatewayReply;

pub const MAX_SCORE: u32 = 100;

// Layout fallback boundaries for the heuristic-only forensic path.
const LAYOUT_FAILED_ABOVE: u32 = 60;
const LAYOUT_SUSPICIOUS_ABOVE: u32 = 25;

#[derive(Debug, Clone, Copy)]
struct RiskThresholds {
    high: u32,
    medium: u32,
}

// Text, link, and AI-assisted forensic scans share one table; the
// heuristic-only fallback runs a stricter one. The asymmetry is deliberate.
const REMOTE_THRESHOLDS: RiskThresholds = RiskThresholds {
    high: 70,
    medium: 35,
};
const FALLBACK_THRESHOLDS: RiskThresholds = RiskThresholds {
    high: 65,
    medium: 30,
};

fn classify(score: u32, thresholds: RiskThresholds) -> RiskLevel {
    if score > thresholds.high {
        RiskLevel::High
    } else if score > thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Clamp a gateway-supplied score into the contract range.
#[must_use]
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_SCORE)) as u32
}

/// Remove exact duplicates, keeping the first occurrence of each string.
#[must_use]
pub fn dedup_reasons(reasons: Vec<String>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::with_capacity(reasons.len());
    for reason in reasons {
        if !distinct.contains(&reason) {
            distinct.push(reason);
        }
    }
    distinct
}

fn layout_from_score(score: u32) -> LayoutCheck {
    if score > LAYOUT_FAILED_ABOVE {
        LayoutCheck::Failed
    } else if score > LAYOUT_SUSPICIOUS_ABOVE {
        LayoutCheck::Suspicious
    } else {
        LayoutCheck::Passed
    }
}

/// Normalize a gateway reply from the text/link paths into a `ScanResult`.
/// Advice is filled in by the caller; it depends on the scan mode.
#[must_use]
pub fn normalize_remote(reply: GatewayReply) -> ScanResult {
    let score = clamp_score(reply.score);
    ScanResult {
        risk_level: classify(score, REMOTE_THRESHOLDS),
        score,
        explanation: reply.explanation,
        reasons: dedup_reasons(reply.reasons),
        advice: Vec::new(),
        layout_check: None,
        anomalies: None,
    }
}

/// Combine the local forensic pass with an optional deep-vision reply.
///
/// The two scores are independent estimators of the same risk: the stronger
/// claim wins (`max`), they are never summed. Without a deep-vision reply
/// the layout verdict falls back to score thresholds and no anomalies are
/// reported.
#[must_use]
pub fn merge_forensic(heuristic: HeuristicReport, vision: Option<GatewayReply>) -> ScanResult {
    match vision {
        Some(reply) => {
            let score = clamp_score(i64::from(heuristic.score).max(reply.score));
            let mut reasons = heuristic.reasons;
            reasons.extend(reply.reasons);
            let layout = reply
                .layout_status
                .as_deref()
                .and_then(LayoutCheck::from_status)
                .unwrap_or(LayoutCheck::Suspicious);
            let explanation = if reply.explanation.trim().is_empty() {
                "Deep visual audit complete.".to_string()
            } else {
                reply.explanation
            };
            ScanResult {
                risk_level: classify(score, REMOTE_THRESHOLDS),
                score,
                explanation,
                reasons: dedup_reasons(reasons),
                advice: Vec::new(),
                layout_check: Some(layout),
                anomalies: Some(reply.anomalies),
            }
        }
        None => {
            let score = heuristic.score.min(MAX_SCORE);
            ScanResult {
                risk_level: classify(score, FALLBACK_THRESHOLDS),
                score,
                explanation: "Forensic heuristics applied; deep visual audit unavailable."
                    .to_string(),
                reasons: dedup_reasons(heuristic.reasons),
                advice: Vec::new(),
                layout_check: Some(layout_from_score(score)),
                anomalies: None,
            }
        }
    }
}
