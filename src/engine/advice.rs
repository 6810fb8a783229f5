use crate::domain::{RiskLevel, ScanMode};

/// Appended to every link-scan result, whatever the gateway said.
pub const LINK_SPELLING_TIP: &str =
    "Check the address character by character for misspellings or swapped letters.";

/// Fixed recommendations per scan mode and verdict. The gateway reply
/// carries no advice field; all guidance is authored here.
#[must_use]
pub fn advice_for(mode: ScanMode, level: RiskLevel) -> Vec<String> {
    let lines: &[&str] = match (mode, level) {
        (ScanMode::Text, RiskLevel::High) => &[
            "Do not reply, click links, or call numbers from this message.",
            "Report and block the sender through your carrier or platform.",
        ],
        (ScanMode::Text, RiskLevel::Medium) => &[
            "Verify the sender through an official channel before acting.",
            "Never share one-time passwords or account credentials.",
        ],
        (ScanMode::Text, RiskLevel::Low) => {
            &["Stay cautious with unsolicited messages even when they look routine."]
        }
        (ScanMode::Link, RiskLevel::High) => &[
            "Do not enter credentials or payment details on this site.",
            "Close the page and reach the service by typing its official address.",
        ],
        (ScanMode::Link, RiskLevel::Medium) => &[
            "Confirm the domain against the company's official website.",
            "Look for HTTPS and a valid certificate before signing in.",
        ],
        (ScanMode::Link, RiskLevel::Low) => {
            &["Bookmark official sites rather than following links from messages."]
        }
        (ScanMode::Forensic, RiskLevel::High) => &[
            "Do not ship goods or release services based on this screenshot.",
            "Confirm the payment inside the official app or your bank statement.",
        ],
        (ScanMode::Forensic, RiskLevel::Medium) => &[
            "Cross-check the transaction ID with your payment provider.",
            "Ask the sender to show the payment from within the app, not a gallery image.",
        ],
        (ScanMode::Forensic, RiskLevel::Low) => {
            &["Confirm the amount and recipient name match your records."]
        }
    };
    lines.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_and_level_has_advice() {
        for mode in [ScanMode::Text, ScanMode::Link, ScanMode::Forensic] {
            for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
                assert!(!advice_for(mode, level).is_empty(), "{mode:?}/{level:?}");
            }
        }
    }

    #[test]
    fn test_high_risk_forensic_warns_against_shipping() {
        let advice = advice_for(ScanMode::Forensic, RiskLevel::High);
        assert!(advice[0].contains("Do not ship"));
    }
}
