use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{AnomalySeverity, LayoutCheck, RiskLevel, ScanMode, ScanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!(
                "Unknown format: {s}. Valid options: terminal, json, markdown"
            )),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    mode: ScanMode,
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    result: &'a ScanResult,
}

#[must_use]
pub fn format_output(result: &ScanResult, mode: ScanMode, format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal => format_terminal(result, mode),
        OutputFormat::Json => format_json(result, mode),
        OutputFormat::Markdown => format_markdown(result, mode),
    }
}

fn mode_label(mode: ScanMode) -> &'static str {
    match mode {
        ScanMode::Text => "MESSAGE",
        ScanMode::Link => "LINK",
        ScanMode::Forensic => "SCREENSHOT",
    }
}

fn format_terminal(result: &ScanResult, mode: ScanMode) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{}",
        "┌─────────────────────────────────────────────────────────"
            .cyan()
            .bold()
    );
    let _ = writeln!(
        output,
        "{}",
        format!("│ THE OMENS HAVE BEEN READ... [{}]", mode_label(mode))
            .cyan()
            .bold()
    );
    let _ = writeln!(
        output,
        "{}\n",
        "└─────────────────────────────────────────────────────────"
            .cyan()
            .bold()
    );

    let risk_badge = match result.risk_level {
        RiskLevel::High => "HIGH RISK".red().bold(),
        RiskLevel::Medium => "MEDIUM RISK".yellow().bold(),
        RiskLevel::Low => "LOW RISK".green().bold(),
    };
    let _ = writeln!(
        output,
        "  {} — score {}/100",
        risk_badge,
        result.score.to_string().bright_white().bold()
    );

    if let Some(layout) = result.layout_check {
        let layout_label = match layout {
            LayoutCheck::Passed => "Passed".green(),
            LayoutCheck::Failed => "Failed".red(),
            LayoutCheck::Suspicious => "Suspicious".yellow(),
            LayoutCheck::NotApplicable => "N/A".normal(),
        };
        let _ = writeln!(output, "  Layout check: {layout_label}");
    }

    if !result.explanation.is_empty() {
        let _ = writeln!(output, "\n  {}", result.explanation.bright_white());
    }

    if !result.reasons.is_empty() {
        let _ = writeln!(output, "\n{}", "  Findings:".bold());
        for reason in &result.reasons {
            let _ = writeln!(output, "  ▸ {reason}");
        }
    }

    if let Some(anomalies) = result.anomalies.as_deref() {
        if !anomalies.is_empty() {
            let _ = writeln!(output, "\n{}", "  Visual anomalies:".bold());
            for anomaly in anomalies {
                let severity = match anomaly.severity {
                    AnomalySeverity::High => "HIGH".red().bold(),
                    AnomalySeverity::Medium => "MEDIUM".yellow().bold(),
                };
                let _ = writeln!(
                    output,
                    "  [{}] {} at ({:.0},{:.0}) {:.0}x{:.0}",
                    severity, anomaly.label, anomaly.x, anomaly.y, anomaly.width, anomaly.height
                );
            }
        }
    }

    if !result.advice.is_empty() {
        let _ = writeln!(output, "\n{}", "  Advice:".bold());
        for tip in &result.advice {
            let _ = writeln!(output, "  • {tip}");
        }
    }

    let _ = writeln!(
        output,
        "\n{}",
        "═══════════════════════════════════════════════════════════".bright_black()
    );
    let verdict = match result.risk_level {
        RiskLevel::High => "VERDICT: The omens are dire. Treat this as a scam.".red().bold(),
        RiskLevel::Medium => "VERDICT: The omens are clouded. Verify before trusting."
            .yellow()
            .bold(),
        RiskLevel::Low => "VERDICT: The omens are calm.".green().bold(),
    };
    let _ = writeln!(output, "{verdict}");

    output
}

fn format_json(result: &ScanResult, mode: ScanMode) -> String {
    let report = JsonReport {
        mode,
        generated_at: Utc::now(),
        result,
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

fn format_markdown(result: &ScanResult, mode: ScanMode) -> String {
    let mut md = String::from("# Augur Risk Report\n\n");
    let _ = writeln!(
        md,
        "**Mode:** {} | **Risk:** {:?} | **Score:** {}/100\n",
        mode_label(mode),
        result.risk_level,
        result.score
    );

    if let Some(layout) = result.layout_check {
        let _ = writeln!(md, "**Layout check:** {layout:?}\n");
    }

    if !result.explanation.is_empty() {
        let _ = writeln!(md, "{}\n", result.explanation);
    }

    if !result.reasons.is_empty() {
        md.push_str("## Findings\n\n");
        for reason in &result.reasons {
            let _ = writeln!(md, "- {reason}");
        }
        md.push('\n');
    }

    if let Some(anomalies) = result.anomalies.as_deref() {
        if !anomalies.is_empty() {
            md.push_str("## Visual anomalies\n\n");
            md.push_str("| Severity | Label | X | Y | W | H |\n");
            md.push_str("|----------|-------|---|---|---|---|\n");
            for anomaly in anomalies {
                let _ = writeln!(
                    md,
                    "| {:?} | {} | {:.0} | {:.0} | {:.0} | {:.0} |",
                    anomaly.severity, anomaly.label, anomaly.x, anomaly.y, anomaly.width,
                    anomaly.height
                );
            }
            md.push('\n');
        }
    }

    if !result.advice.is_empty() {
        md.push_str("## Advice\n\n");
        for tip in &result.advice {
            let _ = writeln!(md, "- {tip}");
        }
    }

    md
}
