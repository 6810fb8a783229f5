use std::fmt::Write;

use crate::domain::{ImageMetadata, ImageSize};
use crate::engine::templates::find_template;

/// Prompt for the text-message analysis path. Asks the model for the exact
/// JSON shape the reply normalizer consumes.
#[must_use]
pub fn text_prompt(message: &str, jurisdiction: &str) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a fraud analyst. Assess whether the following message is a scam, \
         phishing attempt, or other fraud, considering scam patterns common in {jurisdiction}."
    );
    let _ = writeln!(prompt, "\nMessage:\n\"\"\"\n{message}\n\"\"\"");
    prompt.push_str(REPLY_SHAPE_TEXT);
    prompt
}

/// Prompt for the link analysis path.
#[must_use]
pub fn link_prompt(url: &str, jurisdiction: &str) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a fraud analyst. Assess whether the following URL is a phishing, \
         typosquatting, or scam destination, considering patterns common in {jurisdiction}. \
         Consider the domain, subdomains, path, and any lookalike tricks."
    );
    let _ = writeln!(prompt, "\nURL: {url}");
    prompt.push_str(REPLY_SHAPE_TEXT);
    prompt
}

/// Prompt for the deep visual audit of a payment screenshot. Embeds the
/// claimed platform's visual baseline when the registry knows it.
#[must_use]
pub fn vision_prompt(
    platform: &str,
    jurisdiction: &str,
    metadata: Option<&ImageMetadata>,
    size: ImageSize,
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a payment-screenshot forensics expert. Audit the attached image \
         ({}x{} px) for signs of forgery or manipulation, considering payment fraud \
         patterns common in {jurisdiction}. The sender claims it shows a {platform} transaction.",
        size.width, size.height
    );

    if let Some(template) = find_template(platform) {
        let _ = writeln!(
            prompt,
            "\nGenuine {platform} screens look like this:\n\
             - Primary colour: {}\n\
             - Typography: {}\n\
             - Branding: {}\n\
             - Layout: {}\n\
             Flag every deviation from this baseline.",
            template.primary_color, template.font_family, template.branding, template.structure
        );
    }

    if let Some(meta) = metadata {
        if let Some(software) = meta.software.as_deref() {
            let _ = writeln!(
                prompt,
                "\nFile metadata names the producing software as \"{software}\"."
            );
        }
        if meta.is_altered_timestamp {
            prompt.push_str("File timestamps are already known to be inconsistent.\n");
        }
    }

    prompt.push_str(REPLY_SHAPE_VISION);
    prompt
}

const REPLY_SHAPE_TEXT: &str = "\nReply with raw JSON only, no prose, in this exact shape:\n\
{\"score\": <integer 0-100>, \"reasons\": [<short finding strings>], \
\"explanation\": <one-paragraph summary>}\n";

const REPLY_SHAPE_VISION: &str = "\nReply with raw JSON only, no prose, in this exact shape:\n\
{\"score\": <integer 0-100>, \"reasons\": [<short finding strings>], \
\"explanation\": <one-paragraph summary>, \
\"layoutStatus\": <\"Passed\"|\"Failed\"|\"Suspicious\">, \
\"anomalies\": [{\"x\": <number>, \"y\": <number>, \"width\": <number>, \"height\": <number>, \
\"label\": <string>, \"severity\": <\"High\"|\"Medium\">}]}\n";
