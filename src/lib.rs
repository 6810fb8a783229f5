pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod output;

pub use config::AugurConfig;
pub use domain::{
    ImageMetadata, ImageSize, LayoutCheck, RiskLevel, ScanMode, ScanResult, TemplateAnomaly,
};
pub use error::{AugurError, Result as AugurResult};
pub use gateway::{
    AnalysisGateway, GatewayReply, GatewayRequest, ImagePayload, OfflineGateway, RemoteGateway,
};

/// Everything a forensic scan needs besides the gateway.
#[derive(Debug, Clone)]
pub struct ForensicRequest<'a> {
    pub metadata: Option<&'a ImageMetadata>,
    pub size: ImageSize,
    pub jurisdiction: &'a str,
    /// Claimed payment platform; "General" (or any unknown name) skips the
    /// structural check.
    pub platform: &'a str,
    /// Raw image bytes. `None` keeps the scan fully local.
    pub image: Option<&'a ImagePayload>,
}

/// Analyze a text message for scam/phishing likelihood.
///
/// Empty or whitespace-only input short-circuits to a fixed zero-risk
/// result without touching the gateway; a gateway failure degrades to the
/// fixed "Analysis failed." result. Never returns an error.
///
/// # Example
/// ```no_run
/// use augur::{scan_text, OfflineGateway};
/// # #[tokio::main]
/// # async fn main() {
/// let result = scan_text(&OfflineGateway, "You won a prize! Click here.", "India").await;
/// println!("{:?} ({})", result.risk_level, result.score);
/// # }
/// ```
pub async fn scan_text<G: AnalysisGateway>(
    gateway: &G,
    message: &str,
    jurisdiction: &str,
) -> ScanResult {
    if message.trim().is_empty() {
        return ScanResult::empty_input();
    }

    let prompt = engine::text_prompt(message, jurisdiction);
    match gateway
        .analyze(GatewayRequest::text_only(prompt, ScanMode::Text))
        .await
    {
        Ok(reply) => {
            let mut result = engine::normalize_remote(reply);
            result.advice = engine::advice_for(ScanMode::Text, result.risk_level);
            result
        }
        Err(err) => {
            debug_log("text analysis degraded", &err);
            ScanResult::degraded()
        }
    }
}

/// Analyze a URL for phishing likelihood.
///
/// The misspelling tip is appended to the advice unconditionally, on the
/// degraded path included. Never returns an error.
pub async fn scan_link<G: AnalysisGateway>(
    gateway: &G,
    url: &str,
    jurisdiction: &str,
) -> ScanResult {
    let prompt = engine::link_prompt(url, jurisdiction);
    let mut result = match gateway
        .analyze(GatewayRequest::text_only(prompt, ScanMode::Link))
        .await
    {
        Ok(reply) => {
            let mut result = engine::normalize_remote(reply);
            result.advice = engine::advice_for(ScanMode::Link, result.risk_level);
            result
        }
        Err(err) => {
            debug_log("link analysis degraded", &err);
            ScanResult::degraded()
        }
    };
    result.advice.push(engine::LINK_SPELLING_TIP.to_string());
    result
}

/// Run the forensic image path: local heuristics always, deep visual
/// audit only when image bytes are supplied, graceful fallback when the
/// audit fails. `layout_check` is always populated. Never returns an
/// error.
///
/// # Example
/// ```no_run
/// use augur::{scan_image, ForensicRequest, ImageSize, OfflineGateway};
/// # #[tokio::main]
/// # async fn main() {
/// let request = ForensicRequest {
///     metadata: None,
///     size: ImageSize { width: 1080, height: 2340 },
///     jurisdiction: "India",
///     platform: "Google Pay",
///     image: None,
/// };
/// let result = scan_image(&OfflineGateway, &request).await;
/// assert!(result.layout_check.is_some());
/// # }
/// ```
pub async fn scan_image<G: AnalysisGateway>(
    gateway: &G,
    request: &ForensicRequest<'_>,
) -> ScanResult {
    let heuristic = engine::assess_image(request.metadata, request.size, request.platform);

    let vision = match request.image {
        Some(image) => {
            let prompt = engine::vision_prompt(
                request.platform,
                request.jurisdiction,
                request.metadata,
                request.size,
            );
            match gateway
                .analyze(GatewayRequest {
                    prompt,
                    image: Some(image),
                    mode: ScanMode::Forensic,
                })
                .await
            {
                Ok(reply) => Some(reply),
                Err(err) => {
                    debug_log("deep visual audit degraded", &err);
                    None
                }
            }
        }
        None => None,
    };

    let mut result = engine::merge_forensic(heuristic, vision);
    result.advice = engine::advice_for(ScanMode::Forensic, result.risk_level);
    result
}

fn debug_log(context: &str, err: &AugurError) {
    if std::env::var("AUGUR_DEBUG").is_ok() {
        eprintln!("augur: {context}: {err}");
    }
}
