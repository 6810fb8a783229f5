use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use augur::config::AugurConfig;
use augur::engine::TEMPLATES;
use augur::output::{format_output, OutputFormat};
use augur::{
    scan_image, scan_link, scan_text, AnalysisGateway, AugurResult, ForensicRequest, GatewayReply,
    GatewayRequest, ImageMetadata, ImagePayload, ImageSize, RemoteGateway, RiskLevel, ScanMode,
    ScanResult,
};

/// Gateway as configured for this invocation. When no API key is present
/// the remote client cannot be built; scans still run and degrade
/// gracefully instead of erroring out.
enum CliGateway {
    Remote(RemoteGateway),
    Offline,
}

#[async_trait]
impl AnalysisGateway for CliGateway {
    async fn analyze(&self, request: GatewayRequest<'_>) -> AugurResult<GatewayReply> {
        match self {
            Self::Remote(remote) => remote.analyze(request).await,
            Self::Offline => augur::OfflineGateway.analyze(request).await,
        }
    }
}

fn build_gateway(config: &AugurConfig) -> CliGateway {
    match RemoteGateway::from_config(&config.gateway) {
        Ok(remote) => CliGateway::Remote(remote),
        Err(err) => {
            if std::env::var("AUGUR_DEBUG").is_ok() {
                eprintln!("augur: running without remote model: {err}");
            }
            CliGateway::Offline
        }
    }
}

fn jurisdiction_or_default<'a>(jurisdiction: Option<&'a str>, config: &'a AugurConfig) -> &'a str {
    jurisdiction.unwrap_or(&config.scan.default_jurisdiction)
}

/// Exit code 1 signals a High-risk verdict to scripts.
fn emit(result: &ScanResult, mode: ScanMode, format: OutputFormat) -> i32 {
    println!("{}", format_output(result, mode, format));
    i32::from(result.risk_level == RiskLevel::High)
}

pub async fn run_text(
    message: &str,
    jurisdiction: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let config = AugurConfig::load()?;
    let gateway = build_gateway(&config);
    let result = scan_text(
        &gateway,
        message,
        jurisdiction_or_default(jurisdiction, &config),
    )
    .await;
    Ok(emit(&result, ScanMode::Text, format))
}

pub async fn run_link(url: &str, jurisdiction: Option<&str>, format: OutputFormat) -> Result<i32> {
    let config = AugurConfig::load()?;
    let gateway = build_gateway(&config);
    let result = scan_link(
        &gateway,
        url,
        jurisdiction_or_default(jurisdiction, &config),
    )
    .await;
    Ok(emit(&result, ScanMode::Link, format))
}

pub struct ImageScanArgs<'a> {
    pub image: Option<&'a Path>,
    pub width: u32,
    pub height: u32,
    pub platform: Option<&'a str>,
    pub metadata: Option<&'a Path>,
    pub jurisdiction: Option<&'a str>,
    pub format: OutputFormat,
}

pub async fn run_image(args: ImageScanArgs<'_>) -> Result<i32> {
    let config = AugurConfig::load()?;

    let metadata: Option<ImageMetadata> = match args.metadata {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read metadata file {}", path.display()))?;
            Some(
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid metadata JSON in {}", path.display()))?,
            )
        }
        None => None,
    };

    let payload: Option<ImagePayload> = match args.image {
        Some(path) => {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read image file {}", path.display()))?;
            Some(ImagePayload {
                mime_type: mime_for(path),
                data,
            })
        }
        None => None,
    };

    let gateway = build_gateway(&config);
    let request = ForensicRequest {
        metadata: metadata.as_ref(),
        size: ImageSize {
            width: args.width,
            height: args.height,
        },
        jurisdiction: jurisdiction_or_default(args.jurisdiction, &config),
        platform: args.platform.unwrap_or(&config.scan.default_platform),
        image: payload.as_ref(),
    };
    let result = scan_image(&gateway, &request).await;
    Ok(emit(&result, ScanMode::Forensic, args.format))
}

pub fn run_templates() -> Result<()> {
    println!("Known platform templates ({}):", TEMPLATES.len());
    println!("{:<12} {:<10} {:<28} Accepted ratios", "Platform", "Colour", "Fonts");
    println!("{}", "-".repeat(76));
    for template in TEMPLATES {
        let ratios: Vec<String> = template
            .aspect_ratios
            .iter()
            .map(|r| format!("{r:.2}"))
            .collect();
        println!(
            "{:<12} {:<10} {:<28} {}",
            template.name,
            template.primary_color,
            template.font_family,
            ratios.join(", ")
        );
    }
    Ok(())
}

fn mime_for(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg".to_string(),
        Some("webp") => "image/webp".to_string(),
        _ => "image/png".to_string(),
    }
}
