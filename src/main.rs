mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use augur::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "augur",
    about = "The Scam Omen Reader - AI-assisted fraud risk analyzer",
    version
)]
enum Cli {
    /// Analyze a message for scam or phishing patterns
    Text(TextArgs),
    /// Analyze a URL for phishing or typosquatting
    Link(LinkArgs),
    /// Audit a payment screenshot with local forensics and, when an image
    /// is supplied, a deep visual audit
    Image(ImageArgs),
    /// List the known payment-platform templates
    Templates,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
struct TextArgs {
    #[arg(help = "Message text to analyze")]
    message: String,

    #[arg(long, short, help = "Jurisdiction context, e.g. a country name")]
    jurisdiction: Option<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json, markdown"
    )]
    format: OutputFormat,
}

#[derive(Parser)]
struct LinkArgs {
    #[arg(help = "URL to analyze")]
    url: String,

    #[arg(long, short, help = "Jurisdiction context, e.g. a country name")]
    jurisdiction: Option<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json, markdown"
    )]
    format: OutputFormat,
}

#[derive(Parser)]
struct ImageArgs {
    #[arg(
        long,
        help = "Path to the screenshot; omit to run metadata-only forensics"
    )]
    image: Option<PathBuf>,

    #[arg(long, help = "Image width in pixels")]
    width: u32,

    #[arg(long, help = "Image height in pixels")]
    height: u32,

    #[arg(long, help = "Claimed payment platform, e.g. \"Google Pay\"")]
    platform: Option<String>,

    #[arg(long, help = "Path to a JSON file with extracted image metadata")]
    metadata: Option<PathBuf>,

    #[arg(long, short, help = "Jurisdiction context, e.g. a country name")]
    jurisdiction: Option<String>,

    #[arg(
        long,
        short,
        default_value = "terminal",
        help = "Output format: terminal, json, markdown"
    )]
    format: OutputFormat,
}

#[derive(Parser)]
struct CompletionsArgs {
    #[arg(help = "Shell to generate completions for")]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let exit_code = match Cli::parse() {
        Cli::Text(args) => {
            cli::run_text(&args.message, args.jurisdiction.as_deref(), args.format).await?
        }
        Cli::Link(args) => {
            cli::run_link(&args.url, args.jurisdiction.as_deref(), args.format).await?
        }
        Cli::Image(args) => {
            cli::run_image(cli::ImageScanArgs {
                image: args.image.as_deref(),
                width: args.width,
                height: args.height,
                platform: args.platform.as_deref(),
                metadata: args.metadata.as_deref(),
                jurisdiction: args.jurisdiction.as_deref(),
                format: args.format,
            })
            .await?
        }
        Cli::Templates => {
            cli::run_templates()?;
            0
        }
        Cli::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "augur", &mut std::io::stdout());
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
