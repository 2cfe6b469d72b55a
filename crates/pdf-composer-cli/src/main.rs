//! PDF Composer CLI - Merge PDF files with an optional AI-generated cover page.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_composer_core::{
    AppConfig, CoverPageData, MergeRequest, PdfComposer, SourceFile, normalize_output_name,
};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pdfcompose")]
#[command(author, version, about = "Merge PDF documents into one file", long_about = None)]
struct Args {
    /// Input PDF files, in merge order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output base name (".pdf" is appended if missing)
    #[arg(short, long)]
    output: Option<String>,

    /// Ask the AI service to reorder the inputs before merging
    #[arg(long)]
    smart_sort: bool,

    /// Generate cover page content from this description via the AI service
    #[arg(long, conflicts_with_all = ["cover_title", "cover_subtitle", "cover_abstract"])]
    cover_description: Option<String>,

    /// Cover page title (requires --cover-subtitle and --cover-abstract)
    #[arg(long, requires_all = ["cover_subtitle", "cover_abstract"])]
    cover_title: Option<String>,

    /// Cover page subtitle
    #[arg(long)]
    cover_subtitle: Option<String>,

    /// Cover page abstract
    #[arg(long)]
    cover_abstract: Option<String>,

    /// AI service endpoint URL
    #[arg(long, env = "PDF_AI_ENDPOINT")]
    endpoint: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match run(args).await {
        Ok(path) => {
            // CLI output is intentional
            #[allow(clippy::print_stdout)]
            {
                println!("Merged PDF saved to: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            // Core errors collapse to one generic message per category for
            // the user; the detailed cause goes to the log.
            if let Some(core_err) = e.downcast_ref::<pdf_composer_core::Error>() {
                tracing::error!("{}", core_err);
                anyhow::bail!("{}", core_err.user_message());
            }
            Err(e)
        }
    }
}

async fn run(args: Args) -> Result<PathBuf> {
    // Load or create config
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    // Override config with CLI arguments
    if let Some(endpoint) = args.endpoint.clone() {
        config.suggester.endpoint = Some(endpoint);
    }

    // Load input PDFs into memory
    let mut files = load_files(&args.inputs).await?;
    info!("Loaded {} input file(s)", files.len());

    // The suggestion service is only contacted when asked for
    let needs_suggester = args.smart_sort || args.cover_description.is_some();
    let composer = if needs_suggester {
        Some(PdfComposer::new(config.clone())?)
    } else {
        None
    };

    if args.smart_sort {
        // `composer` is always present here
        if let Some(ref composer) = composer {
            info!("Requesting smart sort for {} file(s)", files.len());
            files = composer.smart_sort(files).await?;
            let order: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
            info!("Sorted order: {}", order.join(", "));
        }
    }

    let cover = resolve_cover(&args, composer.as_ref()).await?;

    let output_name = args.output.unwrap_or_else(|| config.output_name.clone());
    let request = MergeRequest {
        ordered_files: files,
        output_name,
        cover,
    };

    let bytes = pdf_composer_core::pdf::merge(&request)?;

    let output_path = PathBuf::from(normalize_output_name(&request.output_name));
    tokio::fs::write(&output_path, bytes)
        .await
        .context(format!("Failed to write output: {}", output_path.display()))?;

    Ok(output_path)
}

/// Read every input file into a `SourceFile` with a fresh id.
async fn load_files(inputs: &[PathBuf]) -> Result<Vec<SourceFile>> {
    #[allow(clippy::cast_possible_truncation)]
    let pb = ProgressBar::new(inputs.len() as u64);
    // Template is hardcoded and valid, unwrap is safe
    #[allow(clippy::unwrap_used)]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut files = Vec::with_capacity(inputs.len());
    for path in inputs {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        pb.set_message(name.clone());

        let bytes = tokio::fs::read(path)
            .await
            .context(format!("Failed to read input: {}", path.display()))?;

        files.push(SourceFile::new(uuid::Uuid::new_v4().to_string(), name, bytes));
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(files)
}

/// Build cover page data from CLI flags: generated remotely from a
/// description, assembled from the manual fields, or absent.
async fn resolve_cover(
    args: &Args,
    composer: Option<&PdfComposer>,
) -> Result<Option<CoverPageData>> {
    if let Some(ref description) = args.cover_description {
        if let Some(composer) = composer {
            info!("Generating cover page content");
            let cover = composer.generate_cover(description).await?;
            return Ok(Some(cover));
        }
    }

    if let (Some(title), Some(subtitle), Some(abstract_text)) = (
        args.cover_title.clone(),
        args.cover_subtitle.clone(),
        args.cover_abstract.clone(),
    ) {
        return Ok(Some(CoverPageData {
            title,
            subtitle,
            abstract_text,
        }));
    }

    Ok(None)
}
