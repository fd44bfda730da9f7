// Fri Oct 16 2026 - Alex

use anyhow::Context;
use chart_validator::{
    config::Config,
    output::{ReportEntry, ReportFormat, ReportGenerator, ValidationReport},
    pipeline::ChartPipeline,
    pixels::{data_uri::mime_type_for_path, DataUri},
    signal::{MockAnalysisService, MockServiceConfig},
    ui::{self, Banner, ResultRenderer},
    utils::{format_duration, logging, pluralize},
    validation::ChartValidator,
};
use clap::{ArgAction, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version)]
#[command(about = "Checks that screenshots look like trading charts", long_about = None)]
struct Args {
    /// Image files, or text files holding a data URI
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// JSON file overriding thresholds and weights
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the JSON report here
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    text_output: Option<PathBuf>,

    #[arg(long)]
    markdown_output: Option<PathBuf>,

    /// Send accepted charts to the mock analysis service
    #[arg(long)]
    analyze: bool,

    #[arg(long, requires = "analyze")]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0)]
    latency_ms: u64,

    /// Images validated concurrently (defaults to the CPU count)
    #[arg(short, long)]
    jobs: Option<usize>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_banner: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::print_error(&format!("{:#}", e));
            std::process::exit(2);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<i32> {
    let use_color = !args.no_color && atty::is(atty::Stream::Stdout);
    if !use_color {
        colored::control::set_override(false);
    }
    logging::init_logger(args.verbose, use_color);

    if !args.no_banner {
        Banner::print_default(use_color);
    }

    let start_time = Instant::now();

    let config = match &args.config {
        Some(path) => {
            ui::print_info(&format!("Loading config: {}", path.display()));
            Config::from_file(path).with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => Config::default(),
    };
    let validator = Arc::new(ChartValidator::new(config).context("invalid configuration")?);
    let max_score = validator.max_score();

    let pipeline = if args.analyze {
        let mut service_config = MockServiceConfig::default().with_latency_ms(args.latency_ms);
        if let Some(seed) = args.seed {
            service_config = service_config.with_seed(seed);
        }
        let service = Arc::new(MockAnalysisService::new(service_config));
        Some(Arc::new(ChartPipeline::new(validator.clone(), service)))
    } else {
        None
    };

    let mut inputs = Vec::with_capacity(args.images.len());
    for path in &args.images {
        let encoded = load_data_uri(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push((path.display().to_string(), encoded));
    }

    let jobs = args.jobs.unwrap_or_else(num_cpus::get).max(1);
    ui::print_info(&format!(
        "Validating {} with {} worker(s)",
        pluralize(inputs.len(), "image", "images"),
        jobs
    ));

    let progress = if !args.no_progress {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut handles = Vec::with_capacity(inputs.len());

    for (source, encoded) in inputs {
        let semaphore = semaphore.clone();
        let validator = validator.clone();
        let pipeline = pipeline.clone();
        let progress = progress.clone();

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            let started = Instant::now();

            let entry = match &pipeline {
                Some(pipeline) => {
                    let outcome = pipeline.submit(&encoded).await;
                    ReportEntry::from_outcome(&source, outcome, started.elapsed().as_millis() as u64)
                }
                None => {
                    let result = validator.validate(&encoded).await;
                    ReportEntry::new(&source, result, started.elapsed().as_millis() as u64)
                }
            };

            if let Some(pb) = &progress {
                pb.set_message(source);
                pb.inc(1);
            }
            anyhow::Ok(entry)
        }));
    }

    let mut report = ValidationReport::new(validator.config().pass_threshold, max_score);
    for handle in handles {
        report.add_entry(handle.await??);
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("done");
    }

    println!();
    let renderer = ResultRenderer::new()
        .with_color(use_color)
        .with_checks(args.verbose > 0 || report.entries.len() == 1);
    for entry in &report.entries {
        println!("{}", renderer.render_result(&entry.source, &entry.result, max_score));
        if let Some(signal) = &entry.signal {
            println!("{}", renderer.render_signal(signal));
        }
        if let Some(error) = &entry.analysis_error {
            ui::print_warning(error);
        }
    }

    write_reports(&args, &report)?;

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!("{}", renderer.render_summary(&report.summary));
    ui::print_success(&format!("Finished in {}", format_duration(start_time.elapsed())));

    Ok(if report.all_valid() { 0 } else { 1 })
}

/// Raw images are wrapped in a data URI by extension; text files that
/// already hold a data URI are passed through.
async fn load_data_uri(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path).await?;

    if bytes.starts_with(b"data:") {
        return Ok(String::from_utf8(bytes)?.trim().to_string());
    }

    let mime = mime_type_for_path(path).unwrap_or("application/octet-stream");
    Ok(DataUri::encode(mime, &bytes))
}

fn write_reports(args: &Args, report: &ValidationReport) -> anyhow::Result<()> {
    let targets = [
        (&args.output, ReportFormat::Json, "JSON"),
        (&args.text_output, ReportFormat::Text, "Text"),
        (&args.markdown_output, ReportFormat::Markdown, "Markdown"),
    ];

    for (path, format, label) in targets {
        if let Some(path) = path {
            ReportGenerator::new(format)
                .generate_to_file(report, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            ui::print_success(&format!("{} report saved to: {}", label, path.display()));
        }
    }

    Ok(())
}
