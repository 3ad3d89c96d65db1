use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use content_forge::{
    generate, normalize, parse_brief_file, templates::skeleton, write_response_json,
    ContentReport,
};

#[derive(Parser)]
#[command(name = "content-forge")]
#[command(author, version, about = "Marketing content package synthesis from a creative brief", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full content package from a brief
    Generate {
        /// Input brief file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the package (JSON); printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for a human-readable report (Markdown)
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a brief and show how it will be interpreted
    Check {
        /// Input brief file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            markdown,
            verbose,
        } => {
            setup_logging(verbose);
            generate_package(input, output, markdown)
        }
        Commands::Check { input, verbose } => {
            setup_logging(verbose);
            check_brief(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn generate_package(
    input: PathBuf,
    output: Option<PathBuf>,
    markdown: Option<PathBuf>,
) -> Result<()> {
    info!("Loading brief from {:?}", input);
    let request = parse_brief_file(&input).context("Failed to load brief")?;

    let response = generate(&request)?;

    match output {
        Some(path) => {
            write_response_json(&response, &path)?;
            info!("Package written to {:?}", path);
        }
        None => {
            let json =
                serde_json::to_string_pretty(&response).context("Failed to serialize package")?;
            println!("{}", json);
        }
    }

    if let Some(path) = markdown {
        ContentReport::new(&response).write_file(&path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

fn check_brief(input: PathBuf) -> Result<()> {
    info!("Checking brief from {:?}", input);
    let request = parse_brief_file(&input).context("Failed to load brief")?;
    let brief = normalize(&request)?;

    println!("Brief");
    println!("=====");
    println!("Brand: {}", brief.brand);
    println!("Audience: {}", brief.audience);
    println!("Objective: {}", brief.objective);
    println!("Format: {}", brief.format);
    println!("Tone: {}", brief.tone);
    println!("Length: {}", brief.length);
    println!("Call to action: {}", brief.call_to_action);
    println!();

    println!("Keywords ({})", brief.keywords.len());
    println!("--------");
    for keyword in &brief.keywords {
        println!("- {}", keyword);
    }
    println!();

    println!("Channels ({})", brief.channels.len());
    println!("--------");
    for (i, channel) in brief.channels.iter().enumerate() {
        println!("{}. {}", i + 1, channel);
    }
    println!();

    println!("Outline");
    println!("-------");
    for (i, title) in skeleton(brief.format, brief.length).iter().enumerate() {
        println!("{}. {}", i + 1, title);
    }

    Ok(())
}
