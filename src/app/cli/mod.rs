//! CLI adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::commands::generate::{GenerateOptions, OutputStyle, execute as run_generate};
use crate::app::commands::platforms::{PlatformsOptions, execute as run_platforms};
use crate::app::commands::wizard;
use crate::domain::{AppError, SynthesisMode};

#[derive(Parser)]
#[command(name = "promptnx")]
#[command(version)]
#[command(
    about = "Deterministic offline prompt synthesis (local fallback tier)",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a new prompt document
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Revise an existing prompt
    #[clap(visible_alias = "e")]
    Enhance {
        #[command(flatten)]
        request: RequestArgs,
        /// The prompt to improve
        #[arg(long, conflicts_with = "existing_prompt_file")]
        existing_prompt: Option<String>,
        /// Read the prompt to improve from a file
        #[arg(long)]
        existing_prompt_file: Option<PathBuf>,
    },
    /// List the supported platform registry
    #[clap(visible_alias = "p")]
    Platforms {
        /// Include per-platform descriptions
        #[arg(long)]
        detail: bool,
        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Build a request interactively
    #[clap(visible_alias = "w")]
    Wizard,
}

#[derive(Args)]
struct RequestArgs {
    /// Load the request from a .json/.yml/.yaml file
    #[arg(short, long)]
    request: Option<PathBuf>,
    /// Free-text objective
    #[arg(short, long, required_unless_present = "request")]
    input: Option<String>,
    /// Prompt type key (e.g. marketing, coding)
    #[arg(short = 't', long = "type", required_unless_present = "request")]
    prompt_type: Option<String>,
    /// Target platform key (e.g. chatgpt, midjourney)
    #[arg(short, long, required_unless_present = "request")]
    platform: Option<String>,
    /// Output format key (e.g. markdown, detailed)
    #[arg(short = 'f', long, required_unless_present = "request")]
    output_format: Option<String>,
    /// Language key (e.g. english)
    #[arg(short, long, required_unless_present = "request")]
    language: Option<String>,
    /// Reference material to weave in
    #[arg(long)]
    reference: Option<String>,
    /// Label for the reference material (e.g. sketch)
    #[arg(long)]
    reference_type: Option<String>,
    /// Why the remote tier was skipped (recorded in metadata)
    #[arg(long)]
    reason: Option<String>,
    /// Scoring constant overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output rendering
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputStyle {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Text => OutputStyle::Text,
            OutputFormatArg::Json => OutputStyle::Json,
        }
    }
}

impl RequestArgs {
    fn into_options(self, mode: SynthesisMode) -> GenerateOptions {
        GenerateOptions {
            request_file: self.request,
            input: self.input,
            prompt_type: self.prompt_type,
            platform: self.platform,
            output_format: self.output_format,
            language: self.language,
            reference: self.reference,
            reference_type: self.reference_type,
            mode,
            existing_prompt: None,
            existing_prompt_file: None,
            reason: self.reason,
            score_config: self.config,
            style: self.format.into(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { request } => {
            print_output(run_generate(request.into_options(SynthesisMode::Generate)))
        }
        Commands::Enhance { request, existing_prompt, existing_prompt_file } => {
            let mut options = request.into_options(SynthesisMode::Enhance);
            options.existing_prompt = existing_prompt;
            options.existing_prompt_file = existing_prompt_file;
            print_output(run_generate(options))
        }
        Commands::Platforms { detail, json } => {
            print_output(run_platforms(PlatformsOptions { detail, json }))
        }
        Commands::Wizard => match wizard::execute() {
            Ok(Some(document)) => {
                println!("{document}");
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => Err(err),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_output(result: Result<String, AppError>) -> Result<(), AppError> {
    let output = result?;
    println!("{output}");
    Ok(())
}
