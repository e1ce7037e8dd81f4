//! Resume analyzer: ATS-style resume and job description match analysis

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter;
use processing::analyzer::AnalysisEngine;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path.clone()),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            keywords,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;
            let keyword_limit = keywords.unwrap_or(config.processing.keyword_limit);

            let mut input_manager =
                InputManager::new().with_max_document_bytes(config.processing.max_document_bytes);

            info!("Extracting resume text from {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            info!("Extracting job description text from {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            let engine = AnalysisEngine::new(&config)?;
            let result = engine.analyze(&resume_text, &job_text, keyword_limit)?;

            let rendered = formatter::format_result(
                &result,
                output_format,
                config.output.color_output,
                config.output.include_suggestions,
            )?;

            match save {
                Some(path) => {
                    formatter::save_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Keyword limit: {}", config.processing.keyword_limit);
                println!(
                    "Max document size: {} bytes",
                    config.processing.max_document_bytes
                );
                match &config.processing.stopword_file {
                    Some(path) => println!("Stopword list: {}", path.display()),
                    None => println!("Stopword list: built-in English"),
                }
                println!("Output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
                println!("Include suggestions: {}", config.output.include_suggestions);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
