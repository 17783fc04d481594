//! Resume matcher: ATS-style resume and job description matching

use clap::Parser;
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::error::{Result, ResumeMatcherError};
use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_matcher::processing::MatchEngine;
use resume_matcher::server;
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf", "docx"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let engine = MatchEngine::from_config(&config)?;
            info!("Starting resume-matcher v{}", env!("CARGO_PKG_VERSION"));
            server::serve(config, engine).await?;
        }

        Commands::Match {
            resume,
            job,
            output,
            structured,
            save,
            detailed,
        } => {
            run_match(&config, &resume, &job, output.as_deref(), structured, save.as_deref(), detailed).await?;
        }

        Commands::Skills { filter } => {
            let engine = MatchEngine::from_config(&config)?;
            let needle = filter.map(|f| f.to_lowercase());

            let skills: Vec<&String> = engine
                .vocabulary()
                .terms()
                .iter()
                .filter(|term| needle.as_deref().map_or(true, |n| term.contains(n)))
                .collect();

            for skill in &skills {
                println!("{}", skill);
            }
            println!("\n{} of {} skills", skills.len(), engine.vocabulary().len());
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

async fn run_match(
    config: &Config,
    resume: &Path,
    job: &Path,
    output: Option<&str>,
    structured: bool,
    save: Option<&Path>,
    detailed: bool,
) -> Result<()> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(job, JOB_EXTENSIONS)
        .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;

    let format = match output {
        Some(value) => cli::parse_output_format(value).map_err(ResumeMatcherError::InvalidInput)?,
        None => config.output.format,
    };

    info!("Matching {} against {}", resume.display(), job.display());

    let input = InputManager::from_config(&config.server);
    let resume_text = input.extract_text(resume).await?;
    let job_text = input.extract_text(job).await?;

    info!(
        "Extracted {} resume characters and {} job description characters",
        resume_text.chars().count(),
        job_text.chars().count()
    );

    let engine = MatchEngine::from_config(config)?;
    let generator = ReportGenerator::with_options(
        config.output.color_output && save.is_none(),
        detailed || config.output.detailed,
    );

    let resume_source = resume.display().to_string();
    let job_source = job.display().to_string();

    let rendered = if structured {
        let mut report = engine.structured_resume(&resume_text, &job_text);
        report.analysis = report.analysis.with_sources(resume_source, job_source);
        generator.generate_structured(&report, format)?
    } else {
        let report = engine.analyze(&resume_text, &job_text).with_sources(resume_source, job_source);
        generator.generate_report(&report, format)?
    };

    match save {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(suggest_filename(format, &resume.to_string_lossy(), true))
            } else {
                path.to_path_buf()
            };
            save_report_to_file(&rendered, &target)?;
            println!("✅ Report saved to {}", target.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
