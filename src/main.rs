//! cv-rater: terminal client for ATS compatibility scoring of CVs

use clap::Parser;
use colored::Colorize;
use cv_rater::api::ApiClient;
use cv_rater::capture::UploadCapture;
use cv_rater::cli::{self, Cli, Commands, ConfigAction, OutputFormat};
use cv_rater::config::Config;
use cv_rater::controller::Controller;
use cv_rater::error::{CvRaterError, Result};
use cv_rater::model::AnalysisResult;
use cv_rater::render::{BreakdownView, ScoreView};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    let client = ApiClient::new(config.api_base_url());

    match command {
        Commands::Analyze {
            file,
            file_name,
            output,
            save,
            no_animation,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(CvRaterError::InvalidInput)?;

            info!("Starting CV analysis");
            let mut capture = UploadCapture::new();
            let accepted = if file == Path::new("-") {
                let name = file_name.unwrap_or_else(|| "cv.pdf".to_string());
                capture.offer_reader(&name, std::io::stdin().lock())
            } else {
                capture.offer_path(&file)
            };

            if !accepted {
                println!("⚠️  No valid CV selected. Supported types: PDF, DOC, DOCX up to 5 MB.");
                return Ok(());
            }

            let Some(selected) = capture.confirm(|selection| selection.clone()) else {
                return Ok(());
            };
            println!(
                "📄 CV: {} ({} bytes)",
                selected.file_name,
                selected.bytes.len()
            );

            let mut controller = Controller::new();
            controller.submit();
            capture.set_disabled(true);

            let spinner = make_spinner("Analyzing CV...");
            let outcome = client.upload_cv(&selected).await;
            spinner.finish_and_clear();
            capture.set_disabled(false);

            match outcome {
                Ok(result) => {
                    controller.resolve(result);
                    if let Some(result) = controller.result() {
                        present_analysis(result, &config, output_format, no_animation)?;
                        if let Some(path) = save {
                            save_analysis(result, &path, output_format)?;
                        }
                    }
                }
                Err(e) => {
                    controller.reject(&e);
                    if let Some(banner) = controller.error_banner() {
                        print_error_banner(banner, &config);
                    }
                    return Err(e);
                }
            }
        }

        Commands::Fetch {
            id,
            output,
            save,
            no_animation,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(CvRaterError::InvalidInput)?;

            info!("Fetching analysis {}", id);
            let spinner = make_spinner("Fetching analysis...");
            let outcome = client.get_analysis(&id).await;
            spinner.finish_and_clear();

            match outcome {
                Ok(result) => {
                    present_analysis(&result, &config, output_format, no_animation)?;
                    if let Some(path) = save {
                        save_analysis(&result, &path, output_format)?;
                    }
                }
                Err(e) => {
                    print_error_banner(&e.user_message(), &config);
                    return Err(e);
                }
            }
        }

        Commands::Health => {
            println!("🏥 Checking service at {}", client.base_url());
            match client.health().await {
                Ok(()) => println!("✅ Service is healthy"),
                Err(e) => {
                    println!("❌ Service is unavailable: {}", e);
                    return Err(e);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("API base URL: {}", config.api_base_url());
                println!("Color output: {}", config.output.color_output);
                println!("Score animation: {}", config.output.animate_scores);
            }
            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn present_analysis(
    result: &AnalysisResult,
    config: &Config,
    format: OutputFormat,
    no_animation: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Console => {
            let use_colors = config.output.color_output;
            let animate = config.output.animate_scores
                && !no_animation
                && std::io::stdout().is_terminal();
            debug!("rendering analysis {} (animate: {})", result.id, animate);

            let score_view = ScoreView::new(use_colors);
            let mut stdout = std::io::stdout();
            score_view.present(&mut stdout, result, animate)?;

            let breakdown = BreakdownView::new(use_colors);
            print!("{}", breakdown.render(result));
        }
    }
    Ok(())
}

fn save_analysis(result: &AnalysisResult, path: &Path, format: OutputFormat) -> Result<()> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Console => {
            let mut text = ScoreView::new(false).render(result);
            text.push_str(&BreakdownView::new(false).render(result));
            text
        }
    };
    std::fs::write(path, content)?;
    println!("💾 Analysis saved to: {}", path.display());
    Ok(())
}

fn print_error_banner(message: &str, config: &Config) {
    if config.output.color_output {
        println!("\n❌ {}", message.red().bold());
    } else {
        println!("\n❌ {}", message);
    }
    println!("   Check the file and try again.");
}
