use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use veneer::config::Config;
use veneer::platform::Platform;
use veneer::validation;

/// Veneer: simulated fake-profile detection for social accounts.
///
/// Synthesizes a plausible profile for a username on Twitter/X, Instagram,
/// or Facebook and scores it against a battery of twelve heuristic checks.
/// No real platform data is fetched.
#[derive(Parser)]
#[command(name = "veneer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an account and print its risk assessment
    Analyze {
        /// Username (leading @ accepted) or full profile URL
        target: String,

        /// Platform to simulate: twitter, instagram, or facebook
        #[arg(long, short, default_value = "twitter")]
        platform: String,

        /// Seed for the synthetic data generator (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the full report as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Validate a profile URL and extract its username
    CheckUrl {
        /// The profile URL to check
        url: String,

        /// Platform whose URL format to check against
        #[arg(long, short, default_value = "twitter")]
        platform: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("veneer=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            target,
            platform,
            seed,
            json,
        } => {
            let platform: Platform = platform.parse()?;
            let config = Config::load()?;

            let username = resolve_target(&target, platform)?;

            // Cosmetic latency behind a spinner. Skipped for JSON output
            // and when the delay is configured to zero.
            if !json && config.analysis_delay_ms > 0 {
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_message(format!(
                    "Analyzing @{username} on {}...",
                    platform.display_name()
                ));
                spinner.enable_steady_tick(Duration::from_millis(80));
                std::thread::sleep(Duration::from_millis(config.analysis_delay_ms));
                spinner.finish_and_clear();
            }

            let seed = seed.or(config.seed);
            let mut rng = match seed {
                Some(s) => {
                    info!(seed = s, "Using seeded generator");
                    StdRng::seed_from_u64(s)
                }
                None => StdRng::from_os_rng(),
            };

            let now = chrono::Utc::now();
            let profile =
                veneer::profile::generator::generate_profile_at(platform, &username, now, &mut rng)?;
            let input = profile.to_scoring_input(now);
            let assessment = veneer::scoring::risk::score_profile(&input);

            if json {
                let report = serde_json::json!({
                    "profile": profile,
                    "assessment": assessment,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                veneer::output::terminal::display_report(&profile, &assessment);
            }
        }

        Commands::CheckUrl { url, platform } => {
            let platform: Platform = platform.parse()?;

            if validation::validate_profile_url(&url, platform) {
                println!("{}", "Valid profile URL.".green().bold());
                if let Some(username) = validation::extract_username(&url) {
                    println!("  Username: @{username}");
                }
            } else {
                println!("{}", "Invalid URL format.".red().bold());
                print_url_examples(platform);
            }
        }
    }

    Ok(())
}

/// Turn the analyze target into a bare username.
///
/// URLs are validated against the platform's pattern before extraction —
/// an invalid URL fails the whole command rather than producing a
/// nonsense analysis. Bare usernames just lose their leading @.
fn resolve_target(target: &str, platform: Platform) -> Result<String> {
    if target.starts_with("http://") || target.starts_with("https://") {
        if !validation::validate_profile_url(target, platform) {
            print_url_examples(platform);
            anyhow::bail!(
                "'{target}' is not a valid {} profile URL",
                platform.display_name()
            );
        }
        return validation::extract_username(target)
            .ok_or_else(|| anyhow::anyhow!("Could not extract a username from '{target}'"));
    }

    let username = target.strip_prefix('@').unwrap_or(target);
    if username.trim().is_empty() {
        anyhow::bail!("Username must not be empty");
    }
    Ok(username.to_string())
}

fn print_url_examples(platform: Platform) {
    println!(
        "Valid {} profile URLs look like:",
        platform.display_name()
    );
    for example in validation::url_examples(platform) {
        println!("  {}", example.dimmed());
    }
}
