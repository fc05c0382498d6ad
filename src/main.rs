use clap::Parser;

use gh_activity::cmdargs::Args;
use gh_activity::config::{Config, ConfigError};
use gh_activity::formatter::format_event;
use gh_activity::github;
use gh_activity::logging::TracingSetup;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install().ok();
    TracingSetup::init();

    let args = Args::parse();
    let username = match args.username {
        Some(ref username) => username,
        None => {
            eprintln!("Please provide a GitHub username.");
            std::process::exit(1);
        }
    };

    let config = build_configuration(&args)?;
    let client = github::Client::new();

    match client.fetch_user_events(&config, &username).await {
        Ok(events) => {
            let lines: Vec<String> = events.iter().filter_map(format_event).collect();
            if lines.is_empty() {
                println!("No recent activity found");
            } else {
                println!("{}", lines.join("\n"));
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_configuration(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::from_env()?;

    if let Some(u) = &args.github_api_url {
        config.set_github_api_url(u.clone());
    }

    config.validate_configuration().map(|_| config)
}
