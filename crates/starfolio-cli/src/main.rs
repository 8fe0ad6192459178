use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starfolio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "starfolio")]
#[command(author, version, about = "A personal portfolio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Send a contact message without opening the TUI
    Send {
        /// Sender name
        #[arg(short = 'n', long)]
        name: String,
        /// Sender email address
        #[arg(short = 'e', long)]
        email: String,
        /// Message body
        #[arg(short = 'm', long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme
    Show,
    /// Set the theme to "dark" or "light"
    Set { value: String },
    /// Flip between dark and light
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Theme { action }) => match action {
            ThemeAction::Show => commands::theme::show(),
            ThemeAction::Set { value } => commands::theme::set(&value),
            ThemeAction::Toggle => commands::theme::toggle(),
        },
        Some(Commands::Send {
            name,
            email,
            message,
        }) => commands::send::run(&config, name, email, message).await,
    }
}
