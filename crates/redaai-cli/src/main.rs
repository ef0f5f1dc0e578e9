use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "redaai")]
#[command(about = "RedaAI - essay correction client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        #[arg(long, env = "REDAAI_EMAIL")]
        email: String,
        #[arg(long, env = "REDAAI_PASSWORD")]
        password: String,
    },
    /// Register a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Request a password recovery email
    ForgotPassword {
        #[arg(long, env = "REDAAI_EMAIL")]
        email: String,
    },
    /// Submit an essay for correction
    Submit {
        /// File holding the essay text
        #[arg(long)]
        file: PathBuf,
        /// Email to submit under
        #[arg(long, env = "REDAAI_EMAIL")]
        email: String,
    },
    /// Extract essay text from an image
    Transcribe {
        /// Image file to transcribe
        #[arg(long)]
        image: PathBuf,
    },
    /// Clear the local session
    Logout,
    /// Show session and preference state
    Status,
    /// Show or set the theme preference
    Theme {
        /// "dark" or "light"; omit to show the current value
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new()?;

    match cli.command {
        Commands::Login { email, password } => commands::session::login(&ctx, &email, &password).await,
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => commands::session::signup(&ctx, &name, &email, &password, &confirm_password).await,
        Commands::ForgotPassword { email } => commands::session::forgot_password(&ctx, &email).await,
        Commands::Submit { file, email } => commands::essay::submit(&ctx, &file, &email).await,
        Commands::Transcribe { image } => commands::essay::transcribe(&ctx, &image).await,
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Status => commands::session::status(&ctx).await,
        Commands::Theme { value } => commands::theme::theme(&ctx, value.as_deref()).await,
    }
}
