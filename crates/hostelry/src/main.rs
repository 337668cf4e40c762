mod commands;

use clap::{Parser, Subcommand};
use hostelry_common::{Config, Role};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hostelry front-end core shell", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "hostelry.toml")]
    config: PathBuf,

    /// Backend base URL, overrides the config file
    #[arg(long, env = "HOSTELRY_BACKEND_URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sidebar visible to a role
    Menu {
        #[arg(short, long)]
        role: Role,
        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },
    /// Print every route with the access decision for a role (anonymous when omitted)
    Routes {
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Validate the backend session and report where it lands
    Check,
    /// Log in, print the resulting menu, then log out
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "HOSTELRY_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config)?;
    if let Some(url) = args.backend_url {
        config = config.with_backend_url(url)?;
    }
    hostelry_common::logging::init(&config.general.log_level, config.general.log_format);
    tracing::debug!(backend = %config.backend.base_url, "configuration loaded");

    match args.command {
        Command::Menu { role, json } => commands::menu(role, json),
        Command::Routes { role } => commands::routes(role),
        Command::Check => commands::check(&config).await,
        Command::Login { email, password } => commands::login(&config, email, password).await,
    }
}
