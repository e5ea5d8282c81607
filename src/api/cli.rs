use crate::api::server;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::workflows::status::{correction_required_statuses, is_correction_required_status};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Homestay Workflow",
    about = "Serve and inspect the homestay permit workflow backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the correction-status taxonomy
    Status {
        #[command(subcommand)]
        command: StatusCommand,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum StatusCommand {
    /// Report whether a status sends the application back for corrections
    Check {
        /// Workflow status tag; omit to check an absent status
        status: Option<String>,
    },
    /// List the statuses that require corrections
    List,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the configuration with secrets redacted
    Show,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Status {
            command: StatusCommand::Check { status },
        } => {
            println!("{}", describe_status(status.as_deref()));
            Ok(())
        }
        Command::Status {
            command: StatusCommand::List,
        } => {
            for status in correction_required_statuses() {
                println!("{status}");
            }
            Ok(())
        }
        Command::Config {
            command: ConfigCommand::Show,
        } => {
            let config = AppConfig::load()?;
            print!("{}", render_config(&config));
            Ok(())
        }
    }
}

fn describe_status(status: Option<&str>) -> String {
    let verdict = if is_correction_required_status(status) {
        "correction required"
    } else {
        "no correction required"
    };
    match status {
        Some(status) => format!("{status}: {verdict}"),
        None => format!("(absent): {verdict}"),
    }
}

fn render_config(config: &AppConfig) -> String {
    let database = config
        .database
        .as_ref()
        .map(|settings| settings.redacted_url())
        .unwrap_or_else(|| "(not configured)".to_string());
    let session = if config.session.secret.is_some() {
        "set"
    } else {
        "unset"
    };

    format!(
        "environment: {}\nlisten: {}:{}\nlog level: {}\ndatabase: {}\nsession secret: {}\ne2e base url: {} (retries {}, trace {:?}, screenshots {:?}, video {:?})\n",
        config.environment.label(),
        config.server.host,
        config.server.port,
        config.telemetry.log_level,
        database,
        session,
        config.e2e.base_url,
        config.e2e.retries,
        config.e2e.trace,
        config.e2e.screenshot,
        config.e2e.video,
    )
}
