//! ntfy-push CLI
//!
//! Pushes one notification to a topic from the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ntfy_push::{DryRun, Notification, NtfyClient, Priority, DEFAULT_SERVER};

#[derive(Parser)]
#[command(name = "ntfy-push")]
#[command(about = "Push a notification to an ntfy topic")]
#[command(version)]
struct Cli {
    /// Topic to publish on
    topic: String,
    /// Message text (mutually exclusive with --file)
    #[arg(long, short)]
    message: Option<String>,
    /// File pushed as attachment (mutually exclusive with --message)
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Notification title
    #[arg(long, short)]
    title: Option<String>,
    /// Priority: min, low, default, high, max
    #[arg(long, short, default_value = "default", value_parser = parse_priority)]
    priority: Priority,
    /// Tag, repeatable (rendered as emojis by the receiving client)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// URL opened when the notification is tapped
    #[arg(long)]
    click: Option<String>,
    /// Address the notification is also mailed to
    #[arg(long)]
    email: Option<String>,
    /// Icon URL
    #[arg(long)]
    icon: Option<String>,
    /// Scheduled-delivery token, e.g. "1m" or a unix timestamp
    #[arg(long)]
    at: Option<String>,
    /// Server to publish to
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,
    /// Validate and build the request but skip delivery
    #[arg(long)]
    dry_run: bool,
}

fn parse_priority(value: &str) -> std::result::Result<Priority, String> {
    match value {
        "min" => Ok(Priority::Min),
        "low" => Ok(Priority::Low),
        "default" => Ok(Priority::Default),
        "high" => Ok(Priority::High),
        "max" => Ok(Priority::Max),
        other => Err(format!(
            "unknown priority '{other}' (expected min, low, default, high or max)"
        )),
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut notification = Notification::new().with_priority(cli.priority);
    if let Some(message) = cli.message {
        notification = notification.with_message(message);
    }
    if let Some(file) = cli.file {
        notification = notification.with_file(file);
    }
    if let Some(title) = cli.title {
        notification = notification.with_title(title);
    }
    if let Some(click) = cli.click {
        notification = notification.with_click(click);
    }
    if let Some(email) = cli.email {
        notification = notification.with_email(email);
    }
    if let Some(icon) = cli.icon {
        notification = notification.with_icon(icon);
    }
    if let Some(at) = cli.at {
        notification = notification.with_at(at);
    }
    notification = notification.with_tags(cli.tags);

    let dry_run = if cli.dry_run { DryRun::On } else { DryRun::Off };
    let client = NtfyClient::new()
        .with_server(cli.server.clone())
        .with_dry_run(dry_run);

    client.push(&cli.topic, &notification)?;
    println!("notification pushed, visit {}/{}", cli.server, cli.topic);
    Ok(())
}
