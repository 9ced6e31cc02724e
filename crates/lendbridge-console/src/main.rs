/*
[INPUT]:  CLI arguments, optional YAML configuration file, terminal input
[OUTPUT]: Interactive lending console or a one-shot form submission
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or output modes
*/

mod tui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lendbridge_adapter::LendingClient;
use lendbridge_console::form::FormState;
use lendbridge_console::{Action, AppState, ChannelSink, ConsoleConfig, FormBindings, Panel};

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

/// Exit status when the backend call did not produce usable data.
const EXIT_API_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "lendbridge", version, about = "Terminal client for the lending backend")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", env = "LENDBRIDGE_BASE_URL")]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive console (default)
    Tui,
    /// Submit one form and print the rendered result
    Submit {
        /// register, check-eligibility, create-loan, view-loans or view-customer
        form: Panel,
        /// Field values, in form order
        #[arg(value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let config = load_config(args.config_path.as_ref(), args.base_url.clone())?;

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_buffer: LogBufferHandle =
                Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
            init_tracing_to_buffer(&args.log_level, log_buffer.clone())?;
            let bindings = build_bindings(&config)?;
            tui::run_tui_with_log(bindings, config.initial_panel, log_buffer).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit { form, fields } => {
            init_tracing_to_stderr(&args.log_level)?;
            let bindings = build_bindings(&config)?;
            let succeeded = run_submit(&bindings, form, fields).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_API_FAILURE)
            })
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

fn init_tracing_to_stderr(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tracing_to_buffer(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(LogWriterFactory::new(buffer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>, base_url: Option<String>) -> Result<ConsoleConfig> {
    let mut config = match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            ConsoleConfig::from_file(path_str).context("load config")?
        }
        None => ConsoleConfig::default(),
    };
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    Ok(config)
}

fn build_bindings(config: &ConsoleConfig) -> Result<FormBindings> {
    let client = LendingClient::with_config(config.client.to_client_config(), &config.base_url)
        .with_context(|| format!("create client for {}", config.base_url))?;
    Ok(FormBindings::new(client))
}

async fn run_submit(
    bindings: &FormBindings,
    panel: Panel,
    fields: Vec<(String, String)>,
) -> Result<bool> {
    let mut form = FormState::new(panel);
    for (name, value) in fields {
        if !form.set(&name, value) {
            bail!("form '{panel}' has no field '{name}'");
        }
    }

    let action = Action::for_panel(panel);
    info!(action = %action, base_url = %bindings.client().base_url(), "submitting");

    let (sink, mut render_rx) = ChannelSink::channel();
    let data = bindings.submit(action, &form.values(), &sink).await;
    drop(sink);

    let mut app = AppState::new(panel);
    while let Some(command) = render_rx.recv().await {
        app.apply(command);
    }

    println!("{}", app.output.text());
    if action.binding().renders_list {
        for line in app.list.lines() {
            println!("{line}");
        }
    }

    Ok(data.is_some())
}
