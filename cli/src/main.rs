//! CLI entrypoint for swaytalk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use swaytalk_application::{
    DispatchGateway, RunSessionInput, RunSessionUseCase, SessionProgressNotifier,
    WindowManagerPort,
};
use swaytalk_domain::{CommandCatalog, Model};
use swaytalk_infrastructure::{
    ConfigLoader, DryRunWindowManager, FileConfig, JsonSchemaToolConverter,
    JsonlConversationLogger, OllamaGateway, SwayIpcClient,
};
use swaytalk_presentation::{
    Cli, ConsoleFormatter, InputSource, OutputFormat, ProgressReporter, SimpleProgress, capture,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, config.logging.file_dir.as_deref())?;

    info!("Starting swaytalk");
    check_config(&config)?;

    let catalog = CommandCatalog::builtin();

    if cli.list {
        print!("{}", ConsoleFormatter::format_catalog(&catalog));
        return Ok(());
    }

    if let Some(name) = &cli.describe {
        match ConsoleFormatter::format_describe(&catalog, name) {
            Ok(doc) => println!("{}", doc),
            Err(e) => bail!("{}", e),
        }
        return Ok(());
    }

    // === Input ===
    let launcher = cli.launcher.clone().or_else(|| config.input.launcher.clone());
    let text = match InputSource::select(cli.question.clone(), cli.stdin, launcher) {
        Some(source) => capture(&source).await?,
        None => None,
    };
    let Some(text) = text else {
        println!("No input provided.");
        return Ok(());
    };

    // === Dependency Injection ===
    let dry_run = cli.dry_run || config.ipc.dry_run;
    let recorder = dry_run.then(|| Arc::new(DryRunWindowManager::new()));
    let window_manager: Arc<dyn WindowManagerPort> = match &recorder {
        Some(recorder) => recorder.clone() as Arc<dyn WindowManagerPort>,
        None => Arc::new(
            SwayIpcClient::from_env(config.ipc.socket_path.as_deref(), config.ipc_timeout())
                .await
                .context("Failed to connect to sway")?,
        ),
    };

    let gateway = Arc::new(
        OllamaGateway::from_config(&config.model).context("Failed to set up the model gateway")?,
    );

    let mut session_config = config.session_config();
    if let Some(name) = &cli.model {
        let model: Model = name.parse().map_err(anyhow::Error::msg)?;
        session_config = session_config.with_model(model);
    }

    let dispatch = DispatchGateway::new(
        catalog,
        window_manager,
        session_config.describe_policy,
        session_config.expose_command_stubs,
    );

    let mut use_case = RunSessionUseCase::new(
        gateway,
        dispatch,
        Arc::new(JsonSchemaToolConverter),
        session_config,
    );
    if let Some(path) = &config.logging.transcript_path
        && let Some(logger) = JsonlConversationLogger::open(path)
    {
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    let progress: Box<dyn SessionProgressNotifier> = if cli.quiet {
        Box::new(swaytalk_application::NoSessionProgress)
    } else if cli.output == OutputFormat::Json {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let output = use_case
        .execute_with_progress(RunSessionInput::new(text), progress.as_ref())
        .await?;

    match cli.output {
        OutputFormat::Text => print!("{}", ConsoleFormatter::format(&output)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&output)),
    }

    if let Some(recorder) = recorder {
        eprintln!(
            "dry run: {} command(s) recorded, none sent",
            recorder.commands().len()
        );
    }

    Ok(())
}

/// Console logging by verbosity, plus an optional daily-rolling file.
fn init_logging(verbose: u8, file_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "swaytalk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log warnings; refuse to run with errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        if issue.is_error() {
            eprintln!("{}", ConsoleFormatter::format_error(&issue.to_string()));
            errors += 1;
        } else {
            warn!("{}", issue);
        }
    }
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}
