//! CLI entrypoint for Jargon Buster
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use jargon_application::{
    CheckModelsUseCase, DispatchParams, ExplainTermInput, ExplainTermUseCase, ModelDispatcher,
};
use jargon_domain::{OutputFormat, Severity};
use jargon_infrastructure::{
    ConfigLoader, FileConfig, GitHubModelCatalog, credential_resolver, default_router,
};
use jargon_presentation::{
    Cli, ConsoleFormatter, JargonRepl, OutputConfig, ReplConfig, progress_notifier,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting Jargon Buster");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    check_config(&config)?;

    // Resolve settings: CLI flags win over config
    let (catalog, _) = config.models.to_catalog();
    let params = match cli.timeout {
        Some(0) => bail!("--timeout must be greater than zero"),
        Some(secs) => DispatchParams::default().with_timeout(Duration::from_secs(secs)),
        None => config.dispatch.to_dispatch_params().0,
    };
    let temperature = match cli.temperature {
        Some(t) => jargon_domain::Temperature::new(t)?,
        None => config.dispatch.parse_default_temperature().0,
    };
    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply_color();

    // Credential is resolved once, before any model is contacted
    let resolver = credential_resolver(&config.credentials);

    if cli.list_models {
        let credential = resolver.resolve()?;
        let catalog_client = GitHubModelCatalog::new(config.catalog.url.clone())?;
        let entries = catalog_client.list_available_models(&credential).await?;
        for entry in &entries {
            match &entry.name {
                Some(name) if name != &entry.id => println!("{:<45} {}", entry.id, name),
                _ => println!("{}", entry.id),
            }
        }
        println!("\n{} models available", entries.len());
        return Ok(());
    }

    // === Dependency Injection ===
    let transport =
        Arc::new(default_router(params.timeout).context("Failed to build HTTP client")?);
    let dispatcher = ModelDispatcher::new(transport, Arc::new(catalog)).with_params(params);

    if cli.check_models {
        let use_case = CheckModelsUseCase::from_resolver(dispatcher, &resolver)?;
        let reports = use_case.execute().await;
        print!("{}", ConsoleFormatter::format_connectivity(&reports));
        let unreachable = reports
            .iter()
            .filter(|r| !r.connectivity.is_reachable())
            .count();
        if unreachable > 0 {
            bail!("{} of {} models unreachable", unreachable, reports.len());
        }
        return Ok(());
    }

    let classifier = Arc::new(config.classifier.to_classifier());
    let use_case = ExplainTermUseCase::from_resolver(dispatcher, classifier, &resolver)?;

    let show_progress = !cli.quiet && config.repl.show_progress;

    if cli.is_interactive() {
        let repl_config = ReplConfig {
            show_progress,
            history_file: config.repl.history_path(),
            temperature,
        };
        let mut repl = JargonRepl::new(use_case, repl_config, output);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode
    let raw_term = cli.term.clone().unwrap_or_default();
    let input = ExplainTermInput::new(raw_term).with_temperature(temperature.value());

    let progress = progress_notifier(show_progress);
    let outcome = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let formatter = ConsoleFormatter::from_terminal();
    println!("{}", formatter.format_outcome(&outcome, output.format));

    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
///
/// Logs go to stderr, and also to `--log-file` when given.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path.file_name().context("--log-file must name a file")?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr.and(file_writer))
        .init();
    Ok(Some(guard))
}

/// Print config issues; any error aborts before anything else runs
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("{} configuration error(s)", errors);
    }
    Ok(())
}
