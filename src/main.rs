use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use file_server::cli::{self, Cli};
use file_server::config::Config;
use file_server::logger::{LogLevel, Logger};
use file_server::{build_pipeline, normalize_prefix, server, ServerError};

/// Program version, overridable at build time
const VERSION: &str = match option_env!("FILE_SERVER_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Arc::new(Logger::new(LogLevel::Info));
    if cli.verbose {
        logger.set_level(LogLevel::Debug);
    }

    if cli.show_version {
        print!("{}", cli::version_text(VERSION, &build_date()));
        return ExitCode::SUCCESS;
    }

    match run(&cli, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(format_args!("An error occurred: {err}"));
            ExitCode::FAILURE
        }
    }
}

/// Build date injected by the release build, today otherwise
fn build_date() -> String {
    option_env!("FILE_SERVER_BUILD_DATE").map_or_else(
        || chrono::Local::now().format("%Y-%m-%d").to_string(),
        ToString::to_string,
    )
}

fn run(cli: &Cli, logger: &Arc<Logger>) -> Result<(), ServerError> {
    let cfg = Config::load(cli.config.as_deref(), &cli.overrides())?;

    logger.set_level(cfg.log_level()?);
    if let Some(path) = &cfg.logging.file {
        logger.set_log_file(Some(path.as_path()))?;
    }

    logger.debug(format_args!("Host set to: {}", cfg.server.host));
    logger.debug(format_args!("Port set to: {}", cfg.server.port));
    logger.debug(format_args!("Prefix set to: {}", cfg.files.prefix));
    logger.debug(format_args!("Directory set to: {}", cfg.files.directory.display()));
    logger.debug(format_args!("Caching set to: {}", cfg.files.caching));
    logger.debug(format_args!("Log level set to: {}", logger.level()));

    // Create the Tokio runtime, worker count from configuration
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
        logger.debug(format_args!("Using {workers} worker threads"));
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, Arc::clone(logger)))
}

async fn async_main(cfg: Config, logger: Arc<Logger>) -> Result<(), ServerError> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let prefix = normalize_prefix(&cfg.files.prefix);
    let router = build_pipeline(&cfg.files.directory, &prefix, cfg.files.caching, &logger);

    logger.info(format_args!(
        "Serving {} on HTTP port: {}",
        cfg.files.directory.display(),
        cfg.server.port
    ));
    logger.info(format_args!(
        "Visit: http://localhost:{}{prefix}",
        cfg.server.port
    ));

    server::start_server_loop(listener, Arc::new(router), logger, server::shutdown_signal()).await;
    Ok(())
}
