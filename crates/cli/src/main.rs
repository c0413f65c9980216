use clap::Parser;
use ferrous_root_domain::CliOverrides;
use ferrous_root_infrastructure::dns::RootServerHandler;
use ferrous_root_jobs::{BackendReadinessJob, CacheMaintenanceJob, HostSyncMonitorJob, JobRunner};
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-root")]
#[command(version)]
#[command(about = "Ferrous Root - root nameserver middleware for an external naming extension")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Host root server address (ip:port)
    #[arg(long, value_name = "ADDR")]
    root_server: Option<String>,

    /// Extension backend base URL
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        root_server: cli.root_server.clone(),
        backend_url: cli.backend_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        "Starting Ferrous Root"
    );

    let services = di::RootServices::new(&config)?;
    let shutdown = CancellationToken::new();

    bootstrap::spawn_clock_ticker(shutdown.clone());

    // Host sync gates backend initialization; without waiting it fires at once.
    let (sync_tx, sync_rx) = watch::channel(!config.native.wait_for_sync);

    let mut runner = JobRunner::new()
        .with_backend_readiness(BackendReadinessJob::new(
            Arc::clone(&services.initialize_backend),
            sync_rx,
        ))
        .with_shutdown_token(shutdown.clone());

    if config.native.wait_for_sync {
        runner = runner.with_host_sync(
            HostSyncMonitorJob::new(Arc::clone(&services.host_sync), sync_tx)
                .with_interval(config.native.sync_probe_interval_secs),
        );
    }

    if let Some(cache) = &services.cache {
        runner = runner.with_cache_maintenance(
            CacheMaintenanceJob::new(Arc::clone(cache))
                .with_interval(config.cache.maintenance_interval_secs),
        );
    }

    runner.start().await;

    let dns_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.dns_port).parse()?;
    let handler = RootServerHandler::new(Arc::clone(&services.handler_use_case));
    let tcp_timeout = Duration::from_secs(config.server.tcp_timeout_secs);

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler, tcp_timeout) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    shutdown.cancel();
    services.initialize_backend.shutdown().await;
    info!(ready = services.readiness.is_ready(), "Server shutdown complete");

    Ok(())
}
