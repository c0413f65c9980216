use ferrous_root_application::ports::{
    ExtensionResolver, HostSyncPort, NativeCachePort, NativeResponder, ZoneSigner,
};
use ferrous_root_application::services::{NativeZoneResolver, ReadinessGate};
use ferrous_root_application::use_cases::{HandleRootQueryUseCase, InitializeBackendUseCase};
use ferrous_root_domain::{Config, ExtensionLabels};
use ferrous_root_infrastructure::dns::{
    DnsHostSyncProbe, NativeCacheConfig, NativeResponseCache, UpstreamNativeResponder,
};
use ferrous_root_infrastructure::extension::HttpExtensionResolver;
use ferrous_root_infrastructure::signing::{load_or_generate_key, Ed25519ZoneSigner};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct RootServices {
    pub readiness: Arc<ReadinessGate>,
    pub handler_use_case: Arc<HandleRootQueryUseCase>,
    pub initialize_backend: Arc<InitializeBackendUseCase>,
    pub host_sync: Arc<dyn HostSyncPort>,
    pub cache: Option<Arc<dyn NativeCachePort>>,
}

impl RootServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let labels = ExtensionLabels::from_config(&config.extension);
        let readiness = Arc::new(ReadinessGate::new());

        let root_server: SocketAddr = config.native.root_server.parse()?;
        let upstream = Arc::new(UpstreamNativeResponder::new(
            root_server,
            Duration::from_millis(config.native.query_timeout_ms),
        ));
        info!(root_server = %root_server, "Host root server configured");

        let cache: Option<Arc<dyn NativeCachePort>> = if config.cache.enabled {
            Some(Arc::new(NativeResponseCache::new(
                NativeCacheConfig::from_config(&config.cache),
            )))
        } else {
            info!("Native response cache disabled");
            None
        };

        let responder: Arc<dyn NativeResponder> = upstream.clone();
        let mut native = NativeZoneResolver::new(responder, labels.clone());
        if let Some(cache) = &cache {
            native = native.with_cache(Arc::clone(cache));
        }

        let key = load_or_generate_key(config.zone.key_file.as_deref().map(Path::new))?;
        let signer: Arc<dyn ZoneSigner> = Arc::new(Ed25519ZoneSigner::new(&key, &config.zone)?);

        let backend_timeout = Duration::from_millis(config.extension.backend_timeout_ms);
        let extension: Arc<dyn ExtensionResolver> = Arc::new(HttpExtensionResolver::new(
            &config.extension.backend_url,
            backend_timeout,
        )?);
        info!(
            backend_url = %config.extension.backend_url,
            direct = labels.direct(),
            abstract_label = labels.abstract_label(),
            "Extension backend configured"
        );

        let handler_use_case = Arc::new(
            HandleRootQueryUseCase::new(
                Arc::clone(&readiness),
                labels,
                native,
                Arc::clone(&extension),
                signer,
            )
            .with_backend_timeout(backend_timeout)
            .with_nsec_ttl(config.zone.nsec_ttl),
        );

        let initialize_backend = Arc::new(InitializeBackendUseCase::new(
            extension,
            Arc::clone(&readiness),
        ));

        Ok(Self {
            readiness,
            handler_use_case,
            initialize_backend,
            host_sync: Arc::new(DnsHostSyncProbe::new(upstream)),
            cache,
        })
    }
}
