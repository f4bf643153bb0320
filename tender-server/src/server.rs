use {
    crate::{
        api,
        bid::{
            repository::FileStorage,
            service::{
                self as bid_service,
                Service as BidService,
            },
        },
        config::{
            Config,
            RunOptions,
        },
        kernel::exchange_rate::PriceClient,
        state::Store,
        tender_metrics::{
            setup_metrics_recorder,
            start_metrics,
        },
    },
    anyhow::anyhow,
    std::{
        sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
        time::Duration,
    },
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    tokio::spawn(async move {
        tracing::info!("Registered shutdown signal handler...");
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = err.to_string(), "Failed to listen for shutdown signal");
        }
        tracing::info!("Shut down signal received, waiting for tasks...");
        SHOULD_EXIT.store(true, Ordering::Release);
    });

    let config = Config::load(&run_options.config.config).map_err(|err| {
        anyhow!(
            "Failed to load config from file({path}): {:?}",
            err,
            path = run_options.config.config
        )
    })?;
    tracing::info!(
        store_path = config.store_path.display().to_string(),
        price_service = config.price_service.url.as_str(),
        "Loaded config"
    );

    let price_client = PriceClient::try_new(&config.price_service)?;
    let bid_service = BidService::new(
        FileStorage::new(config.store_path.clone()),
        price_client,
        bid_service::Config {
            base_currency:  config.price_service.base.clone(),
            quote_currency: config.price_service.quote.clone(),
            bidder_wallet:  config.bidder_wallet.clone(),
        },
    );

    let store = Arc::new(Store {
        bid_service,
        metrics_recorder: setup_metrics_recorder()?,
    });

    let server_loop = tokio::spawn(api::start_api(run_options.clone(), store.clone()));
    let metrics_loop = tokio::spawn(start_metrics(run_options, store));
    let (server_result, metrics_result) = tokio::join!(server_loop, metrics_loop);
    server_result??;
    metrics_result??;
    Ok(())
}

// A static exit flag to indicate to running threads that we're shutting down. This is used to
// gracefully shutdown the application.
pub(crate) static SHOULD_EXIT: AtomicBool = AtomicBool::new(false);
pub const EXIT_CHECK_INTERVAL: Duration = Duration::from_secs(1);
