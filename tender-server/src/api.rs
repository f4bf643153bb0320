use {
    crate::{
        bid::api as bid_api,
        config::RunOptions,
        server::{
            EXIT_CHECK_INTERVAL,
            SHOULD_EXIT,
        },
        state::Store,
    },
    anyhow::Result,
    axum::{
        http::StatusCode,
        response::{
            IntoResponse,
            Response,
        },
        routing::{
            get,
            post,
        },
        Json,
        Router,
    },
    clap::crate_version,
    std::sync::{
        atomic::Ordering,
        Arc,
    },
    tender_api_types::{
        bid::{
            Bid,
            BidCreate,
            BidForm,
            BidQuote,
            BidQuoteRequest,
            BidResult,
            BidStatus,
            Bids,
        },
        exchange_rate::ExchangeRate,
        tender::{
            TenderContext,
            TenderId,
        },
        ErrorBodyResponse,
        Route,
    },
    tower_http::cors::CorsLayer,
    utoipa::OpenApi,
    utoipa_redoc::{
        Redoc,
        Servable,
    },
};

async fn root() -> String {
    format!("Tender Bid Server API {}", crate_version!())
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request was made without selecting a tender first
    NoTenderSelected,
    /// A required field of the bid form was missing or invalid
    InvalidInput(String),
    /// The tender was not found among the stored bids
    TenderNotFound(TenderId),
    /// The bid store could not be read or written
    StorageUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::NoTenderSelected => (
                StatusCode::BAD_REQUEST,
                "No tender selected. Please go back and select a tender.".to_string(),
            ),
            RestError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg))
            }
            RestError::TenderNotFound(tender_id) => (
                StatusCode::NOT_FOUND,
                format!(
                    "Tender with ID {} does not exist. Please select a valid tender.",
                    tender_id
                ),
            ),
            RestError::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The bid store is temporarily unavailable".to_string(),
            ),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, msg) = self.to_status_and_message();
        (status, Json(ErrorBodyResponse { error: msg })).into_response()
    }
}

pub async fn live() -> Response {
    (StatusCode::OK, "OK").into_response()
}

pub async fn start_api(run_options: RunOptions, store: Arc<Store>) -> Result<()> {
    // Make sure functions included in the paths section have distinct names, otherwise some api generators will fail
    #[derive(OpenApi)]
    #[openapi(
    paths(
    bid_api::post_bid,
    bid_api::post_bid_quote,
    bid_api::get_bids,
    bid_api::get_exchange_rate,
    ),
    components(
    schemas(
    Bid,
    BidCreate,
    BidForm,
    BidQuote,
    BidQuoteRequest,
    BidResult,
    BidStatus,
    Bids,
    ExchangeRate,
    TenderContext,
    TenderId,
    ErrorBodyResponse,
    ),
    responses(
    ErrorBodyResponse,
    BidResult,
    BidQuote,
    Bids,
    ExchangeRate,
    ),
    ),
    tags(
    (name = "Tender Bid Server", description = "Tender Bid Server collects bids for tenders, converts them \
    between INR and ETH and keeps them in the shared bid store.")
    )
    )]
    struct ApiDoc;

    let bid_routes = Router::new()
        .route(Route::Root.as_ref(), post(bid_api::post_bid))
        .route(Route::Root.as_ref(), get(bid_api::get_bids))
        .route(Route::Quote.as_ref(), post(bid_api::post_bid_quote));

    let v1_routes = Router::new().nest(
        Route::V1.as_ref(),
        Router::new()
            .nest(Route::Bid.as_ref(), bid_routes)
            .route(Route::ExchangeRate.as_ref(), get(bid_api::get_exchange_rate)),
    );

    let app: Router<()> = Router::new()
        .merge(Redoc::with_url(Route::Docs.as_ref(), ApiDoc::openapi()))
        .merge(v1_routes)
        .route(Route::Root.as_ref(), get(root))
        .route(Route::Liveness.as_ref(), get(live))
        .layer(CorsLayer::permissive())
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&run_options.server.listen_addr).await?;
    tracing::info!(
        listen_addr = run_options.server.listen_addr.to_string(),
        "Starting API server..."
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            while !SHOULD_EXIT.load(Ordering::Acquire) {
                tokio::time::sleep(EXIT_CHECK_INTERVAL).await;
            }
            tracing::info!("Shutting down RPC server...");
        })
        .await?;
    Ok(())
}
