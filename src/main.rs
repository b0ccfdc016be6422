use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storefront_cart::adapters::http::{checkout_router, CheckoutAppState};
use storefront_cart::adapters::{
    PostgresCustomerOrderReader, PostgresPaymentMethodGateway, PostgresProductCategoryReader,
    StubRiskManagementFilter,
};
use storefront_cart::application::{
    OrderClearedStateRuleCollector, PaymentMethodService, ProductOfCategoriesRuleCollector,
    RuleDataCollectorRegistry,
};
use storefront_cart::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_logging(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

async fn health() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_logging(&config.server);

    let pool = config.database.connect().await?;

    let payment_method_service = PaymentMethodService::new(
        Arc::new(PostgresPaymentMethodGateway::new(pool.clone())),
        Arc::new(StubRiskManagementFilter::new()),
    );
    let rule_data_collectors = RuleDataCollectorRegistry::default()
        .with(Arc::new(OrderClearedStateRuleCollector::new(Arc::new(
            PostgresCustomerOrderReader::new(pool.clone()),
        ))))
        .with(Arc::new(ProductOfCategoriesRuleCollector::new(Arc::new(
            PostgresProductCategoryReader::new(pool),
        ))));

    let state = CheckoutAppState {
        payment_method_service: Arc::new(payment_method_service),
        rule_data_collectors: Arc::new(rule_data_collectors),
    };

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", checkout_router().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Storefront cart service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
