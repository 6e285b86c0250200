//! Culture Compass service binary.
//!
//! Loads configuration, initializes tracing and the database pool, wires
//! the adapters into the application state, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use culture_compass::adapters::email::{ResendNotifier, ResendNotifierConfig};
use culture_compass::adapters::http::assessment::{assessment_router, AssessmentAppState};
use culture_compass::adapters::postgres::{PostgresSubmissionStore, PostgresUnlockReader};
use culture_compass::config::AppConfig;
use culture_compass::domain::foundation::Percentage;
use culture_compass::domain::recommendation::{
    CaseStudyLibrary, CaseStudyMatchWeights, MatcherOptions, RecommendationLibrary,
    RecommendationMatcher,
};
use culture_compass::ports::ResultNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let result_notifier: Option<Arc<dyn ResultNotifier>> = if config.email.enabled {
        Some(Arc::new(ResendNotifier::new(ResendNotifierConfig {
            api_key: config.email.resend_api_key.clone(),
            from: config.email.from_header(),
            max_attempts: config.email.max_attempts,
            base_delay: Duration::from_secs(1),
        })))
    } else {
        None
    };

    let matcher = RecommendationMatcher::new(
        RecommendationLibrary::builtin(),
        CaseStudyLibrary::builtin(),
    )
    .with_options(MatcherOptions {
        score_threshold: config.scoring.recommendation_threshold,
        max_recommendations: config.scoring.max_recommendations,
        target_score: Percentage::new(70),
        case_studies_per_recommendation: config.scoring.case_studies_per_recommendation,
    })
    .with_case_study_weights(CaseStudyMatchWeights {
        proximity_window: config.scoring.case_study_proximity_window,
        ..CaseStudyMatchWeights::default()
    });

    let state = AssessmentAppState {
        submission_store: Arc::new(PostgresSubmissionStore::new(pool.clone())),
        unlock_reader: Arc::new(PostgresUnlockReader::new(pool)),
        result_notifier,
        matcher,
    };

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    let app = Router::new()
        .nest("/api", assessment_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors),
        )
        .with_state(state);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
