use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use khabar::application::services::{AnalysisService, InputCollector, SharedModelProvider};
use khabar::infrastructure::charts::{ChartBackendFactory, ResvgWordCloud};
use khabar::infrastructure::models::ModelFactory;
use khabar::infrastructure::observability::{TracingConfig, init_tracing};
use khabar::infrastructure::text_processing::PlainTextAdapter;
use khabar::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

// Multipart framing and the other form fields on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

static MODELS: SharedModelProvider = SharedModelProvider::new();

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment.as_str(), &settings.logging),
        settings.server.port,
    );

    let scaffold = ScaffoldConfig::from_env();
    let model_factory = ModelFactory::new(settings.models.clone(), scaffold);
    tracing::info!(backend = model_factory.backend().as_str(), "Initializing models");
    let models = MODELS.get_or_init(&model_factory);

    let word_cloud_settings = &settings.charts.word_cloud;
    let word_cloud = Arc::new(ResvgWordCloud::new(
        word_cloud_settings.width,
        word_cloud_settings.height,
        word_cloud_settings.max_words,
        word_cloud_settings.font_family.clone(),
    ));

    let analysis_service = Arc::new(AnalysisService::new(models, word_cloud));
    let input_collector = Arc::new(InputCollector::new(
        Arc::new(PlainTextAdapter),
        settings.upload.max_bytes(),
    ));

    let state = AppState {
        analysis_service,
        input_collector,
        chart_renderer: ChartBackendFactory::create(settings.charts.backend),
        body_limit_bytes: usize::try_from(settings.upload.max_bytes())?
            .saturating_add(FORM_OVERHEAD_BYTES),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
