use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio_stream::{Stream, StreamExt};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info, warn};

use crate::api::{
    ApiAnalyzeRequest, ApiAnalyzeResponse, ApiFixRequest, ApiFixResponse, ApiHistoryItem,
};
use content_lens::config::LensConfig;
use content_lens::engine::AnalysisStage;
use content_lens::generator::apply_fix;
use content_lens::history::{HistoryEntry, HistoryStore};
use content_lens::progress::{ProgressHub, StageEvent};
use content_lens::AnalysisEngine;

/// Seconds a progress channel stays open for subscribers after it is created.
const CHANNEL_GRACE_SECS: u64 = 10;

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone)]
struct AppState {
    engine: AnalysisEngine,
    history: Arc<HistoryStore>,
    progress: ProgressHub,
}

#[derive(Deserialize)]
struct StreamQuery {
    request_id: String,
}

pub async fn serve(args: crate::ServeArgs, config: LensConfig) -> Result<(), String> {
    let engine = AnalysisEngine::from_config(&config).map_err(|err| err.to_string())?;
    let history = HistoryStore::load(config.history.path.clone(), config.history.limit).await?;
    info!(
        sentiment = engine.sentiment_mode().label(),
        latency_ms = engine.latency().as_millis() as u64,
        history = %config.history.path.display(),
        "engine ready"
    );

    let state = AppState {
        engine,
        history: Arc::new(history),
        progress: ProgressHub::new(Duration::from_secs(CHANNEL_GRACE_SECS)),
    };

    let index_path = format!("{}/index.html", args.web_root.trim_end_matches('/'));
    let static_files = ServeDir::new(&args.web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(|| async { StatusCode::OK }))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analyze/stream", get(stream_handler))
        .route("/api/history", get(history_list).delete(history_clear))
        .route("/api/history/:id", get(history_get))
        .route("/api/fix", post(fix_handler))
        .nest_service("/", static_files)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;

    info!(%addr, "content-lens listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let (text, options) = request
        .validate(state.engine.default_options())
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let request_id = request.request_id.clone().unwrap_or_else(next_request_id);
    let sender = state.progress.sender(&request_id).await;

    info!(request_id = %request_id, sensitivity = options.sensitivity, "analyzing content");
    let result = state
        .engine
        .analyze_with_progress(&text, &options, |stage: AnalysisStage| {
            let _ = sender.send(StageEvent::from_stage(stage));
        })
        .await;

    let mut warnings = Vec::new();
    let mut history_id = None;
    if request.save_history.unwrap_or(true) {
        match state.history.record(&text, &result).await {
            Ok(Some(entry)) => history_id = Some(entry.id),
            Ok(None) => debug!(request_id = %request_id, "history unchanged, same snippet as newest entry"),
            Err(err) => {
                warn!(error = %err, "failed to record history");
                warnings.push(format!("history not saved: {}", err));
            }
        }
    }

    Ok(Json(ApiAnalyzeResponse {
        request_id,
        sensitivity: options.sensitivity,
        result,
        history_id,
        warnings,
    }))
}

async fn stream_handler(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = state.progress.subscribe(&query.request_id).await.map(|event| {
        let data = serde_json::to_string(&event).unwrap_or_default();
        Ok::<_, Infallible>(Event::default().event(event.stage).data(data))
    });
    Sse::new(events).keep_alive(KeepAlive::new().interval(Duration::from_secs(8)))
}

async fn history_list(State(state): State<AppState>) -> Json<Vec<ApiHistoryItem>> {
    let entries = state.history.list().await;
    Json(entries.iter().map(ApiHistoryItem::from).collect())
}

async fn history_get(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> Result<Json<HistoryEntry>, StatusCode> {
    state
        .history
        .get(&entry_id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn history_clear(State(state): State<AppState>) -> Result<StatusCode, (StatusCode, String)> {
    state
        .history
        .clear()
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn fix_handler(Json(request): Json<ApiFixRequest>) -> Json<ApiFixResponse> {
    let response = match apply_fix(&request.text, &request.suggestion) {
        Some(text) => ApiFixResponse {
            text,
            changed: true,
        },
        None => ApiFixResponse {
            text: request.text,
            changed: false,
        },
    };
    Json(response)
}

fn next_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
