use crate::coordinator::{self, SessionLocks};
use crate::lexicon::PolarityScorer;
use crate::llm_client::ResponseGenerator;
use crate::render::{PageOptions, PageRenderer};
use crate::sentiment::SentimentLabel;
use crate::session::{ChatSession, MoodRecord, SessionStoreError, SessionStoreRef, Turn};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    store: SessionStoreRef,
    scorer: Arc<dyn PolarityScorer>,
    generator: Arc<dyn ResponseGenerator>,
    renderer: Arc<PageRenderer>,
    locks: Arc<SessionLocks>,
}

impl AppState {
    pub fn new(
        store: SessionStoreRef,
        scorer: Arc<dyn PolarityScorer>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store,
            scorer,
            generator,
            renderer: Arc::new(PageRenderer::new()?),
            locks: Arc::new(SessionLocks::new()),
        })
    }

    /// Turn locks, so a background sweep can prune them
    pub fn locks(&self) -> Arc<SessionLocks> {
        self.locks.clone()
    }

    async fn submit(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<coordinator::Submission, SessionStoreError> {
        coordinator::submit(
            &self.locks,
            self.store.as_ref(),
            self.scorer.as_ref(),
            self.generator.as_ref(),
            session_id,
            message,
        )
        .await
    }
}

/// Chat form posted by the HTML page
#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize, Default)]
pub struct ChatQuery {
    #[serde(default)]
    summary: bool,
}

/// Request model for the JSON message endpoint
#[derive(Deserialize)]
pub struct MessageRequest {
    message: String,
}

/// Response model for the JSON message endpoint
#[derive(Serialize)]
pub struct MessageResponse {
    reply: String,
    sentiment: SentimentLabel,
    polarity: f64,
    strategy: &'static str,
}

#[derive(Serialize)]
pub struct SessionCreated {
    session_id: String,
}

#[derive(Serialize)]
pub struct MoodResponse {
    records: Vec<MoodRecord>,
    polarity: Vec<f64>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    lines: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error type for HTTP server
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] SessionStoreError),

    #[error("Failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(SessionStoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Render(_) => {
                error!(error = %self, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Build the router with all chat and API routes
pub fn router(state: AppState) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(new_chat))
        .route("/health", get(health))
        .route("/chat/:id", get(show_chat).post(submit_chat))
        .route("/api/sessions", post(api_create_session))
        .route("/api/sessions/:id/messages", post(api_post_message))
        .route("/api/sessions/:id/transcript", get(api_transcript))
        .route("/api/sessions/:id/mood", get(api_mood))
        .route("/api/sessions/:id/summary", get(api_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start HTTP server: {}", e))
}

/// Health check handler
async fn health(State(state): State<AppState>) -> Result<String, ApiError> {
    let active = state.store.list_sessions().await?.len();
    Ok(format!("mindchat is running (active_sessions={})", active))
}

/// Start a fresh session and send the browser to its page
async fn new_chat() -> Redirect {
    Redirect::to(&format!("/chat/{}", Uuid::new_v4()))
}

async fn show_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ChatQuery>,
) -> Result<Html<String>, ApiError> {
    // Viewing a page must not create the session; the first message does
    let chat = match state.store.get_session(&id).await {
        Ok(session) => session.chat,
        Err(SessionStoreError::NotFound(_)) => ChatSession::new(),
        Err(e) => return Err(e.into()),
    };
    let html = state.renderer.render_chat(
        &id,
        &chat,
        PageOptions {
            strategy: None,
            show_summary: query.summary,
        },
    )?;
    Ok(Html(html))
}

async fn submit_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ChatForm>,
) -> Result<Html<String>, ApiError> {
    let submission = state.submit(&id, &form.message).await?;
    let html = state.renderer.render_chat(
        &submission.session.id,
        &submission.session.chat,
        PageOptions {
            strategy: submission.outcome.as_ref().map(|outcome| outcome.strategy),
            show_summary: false,
        },
    )?;
    Ok(Html(html))
}

async fn api_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let session = state.store.create_session(Uuid::new_v4().to_string()).await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id: session.id,
        }),
    ))
}

async fn api_post_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let submission = state.submit(&id, &payload.message).await?;
    let outcome = submission
        .outcome
        .ok_or_else(|| ApiError::BadRequest("Message must not be empty".to_string()))?;

    Ok(Json(MessageResponse {
        reply: outcome.reply,
        sentiment: outcome.sentiment.label,
        polarity: outcome.sentiment.polarity,
        strategy: outcome.strategy,
    }))
}

async fn api_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Turn>>, ApiError> {
    let session = state.store.get_session(&id).await?;
    Ok(Json(session.chat.all_turns().to_vec()))
}

async fn api_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MoodResponse>, ApiError> {
    let session = state.store.get_session(&id).await?;
    Ok(Json(MoodResponse {
        polarity: session.chat.polarity_series(),
        records: session.chat.all_mood_records().to_vec(),
    }))
}

async fn api_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let session = state.store.get_session(&id).await?;
    Ok(Json(SummaryResponse {
        lines: session.chat.summary_lines(),
    }))
}
