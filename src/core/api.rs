//! HTTP + WebSocket API for Mano
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /session/new - Create session
//! - GET /session/{id} - Conversation state
//! - POST /session/{id}/message - Send a message, get the reply
//! - DELETE /session/{id} - End session
//! - POST /analyze - Stateless analysis
//! - WS /ws/{id} - Live turn updates

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json, Response as HttpResponse},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, broadcast::error::RecvError, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::core::{JournalStore, MessageAnalyzer, Session};
use crate::error::ManoError;
use crate::types::{
    Analysis, ConversationStage, Emotion, MoodCheckIn, Response, ResponseStyle, Topic,
    TurnOutput,
};

/// Live update pushed to websocket subscribers after every turn
pub type TurnUpdate = TurnOutput;

/// One live conversation plus its update channel
#[derive(Debug)]
pub struct SessionEntry {
    pub session: Session,
    pub update_tx: broadcast::Sender<TurnUpdate>,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, SessionEntry>>,
    pub config: EngineConfig,
    /// Where check-ins are saved; None keeps the server stateless on disk
    pub journal: Option<JournalStore>,
}

/// Create new session response
#[derive(Debug, Serialize, Deserialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub stage: ConversationStage,
    pub primary_emotion: Emotion,
    pub context: String,
    pub intensity: u8,
    pub topics: Vec<Topic>,
    pub user_concerns: Vec<String>,
    pub mentioned_events: Vec<String>,
    pub response_style: ResponseStyle,
    pub turn_count: u32,
}

/// Send message request
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

/// Send message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub turn: u32,
    pub analysis: Analysis,
    pub response: Response,
    pub stage: ConversationStage,
    pub check_in: MoodCheckIn,
}

/// End session response
#[derive(Debug, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub session_id: String,
    pub turns: u32,
}

/// Stateless analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub history: Vec<String>,
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Error body returned with every non-2xx status
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ManoError {
    fn into_response(self) -> HttpResponse {
        let status = match &self {
            ManoError::Validation(_) => StatusCode::BAD_REQUEST,
            ManoError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ManoError::Io(_) | ManoError::Json(_) | ManoError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Create the API router
pub fn create_router(config: EngineConfig, journal: Option<JournalStore>) -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
        config,
        journal,
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(end_session))
        .route("/session/:id/message", post(send_message))
        .route("/analyze", post(analyze))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Create new session
async fn create_session(State(state): State<Arc<AppState>>) -> Json<NewSessionResponse> {
    let session_id = Uuid::new_v4().to_string();
    let (update_tx, _) = broadcast::channel(100);
    let entry = SessionEntry {
        session: Session::new(&state.config),
        update_tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), entry);
    info!(session = %session_id, active = sessions.len(), "Session created");

    Json(NewSessionResponse {
        websocket_url: format!("/ws/{}", session_id),
        session_id,
    })
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, ManoError> {
    let sessions = state.sessions.read().await;
    let entry = sessions
        .get(&id)
        .ok_or_else(|| ManoError::SessionNotFound(id.clone()))?;
    let conversation = entry.session.state();

    Ok(Json(SessionStatusResponse {
        session_id: id,
        stage: conversation.conversation_stage,
        primary_emotion: conversation.primary_emotion,
        context: conversation.context.clone(),
        intensity: conversation.intensity,
        topics: conversation.topics.clone(),
        user_concerns: conversation.user_concerns.clone(),
        mentioned_events: conversation.mentioned_events.clone(),
        response_style: conversation.response_style,
        turn_count: entry.session.turn_count(),
    }))
}

/// Run one conversation turn
async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, ManoError> {
    if req.text.trim().is_empty() {
        return Err(ManoError::Validation("message text is empty".to_string()));
    }

    let outcome = {
        let mut sessions = state.sessions.write().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| ManoError::SessionNotFound(id.clone()))?;
        let outcome = entry.session.respond(&req.text);
        let update = TurnOutput::new(outcome.turn, &outcome.analysis, &outcome.state, &outcome.response);
        // No subscribers is fine
        let _ = entry.update_tx.send(update);
        outcome
    };

    if let Some(journal) = state.journal.clone() {
        let check_in = outcome.check_in.clone();
        match tokio::task::spawn_blocking(move || journal.append(check_in)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!(error = %e, "Failed to save check-in"),
            Err(e) => warn!(error = %e, "Check-in save task failed"),
        }
    }

    if state.config.typing_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.typing_delay_ms)).await;
    }

    Ok(Json(MessageResponse {
        turn: outcome.turn,
        stage: outcome.state.conversation_stage,
        analysis: outcome.analysis,
        response: outcome.response,
        check_in: outcome.check_in,
    }))
}

/// End and remove a session
async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EndSessionResponse>, ManoError> {
    let mut sessions = state.sessions.write().await;
    let mut entry = sessions
        .remove(&id)
        .ok_or_else(|| ManoError::SessionNotFound(id.clone()))?;
    let turns = entry.session.turn_count();
    entry.session.end();
    Ok(Json(EndSessionResponse { session_id: id, turns }))
}

/// Analyze text without touching any session
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<Analysis> {
    let analyzer = MessageAnalyzer::with_window(state.config.history_window);
    Json(analyzer.analyze(&req.text, &req.history))
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, ManoError> {
    let sessions = state.sessions.read().await;
    let entry = sessions
        .get(&id)
        .ok_or_else(|| ManoError::SessionNotFound(id.clone()))?;
    let rx = entry.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Forward turn updates until either side goes away
async fn handle_websocket(socket: WebSocket, mut rx: broadcast::Receiver<TurnUpdate>) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        loop {
            let update = match rx.recv().await {
                Ok(update) => update,
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Websocket subscriber lagging");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };
            let json = serde_json::to_string(&update).unwrap_or_default();
            if sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            if let Message::Close(_) = message {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    config: EngineConfig,
    journal: Option<JournalStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(config, journal);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "API listening");
    println!("Mano API running on {}", addr);
    println!("  POST   /session/new         - Create session");
    println!("  GET    /session/:id         - Conversation state");
    println!("  POST   /session/:id/message - Send message");
    println!("  DELETE /session/:id         - End session");
    println!("  POST   /analyze             - Stateless analysis");
    println!("  WS     /ws/:id              - Live turn updates");
    println!("  GET    /health              - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
