//! Servidor web Axum com WebSocket para visualização da análise de orações
//! em tempo real

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use clause_core::{
    corpus::demo_texts,
    pipeline::{ClausePipeline, DocumentAnalysis, PipelineEvent},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: ClausePipeline,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

/// Mensagem WebSocket recebida do cliente
#[derive(Deserialize)]
struct WsRequest {
    text: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let pipeline = ClausePipeline::new();
    let state = Arc::new(AppState { pipeline });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/ws", get(ws_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("🚀 Servidor de análise de orações em http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Análise completa via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response();
    }

    let analysis: DocumentAnalysis = state.pipeline.analyze(&req.text);
    Json(analysis).into_response()
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(domain, text)| {
            serde_json::json!({
                "domain": domain,
                "text": text
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa pipeline e envia eventos em
/// tempo real
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Tenta parsear como JSON {text}; senão usa como texto puro
                let text_str = match serde_json::from_str::<WsRequest>(&text) {
                    Ok(req) => req.text.trim().to_string(),
                    Err(_) => text.trim().to_string(),
                };

                if text_str.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} chars", text_str.len());

                // Roda o pipeline (síncrono) fora do runtime async
                let (tx_std, rx_std) = std::sync::mpsc::channel::<PipelineEvent>();
                let state_for_thread = Arc::clone(&state);
                let text_for_thread = text_str.clone();

                let handle = tokio::task::spawn_blocking(move || {
                    state_for_thread
                        .pipeline
                        .analyze_streaming(&text_for_thread, tx_std);
                });
                handle.await.ok();

                // Coleta os eventos numa Vec (o rx_std não é Send)
                let events: Vec<PipelineEvent> = rx_std.try_iter().collect();

                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pequena pausa para animação visual (passo a passo)
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
