use crate::models::api::{ ChatRequest, ChatResponse };
use crate::relay::ChatRelay;
use super::ui::{ UiConfig, INDEX_HTML };
use std::error::Error;
use std::sync::Arc;
use axum::{
    routing::{ get, post },
    Router,
    extract::State,
    response::{ Html, IntoResponse },
    Json,
};
use tokio::net::TcpListener;
use tower_http::cors::{ Any, CorsLayer };
use log::info;

#[derive(Clone)]
struct AppState {
    relay: Arc<dyn ChatRelay>,
    ui: Arc<UiConfig>,
}

pub fn router(relay: Arc<dyn ChatRelay>, ui: UiConfig) -> Router {
    let app_state = AppState {
        relay,
        ui: Arc::new(ui),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/api/ui", get(ui_config_handler))
        .route("/api/predict", post(predict_handler))
        .layer(cors)
        .with_state(app_state)
}

pub async fn serve(
    listener: TcpListener,
    relay: Arc<dyn ChatRelay>,
    ui: UiConfig
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("Chat UI listening on: http://{}", addr);
    axum::serve(listener, router(relay, ui).into_make_service()).await?;
    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn ui_config_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ui.as_ref().clone())
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>
) -> Json<ChatResponse> {
    let answer = state.relay.predict(&req.message, &req.history, &req.about_me).await;
    Json(ChatResponse { answer })
}
