use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::types::Token;

pub async fn health(Extension(shared_state): Extension<Arc<Mutex<Option<Token>>>>) -> Json<Value> {
    let logged_in = shared_state.lock().await.is_some();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "token_received": logged_in
    }))
}
