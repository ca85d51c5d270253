// SPDX-License-Identifier: MIT

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::fs;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::error::AgentGraphError;
use crate::graph::{StructureLoader, TreeBuilder};
use crate::render::draw_graph;

pub async fn serve(port: u16) -> Result<(), AgentGraphError> {
    let _ = tracing_subscriber::fmt::try_init();

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/structure", get(get_structure))
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/{id}", get(get_graph_image))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Structure file served by /api/structure. Override with STRUCTURE_FILE.
fn structure_file() -> PathBuf {
    PathBuf::from(
        std::env::var("STRUCTURE_FILE").unwrap_or_else(|_| "agent_structure.json".to_string()),
    )
}

/// Directory for generated images. Override with GRAPH_OUTPUT_DIR.
fn output_dir() -> PathBuf {
    PathBuf::from(std::env::var("GRAPH_OUTPUT_DIR").unwrap_or_else(|_| "generated".to_string()))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_structure() -> Json<Value> {
    let path = structure_file();
    if !path.exists() {
        return Json(json!({"error": "Structure file not found"}));
    }

    match fs::read_to_string(&path).await {
        Ok(content) => match serde_json::from_str::<Value>(&content) {
            Ok(structure) => Json(structure),
            Err(e) => Json(json!({"error": format!("Invalid JSON: {}", e)})),
        },
        Err(e) => Json(json!({"error": e.to_string()})),
    }
}

async fn create_graph(Json(payload): Json<Value>) -> Json<Value> {
    let spec = match serde_json::from_value(payload) {
        Ok(spec) => spec,
        Err(e) => return Json(json!({"error": format!("Invalid structure: {}", e)})),
    };

    let tree = match TreeBuilder::new().build(&spec) {
        Ok(tree) => tree,
        Err(e) => return Json(json!({"error": format!("Failed to build agent tree: {}", e)})),
    };

    let dir = output_dir();
    if let Err(e) = fs::create_dir_all(&dir).await {
        return Json(json!({"error": e.to_string()}));
    }

    let id = Uuid::new_v4();
    let stem = dir.join(id.to_string());

    match draw_graph(&tree, &stem.to_string_lossy(), "png").await {
        Ok(file) => {
            log::info!("Generated graph '{}' at {}", tree.name, file.display());
            Json(json!({
                "id": id.to_string(),
                "name": tree.name,
                "nodes": tree.node_count(),
                "depth": tree.depth(),
                "file": file.to_string_lossy(),
                "generated_at": Utc::now().to_rfc3339(),
            }))
        }
        Err(e) => Json(json!({"error": format!("Failed to render graph: {}", e)})),
    }
}

async fn get_graph_image(Path(id): Path<String>) -> Response {
    let id = match Uuid::parse_str(&id) {
        Ok(id) => id,
        Err(_) => return Json(json!({"error": "Invalid graph id"})).into_response(),
    };

    let path = output_dir().join(format!("{}.png", id));
    if !path.exists() {
        return Json(json!({"error": "Graph image not found"})).into_response();
    }

    match fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => Json(json!({"error": e.to_string()})).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_graph_rejects_invalid_structure() {
        let Json(body) = create_graph(Json(json!({"instructions": "no name"}))).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("name"), "unexpected error: {}", error);
    }

    #[tokio::test]
    async fn test_get_graph_image_rejects_bad_id() {
        let response = get_graph_image(Path("../etc/passwd".to_string())).await;
        assert!(response.status().is_success());
        // Body is the JSON error object, not file contents
    }
}
