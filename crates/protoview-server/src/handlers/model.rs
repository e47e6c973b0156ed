//! Model metadata handlers.

use axum::Json;
use protoview_core::{ModelGeometry, ModelInfo};

/// GET /python-model-info - Mesh and texture metadata for the prototype cube.
pub async fn info() -> Json<ModelInfo> {
    Json(ModelInfo::prototype_cube())
}

/// GET /model-geometry-info - Scale and topology summary.
pub async fn geometry() -> Json<ModelGeometry> {
    Json(ModelGeometry::prototype_cube())
}
