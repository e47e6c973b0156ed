//! Model metadata documents for protoview.
//!
//! This crate holds the read-only documents the server hands out:
//!
//! - [`ModelInfo`] and [`TextureDetails`]: mesh and texture description
//! - [`ModelGeometry`] and [`ModelScale`]: scale and topology summary
//!
//! Both documents describe the same asset (the "Prototype Cube") and are
//! rebuilt from constants on every call, so two calls always compare equal.
//!
//! # Example
//!
//! ```rust
//! use protoview_core::ModelInfo;
//!
//! let info = ModelInfo::prototype_cube();
//! assert_eq!(info.vertex_count, 24);
//! assert_eq!(info.texture_details.resolution, "2048x2048");
//! ```

use serde::{Deserialize, Serialize};

/// Identifies this implementation in the `source` field of every document.
pub const SOURCE: &str = "Rust Backend (axum)";

/// Display name of the served asset.
pub const MODEL_NAME: &str = "Prototype Cube";

/// Vertex count of the cube mesh (4 per face, unshared normals).
pub const VERTEX_COUNT: u32 = 24;

/// Triangle count of the cube mesh.
pub const FACE_COUNT: u32 = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Model Info
// ─────────────────────────────────────────────────────────────────────────────

/// Texture applied to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureDetails {
    pub texture_name: String,
    pub resolution: String,
    pub format: String,
    pub color_space: String,
}

impl TextureDetails {
    /// The texture shipped with the prototype cube.
    pub fn cube_texture() -> Self {
        Self {
            texture_name: "cube_texture.jpg".into(),
            resolution: "2048x2048".into(),
            format: "JPG".into(),
            color_space: "sRGB".into(),
        }
    }
}

/// Mesh metadata returned by the model info endpoint.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub vertex_count: u32,
    pub texture_details: TextureDetails,
    pub source: String,
}

impl ModelInfo {
    /// Builds the fixed document for the prototype cube.
    pub fn prototype_cube() -> Self {
        Self {
            model_name: MODEL_NAME.into(),
            vertex_count: VERTEX_COUNT,
            texture_details: TextureDetails::cube_texture(),
            source: SOURCE.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Model Geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Per-axis scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ModelScale {
    pub fn unit() -> Self {
        Self { x: 1.0, y: 1.0, z: 1.0 }
    }
}

/// Scale and topology summary returned by the geometry endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGeometry {
    pub model_scale: ModelScale,
    pub face_count: u32,
    pub model_type: String,
    pub creation_date: String,
    pub source: String,
}

impl ModelGeometry {
    /// Builds the fixed geometry summary for the prototype cube.
    pub fn prototype_cube() -> Self {
        Self {
            model_scale: ModelScale::unit(),
            face_count: FACE_COUNT,
            model_type: "Primitive".into(),
            creation_date: "2025-03-21".into(),
            source: SOURCE.into(),
        }
    }
}
