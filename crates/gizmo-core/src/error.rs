//! Error types for gizmo construction and configuration.

/// Errors raised while building or configuring a gizmo.
#[derive(Debug, thiserror::Error)]
pub enum GizmoError {
    #[error("cannot assemble renderable `{label}`: vertex array is empty")]
    EmptyGeometry { label: String },

    #[error("invalid gizmo config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse gizmo config: {0}")]
    Config(#[from] serde_json::Error),
}
