pub mod math;
pub mod collision;
pub mod components;
pub mod config;
pub mod error;

// Re-exports
pub use collision::{Collider, Ray, Sphere, AABB};
pub use components::{Locatable, Transform};
pub use config::GizmoConfig;
pub use error::GizmoError;
