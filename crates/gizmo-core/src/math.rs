//! Math types shared across the gizmo crates.
//!
//! Everything is `glam`; re-exported here so downstream crates agree on one version.

pub use glam::{Mat4, Quat, Vec3, Vec4};
