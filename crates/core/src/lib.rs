//! `entids-core` — id projection and lookup over entity sequences.
//!
//! This crate contains **pure** helpers (no infrastructure concerns).

pub mod entity;
pub mod ids;

pub use entity::Identified;
pub use ids::{contains_id, find_by_id, project_ids, EntityIdExt};
