//! Renderer-independent model of a small solar-system orrery: the static
//! body configuration table, circular orbit-path sampling, and the
//! frame-rate-normalized angle stepping that drives revolution and axial
//! spin. The Bevy viewer in `crates/orrery_viewer` consumes all of it.

pub mod body;
pub mod constants;
pub mod motion;
pub mod orbit_path;

pub use body::{BodyConfig, Ring};
