//! Scene logic for two OpenGL sketches.
//!
//! Everything in this crate is GPU-agnostic: cameras, drag interaction, the particle arena, the
//! face expression and the globe surface all live here so that they can be exercised without a
//! window. The windowed programs themselves live in the `sketchbook-desktop` crate and only turn
//! this state into draw calls.

pub mod camera;
pub mod config;
pub mod cube;
pub mod face;
pub mod globe;
pub mod input;
pub mod light;
pub mod linear;
pub mod particle;
pub mod projection;
pub mod time;

pub use camera::Camera;
pub use config::{Config, ConfigError, Overrides};
pub use face::{AudioCue, Expression, FaceScene};
pub use globe::GlobeScene;
pub use input::{DragState, DragTarget};
pub use light::{Light, LightMover};
pub use particle::{Particle, ParticlePool};
pub use projection::Viewport;
pub use time::{Monotonic, Time};
