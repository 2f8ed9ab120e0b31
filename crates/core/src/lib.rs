#![deny(unsafe_code)]
//! Core types for the poster engine.
//!
//! Provides the `Xorshift64` random stream, color types (`Srgb`, `Hsv`),
//! HSV `Palette` sampling, blob/heart `Outline` geometry, the immutable
//! `PosterConfig`, and the seeded layer planner that ties them together.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod palette;
pub mod planner;
pub mod prng;

pub use color::{Hsv, Srgb};
pub use config::{random_seed, PosterConfig, ShapeKind, Style};
pub use error::PosterError;
pub use geometry::{generate_outline, Outline};
pub use layer::Layer;
pub use palette::{generate_palette, Palette, PaletteMode};
pub use planner::{plan_layers, plan_layers_with};
pub use prng::Xorshift64;
