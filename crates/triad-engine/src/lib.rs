//! Triad engine crate.
//!
//! A small canvas-style 2D drawing surface: callers record shapes into a
//! [`scene::DrawList`] under a transform stack, and [`render::render`]
//! rasterizes the stream into a [`render::Pixmap`] on the CPU.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
