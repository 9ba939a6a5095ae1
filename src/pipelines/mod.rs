//! Shader programs and the uniforms pushed into them.
//!
//! - `program` defines the seams to the graphics API (programs, framebuffers)
//! - `configuration` collects uniforms shared by every program in a frame
//! - `manager` registers programs and loads the configuration once per frame

pub mod configuration;
pub mod manager;
pub mod program;
