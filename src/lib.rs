//! prism-ngin
//!
//! The scene-level core of a multi-pass PBR renderer. A scene holds meshes,
//! lights and cameras placed by nodes. Drawing it routes every mesh to the
//! framebuffer of its shader program, pushes camera and light uniforms into
//! each program once per frame and pushes per-mesh transforms and materials.
//! The graphics API itself stays behind small traits so that hosts can plug in
//! their own backend.
//!
//! High-level modules
//! - `camera`: free-look camera and perspective projection
//! - `config`: TOML-backed engine settings
//! - `data_structures`: scene graph, nodes, meshes, materials and lights
//! - `error`: errors raised while driving shader programs
//! - `input`: keyboard state consumed by the scene
//! - `logging`: logger setup for host applications
//! - `pipelines`: shader program seams, uniform configuration and the registry
//! - `render`: framebuffer routing and per-frame statistics
//! - `resources`: mesh data and texture loading seams
//!

pub mod camera;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod input;
pub mod logging;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
