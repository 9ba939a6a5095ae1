//! Engine data structures: nodes, transforms, materials, meshes and lights.
//!
//! This module contains the core data types for scene representation:
//!
//! - `id` hands out node identities
//! - `transform` holds a node's position and rotation plus matrix helpers
//! - `scene_node` places a shared object in the scene
//! - `material` describes PBR surfaces and how they reach a shader
//! - `mesh` pairs uploaded geometry with its material and program
//! - `light` contains point and directional lights
//! - `scene_graph` ties it all together and drives the per-frame draw

use std::{cell::RefCell, rc::Rc};

pub mod id;
pub mod light;
pub mod material;
pub mod mesh;
pub mod scene_graph;
pub mod scene_node;
pub mod transform;

/// Objects placed in a scene are shared between nodes and the host.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
