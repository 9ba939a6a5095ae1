//! Interfaces to the GPU-side shader programs and render targets.
//!
//! Compilation, linking and framebuffer attachment setup happen outside of
//! this crate. The orchestration layer only needs to activate a program, set
//! named uniforms on it and bind a render target, which is what these traits
//! expose.

use std::fmt;

use cgmath::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Identifier of a linked shader program (the GL program name or equivalent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderId(pub u32);

impl fmt::Display for ShaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A linked shader program that accepts uniforms by name.
///
/// Setting a uniform the program does not declare must be a silent no-op,
/// matching the behaviour of the underlying graphics APIs.
pub trait ShaderProgram {
    fn id(&self) -> ShaderId;

    fn debug_name(&self) -> &str;

    /// Makes this program the active one on the GPU.
    fn activate(&self);

    fn set_bool(&self, name: &str, value: bool);

    fn set_int(&self, name: &str, value: i32);

    fn set_uint(&self, name: &str, value: u32);

    fn set_float(&self, name: &str, value: f32);

    fn set_vec2(&self, name: &str, value: Vector2<f32>);

    fn set_vec3(&self, name: &str, value: Vector3<f32>);

    fn set_vec4(&self, name: &str, value: Vector4<f32>);

    fn set_mat3(&self, name: &str, value: Matrix3<f32>);

    fn set_mat4(&self, name: &str, value: Matrix4<f32>);
}

/// An output render target.
pub trait Framebuffer {
    /// Binds the framebuffer as the active render target.
    fn bind(&self);

    fn debug_name(&self) -> &str;
}
