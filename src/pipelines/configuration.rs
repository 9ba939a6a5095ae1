//! Deferred uniform values shared by every program drawn in a frame.
//!
//! The scene collects camera and light uniforms into a
//! [`ShaderConfiguration`] before any mesh is drawn. The
//! [`ShaderManager`](crate::pipelines::manager::ShaderManager) later loads the
//! whole configuration into each program the first time that program is used
//! in the frame.

use std::{collections::HashMap, rc::Rc};

use cgmath::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

use crate::{
    data_structures::material::{MATERIAL_TEXTURE_UNIT_BASE, Material},
    pipelines::program::ShaderProgram,
};

/// Named uniform values grouped by type. Setting a name twice keeps the last value.
#[derive(Clone, Debug, Default)]
pub struct ShaderConfiguration {
    bools: HashMap<String, bool>,
    ints: HashMap<String, i32>,
    uints: HashMap<String, u32>,
    floats: HashMap<String, f32>,
    vec2s: HashMap<String, Vector2<f32>>,
    vec3s: HashMap<String, Vector3<f32>>,
    vec4s: HashMap<String, Vector4<f32>>,
    mat3s: HashMap<String, Matrix3<f32>>,
    mat4s: HashMap<String, Matrix4<f32>>,
    materials: HashMap<String, Rc<Material>>,
}

impl ShaderConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, name: impl Into<String>, value: bool) {
        self.bools.insert(name.into(), value);
    }

    pub fn set_int(&mut self, name: impl Into<String>, value: i32) {
        self.ints.insert(name.into(), value);
    }

    pub fn set_uint(&mut self, name: impl Into<String>, value: u32) {
        self.uints.insert(name.into(), value);
    }

    pub fn set_float(&mut self, name: impl Into<String>, value: f32) {
        self.floats.insert(name.into(), value);
    }

    pub fn set_vec2(&mut self, name: impl Into<String>, value: Vector2<f32>) {
        self.vec2s.insert(name.into(), value);
    }

    pub fn set_vec3(&mut self, name: impl Into<String>, value: Vector3<f32>) {
        self.vec3s.insert(name.into(), value);
    }

    pub fn set_vec4(&mut self, name: impl Into<String>, value: Vector4<f32>) {
        self.vec4s.insert(name.into(), value);
    }

    pub fn set_mat3(&mut self, name: impl Into<String>, value: Matrix3<f32>) {
        self.mat3s.insert(name.into(), value);
    }

    pub fn set_mat4(&mut self, name: impl Into<String>, value: Matrix4<f32>) {
        self.mat4s.insert(name.into(), value);
    }

    pub fn set_material(&mut self, name: impl Into<String>, material: Rc<Material>) {
        self.materials.insert(name.into(), material);
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        self.ints.get(name).copied()
    }

    pub fn get_uint(&self, name: &str) -> Option<u32> {
        self.uints.get(name).copied()
    }

    pub fn get_float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn get_vec2(&self, name: &str) -> Option<Vector2<f32>> {
        self.vec2s.get(name).copied()
    }

    pub fn get_vec3(&self, name: &str) -> Option<Vector3<f32>> {
        self.vec3s.get(name).copied()
    }

    pub fn get_vec4(&self, name: &str) -> Option<Vector4<f32>> {
        self.vec4s.get(name).copied()
    }

    pub fn get_mat3(&self, name: &str) -> Option<Matrix3<f32>> {
        self.mat3s.get(name).copied()
    }

    pub fn get_mat4(&self, name: &str) -> Option<Matrix4<f32>> {
        self.mat4s.get(name).copied()
    }

    pub fn get_material(&self, name: &str) -> Option<&Rc<Material>> {
        self.materials.get(name)
    }

    /// Total number of stored values across all types.
    pub fn len(&self) -> usize {
        self.bools.len()
            + self.ints.len()
            + self.uints.len()
            + self.floats.len()
            + self.vec2s.len()
            + self.vec3s.len()
            + self.vec4s.len()
            + self.mat3s.len()
            + self.mat4s.len()
            + self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /**
     * Sets every stored value on `program`.
     *
     * The type groups are independent and pushed in no particular order.
     * Materials expand into their per-channel uniforms and bind their
     * textures starting at [`MATERIAL_TEXTURE_UNIT_BASE`].
     */
    pub fn load_into(&self, program: &dyn ShaderProgram) {
        for (name, value) in &self.bools {
            program.set_bool(name, *value);
        }
        for (name, value) in &self.ints {
            program.set_int(name, *value);
        }
        for (name, value) in &self.uints {
            program.set_uint(name, *value);
        }
        for (name, value) in &self.floats {
            program.set_float(name, *value);
        }
        for (name, value) in &self.mat4s {
            program.set_mat4(name, *value);
        }
        for (name, value) in &self.mat3s {
            program.set_mat3(name, *value);
        }
        for (name, value) in &self.vec4s {
            program.set_vec4(name, *value);
        }
        for (name, value) in &self.vec3s {
            program.set_vec3(name, *value);
        }
        for (name, value) in &self.vec2s {
            program.set_vec2(name, *value);
        }
        for (name, material) in &self.materials {
            material.push(program, name, MATERIAL_TEXTURE_UNIT_BASE);
        }
    }
}
