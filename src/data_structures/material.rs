//! PBR materials and how they are handed to shaders.
//!
//! A [`Material`] has six fixed channels. Each channel is a
//! [`MaterialProperty`]: a default value that is always pushed, plus an
//! optional texture that overrides it. Shaders see every channel as
//!
//! ```glsl
//! struct Property { <T> default; bool useTexture; sampler2D texture; };
//! ```
//!
//! and branch on `useTexture`. Channel textures are bound to
//! `base + offset` where the offset follows the declaration order of
//! [`MaterialChannel`]; shaders rely on that order.

use std::{fmt, path::Path, rc::Rc};

use anyhow::Context;
use cgmath::{Vector2, Vector3, Vector4, Zero};

use crate::{
    pipelines::program::ShaderProgram,
    resources::texture::{Texture, TextureLoader, compose_texture_path},
};

/// Texture unit the first material channel is bound to.
pub const MATERIAL_TEXTURE_UNIT_BASE: u32 = 0;

/// The fixed material channels, in binding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialChannel {
    Albedo,
    Normal,
    Roughness,
    Metallic,
    AmbientOcclusion,
    Height,
}

impl MaterialChannel {
    pub const ALL: [MaterialChannel; 6] = [
        MaterialChannel::Albedo,
        MaterialChannel::Normal,
        MaterialChannel::Roughness,
        MaterialChannel::Metallic,
        MaterialChannel::AmbientOcclusion,
        MaterialChannel::Height,
    ];

    /// Name used both for the uniform struct member and the texture file suffix.
    pub fn token(self) -> &'static str {
        match self {
            MaterialChannel::Albedo => "albedo",
            MaterialChannel::Normal => "normal",
            MaterialChannel::Roughness => "roughness",
            MaterialChannel::Metallic => "metallic",
            MaterialChannel::AmbientOcclusion => "ao",
            MaterialChannel::Height => "height",
        }
    }

    pub fn unit_offset(self) -> u32 {
        match self {
            MaterialChannel::Albedo => 0,
            MaterialChannel::Normal => 1,
            MaterialChannel::Roughness => 2,
            MaterialChannel::Metallic => 3,
            MaterialChannel::AmbientOcclusion => 4,
            MaterialChannel::Height => 5,
        }
    }
}

/// A value type a material channel can hold.
pub trait PropertyValue: Copy + fmt::Debug {
    fn zero() -> Self;

    fn push(&self, program: &dyn ShaderProgram, name: &str);
}

impl PropertyValue for f32 {
    fn zero() -> Self {
        0.0
    }

    fn push(&self, program: &dyn ShaderProgram, name: &str) {
        program.set_float(name, *self);
    }
}

impl PropertyValue for Vector2<f32> {
    fn zero() -> Self {
        Zero::zero()
    }

    fn push(&self, program: &dyn ShaderProgram, name: &str) {
        program.set_vec2(name, *self);
    }
}

impl PropertyValue for Vector3<f32> {
    fn zero() -> Self {
        Zero::zero()
    }

    fn push(&self, program: &dyn ShaderProgram, name: &str) {
        program.set_vec3(name, *self);
    }
}

impl PropertyValue for Vector4<f32> {
    fn zero() -> Self {
        Zero::zero()
    }

    fn push(&self, program: &dyn ShaderProgram, name: &str) {
        program.set_vec4(name, *self);
    }
}

/// One material channel: a default value and an optional texture override.
#[derive(Clone, Debug)]
pub struct MaterialProperty<T: PropertyValue> {
    pub default_value: T,
    pub texture: Option<Rc<dyn Texture>>,
}

impl<T: PropertyValue> MaterialProperty<T> {
    pub fn new() -> Self {
        Self {
            default_value: T::zero(),
            texture: None,
        }
    }

    pub fn with_default(default_value: T) -> Self {
        Self {
            default_value,
            texture: None,
        }
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    pub fn set_texture(&mut self, texture: Rc<dyn Texture>) {
        self.texture = Some(texture);
    }

    pub fn clear_texture(&mut self) {
        self.texture = None;
    }

    /// Loads `<library><name><separator><token>.<extension>` through `loader`.
    pub fn load_texture(
        &mut self,
        loader: &dyn TextureLoader,
        library: Option<&Path>,
        name: &str,
        separator: &str,
        token: &str,
        extension: &str,
    ) -> anyhow::Result<()> {
        let path = compose_texture_path(library, name, separator, token, extension);
        let texture = loader
            .load(&path)
            .with_context(|| format!("Failed to load texture {}", path.display()))?;
        self.texture = Some(texture);
        Ok(())
    }

    /// Binds the texture to `unit`, does nothing without a texture.
    pub fn bind(&self, unit: u32) {
        if let Some(texture) = &self.texture {
            texture.bind(unit);
        }
    }

    /**
     * Pushes the property as the uniform struct `name`.
     *
     * `name.default` is always set. With a texture, `name.useTexture` is
     * `true`, the sampler `name.texture` points at `unit` and the texture is
     * bound there; without one `name.useTexture` is `false` and nothing is
     * bound.
     */
    pub fn push(&self, program: &dyn ShaderProgram, name: &str, unit: u32) {
        self.default_value
            .push(program, &format!("{name}.default"));
        let use_texture = format!("{name}.useTexture");
        match &self.texture {
            Some(texture) => {
                program.set_bool(&use_texture, true);
                program.set_int(&format!("{name}.texture"), unit as i32);
                texture.bind(unit);
            }
            None => program.set_bool(&use_texture, false),
        }
    }
}

impl<T: PropertyValue> Default for MaterialProperty<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Physically based material with six fixed channels.
#[derive(Clone, Debug)]
pub struct Material {
    pub albedo: MaterialProperty<Vector3<f32>>,
    pub normal: MaterialProperty<Vector3<f32>>,
    pub roughness: MaterialProperty<f32>,
    pub metallic: MaterialProperty<f32>,
    pub ao: MaterialProperty<f32>,
    pub height: MaterialProperty<f32>,
    pub height_scale: f32,
}

impl Material {
    /// Untextured material: black albedo, flat normal, no occlusion.
    pub fn new() -> Self {
        Self {
            albedo: MaterialProperty::new(),
            normal: MaterialProperty::with_default(Vector3::new(0.0, 0.0, 1.0)),
            roughness: MaterialProperty::with_default(0.0),
            metallic: MaterialProperty::with_default(0.0),
            ao: MaterialProperty::with_default(1.0),
            height: MaterialProperty::with_default(1.0),
            height_scale: 1.0,
        }
    }

    pub fn with_albedo(mut self, albedo: Vector3<f32>) -> Self {
        self.albedo.default_value = albedo;
        self
    }

    pub fn has_texture(&self, channel: MaterialChannel) -> bool {
        match channel {
            MaterialChannel::Albedo => self.albedo.has_texture(),
            MaterialChannel::Normal => self.normal.has_texture(),
            MaterialChannel::Roughness => self.roughness.has_texture(),
            MaterialChannel::Metallic => self.metallic.has_texture(),
            MaterialChannel::AmbientOcclusion => self.ao.has_texture(),
            MaterialChannel::Height => self.height.has_texture(),
        }
    }

    pub fn set_texture(&mut self, channel: MaterialChannel, texture: Rc<dyn Texture>) {
        match channel {
            MaterialChannel::Albedo => self.albedo.set_texture(texture),
            MaterialChannel::Normal => self.normal.set_texture(texture),
            MaterialChannel::Roughness => self.roughness.set_texture(texture),
            MaterialChannel::Metallic => self.metallic.set_texture(texture),
            MaterialChannel::AmbientOcclusion => self.ao.set_texture(texture),
            MaterialChannel::Height => self.height.set_texture(texture),
        }
    }

    /**
     * Loads one texture per channel from
     * `<library><name><separator><token>.<extension>`.
     *
     * Stops at the first channel the loader fails on; channels loaded before
     * keep their new texture.
     */
    pub fn load_textures(
        &mut self,
        loader: &dyn TextureLoader,
        library: Option<&Path>,
        name: &str,
        separator: &str,
        extension: &str,
    ) -> anyhow::Result<()> {
        for channel in MaterialChannel::ALL {
            let token = channel.token();
            match channel {
                MaterialChannel::Albedo => self
                    .albedo
                    .load_texture(loader, library, name, separator, token, extension),
                MaterialChannel::Normal => self
                    .normal
                    .load_texture(loader, library, name, separator, token, extension),
                MaterialChannel::Roughness => self
                    .roughness
                    .load_texture(loader, library, name, separator, token, extension),
                MaterialChannel::Metallic => self
                    .metallic
                    .load_texture(loader, library, name, separator, token, extension),
                MaterialChannel::AmbientOcclusion => self
                    .ao
                    .load_texture(loader, library, name, separator, token, extension),
                MaterialChannel::Height => self
                    .height
                    .load_texture(loader, library, name, separator, token, extension),
            }?;
        }
        Ok(())
    }

    /// Binds every present channel texture to `base + channel offset`.
    pub fn bind_textures(&self, base: u32) {
        self.albedo.bind(base + MaterialChannel::Albedo.unit_offset());
        self.normal.bind(base + MaterialChannel::Normal.unit_offset());
        self.roughness
            .bind(base + MaterialChannel::Roughness.unit_offset());
        self.metallic
            .bind(base + MaterialChannel::Metallic.unit_offset());
        self.ao
            .bind(base + MaterialChannel::AmbientOcclusion.unit_offset());
        self.height.bind(base + MaterialChannel::Height.unit_offset());
    }

    /// Pushes all channels in binding order, then `name.height_scale`.
    pub fn push(&self, program: &dyn ShaderProgram, name: &str, base: u32) {
        for channel in MaterialChannel::ALL {
            let uniform = format!("{name}.{}", channel.token());
            let unit = base + channel.unit_offset();
            match channel {
                MaterialChannel::Albedo => self.albedo.push(program, &uniform, unit),
                MaterialChannel::Normal => self.normal.push(program, &uniform, unit),
                MaterialChannel::Roughness => self.roughness.push(program, &uniform, unit),
                MaterialChannel::Metallic => self.metallic.push(program, &uniform, unit),
                MaterialChannel::AmbientOcclusion => self.ao.push(program, &uniform, unit),
                MaterialChannel::Height => self.height.push(program, &uniform, unit),
            }
        }
        program.set_float(&format!("{name}.height_scale"), self.height_scale);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}
