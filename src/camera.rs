//! Free-look camera and perspective projection.
//!
//! The camera keeps an orthonormal basis `u, v, w` where `w` points backwards
//! (from the target towards the eye). Yaw and pitch are tracked in degrees
//! and rebuild `w` whenever the camera rotates.

use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};

use crate::config::CameraConfig;

#[derive(Clone, Debug)]
pub struct Camera {
    position: Vector3<f32>,
    up: Vector3<f32>,
    w: Vector3<f32>,
    yaw: Deg<f32>,
    pitch: Deg<f32>,
    pub translation_sensitivity: f32,
    pub rotation_sensitivity: f32,
    pub pitch_limit: Deg<f32>,
}

impl Camera {
    /// Camera at `position` looking at `target` with default sensitivities.
    pub fn new(position: Vector3<f32>, up: Vector3<f32>, target: Vector3<f32>) -> Self {
        Self::with_config(position, up, target, &CameraConfig::default())
    }

    pub fn with_config(
        position: Vector3<f32>,
        up: Vector3<f32>,
        target: Vector3<f32>,
        config: &CameraConfig,
    ) -> Self {
        let mut w = position - target;
        if w.magnitude2() == 0.0 {
            log::warn!("Camera target equals its position, looking down -z instead");
            w = Vector3::unit_z();
        }
        let w = w.normalize();
        let pitch = Deg::from(Rad(-w.y.clamp(-1.0, 1.0).asin()));
        let yaw = Deg::from(Rad(w.z.atan2(w.x)));
        Self {
            position,
            up: up.normalize(),
            w,
            yaw,
            pitch,
            translation_sensitivity: config.translation_sensitivity,
            rotation_sensitivity: config.rotation_sensitivity,
            pitch_limit: Deg(config.pitch_limit),
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Backward axis; the camera looks along `-w`.
    pub fn w(&self) -> Vector3<f32> {
        self.w
    }

    /// Right axis.
    ///
    /// When `up` is parallel to `w` a fixed axis stands in for `up`.
    pub fn u(&self) -> Vector3<f32> {
        let right = self.up.cross(self.w);
        if right.magnitude2() > f32::EPSILON {
            return right.normalize();
        }
        log::warn!("Camera up vector is parallel to its view direction, using a fallback axis");
        let fallback = if self.w.z.abs() < 0.9 {
            Vector3::unit_z()
        } else {
            Vector3::unit_x()
        };
        fallback.cross(self.w).normalize()
    }

    pub fn v(&self) -> Vector3<f32> {
        self.w.cross(self.u()).normalize()
    }

    pub fn yaw(&self) -> Deg<f32> {
        self.yaw
    }

    pub fn pitch(&self) -> Deg<f32> {
        self.pitch
    }

    pub fn view_direction(&self) -> Vector3<f32> {
        -self.w
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.position - self.w),
            self.up,
        )
    }

    /// Moves along `direction` scaled by the translation sensitivity.
    pub fn translate(&mut self, direction: Vector3<f32>) {
        self.translate_scaled(direction, self.translation_sensitivity);
    }

    pub fn translate_scaled(&mut self, direction: Vector3<f32>, sensitivity: f32) {
        self.position += direction * sensitivity;
    }

    /// Turns by pointer offsets scaled by the rotation sensitivity.
    pub fn rotate(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.rotate_scaled(yaw_offset, pitch_offset, self.rotation_sensitivity);
    }

    pub fn rotate_scaled(&mut self, yaw_offset: f32, pitch_offset: f32, sensitivity: f32) {
        let limit = self.pitch_limit.0.abs();
        self.pitch = Deg((self.pitch.0 + pitch_offset * sensitivity).clamp(-limit, limit));
        self.yaw = Deg(self.yaw.0 + yaw_offset * sensitivity);

        let pitch = Rad::from(-self.pitch);
        let yaw = Rad::from(self.yaw);
        let (sin_pitch, cos_pitch) = pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = yaw.0.sin_cos();
        self.w = Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize();
    }
}

impl Default for Camera {
    /// Three units behind the origin on -z, looking at +z.
    fn default() -> Self {
        Self::new(
            Vector3::new(0.0, 0.0, -3.0),
            Vector3::unit_y(),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }
}

/// Perspective projection for a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}
