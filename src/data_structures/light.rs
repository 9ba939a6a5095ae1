use cgmath::Vector3;

/// Omnidirectional light. Its position comes from the scene node placing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vector3<f32>,
    pub power: f32,
}

impl PointLight {
    pub fn new(color: Vector3<f32>, power: f32) -> Self {
        Self { color, power }
    }
}

/// Light arriving from a single direction.
///
/// `direction` is given in the light's local space and rotated by the node
/// that places it; translation never applies to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub power: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vector3<f32>, power: f32) -> Self {
        Self { direction, power }
    }
}
