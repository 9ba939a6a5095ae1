//! Local placement of a scene node.
//!
//! A node is placed by a translation and an orientation matrix. Both are kept
//! separately so that relative moves and rotations compose without drift in
//! the translation part.

use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, Rad, SquareMatrix, Vector3, Vector4, Zero};

/// Position plus 4x4 orientation, identity by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Matrix4<f32>,
}

impl Transform {
    /// Create a transform at the origin with no rotation.
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Matrix4::identity(),
        }
    }

    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.position += offset;
    }

    /// Post-multiplies the orientation with a rotation around `axis`.
    ///
    /// A zero axis leaves the orientation untouched.
    pub fn rotate(&mut self, axis: Vector3<f32>, angle: Rad<f32>) {
        if axis.magnitude2() == 0.0 {
            log::warn!("Ignoring rotation around a zero-length axis");
            return;
        }
        self.rotation = self.rotation * Matrix4::from_axis_angle(axis.normalize(), angle);
    }

    /// `translation(position) * rotation`
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * self.rotation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/**
 * Upper 3x3 of the inverse transpose of `model`.
 *
 * Normals must be transformed with this matrix instead of the model matrix, as
 * non-uniform scale would otherwise skew them. A singular model matrix falls
 * back to its own upper 3x3.
 */
pub fn normal_matrix(model: Matrix4<f32>) -> Matrix3<f32> {
    let inverse_transpose = match model.invert() {
        Some(inverse) => inverse.transpose(),
        None => {
            log::warn!("Model matrix is singular, normals are transformed without correction");
            model
        }
    };
    upper_3x3(inverse_transpose)
}

fn upper_3x3(m: Matrix4<f32>) -> Matrix3<f32> {
    Matrix3::from_cols(m.x.truncate(), m.y.truncate(), m.z.truncate())
}

/// Transforms a direction (w = 0), so only the rotational part applies.
pub fn transform_direction(model: Matrix4<f32>, direction: Vector3<f32>) -> Vector3<f32> {
    (model * direction.extend(0.0)).truncate()
}

/// Transforms a point (w = 1).
pub fn transform_point(model: Matrix4<f32>, point: Vector3<f32>) -> Vector3<f32> {
    let p: Vector4<f32> = model * point.extend(1.0);
    p.truncate() / p.w
}
