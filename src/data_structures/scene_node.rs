//! Placement of shared objects in a scene.

use std::{
    cell::{Ref, RefMut},
    fmt,
    hash::{Hash, Hasher},
};

use cgmath::{Deg, Matrix3, Matrix4, Rad, Vector3};

use crate::data_structures::{
    Shared,
    id::{IdAllocator, NodeId},
    transform::{Transform, normal_matrix},
};

/**
 * A lightweight instance of a shared object.
 *
 * The object (a mesh, a light, ...) holds the heavy data and may be pointed
 * at by many nodes. Each node adds its own local transform and an identity.
 * Two nodes are equal iff their ids are equal, even when they reference the
 * same object.
 */
pub struct SceneNode<T> {
    id: NodeId,
    object: Shared<T>,
    transform: Transform,
}

impl<T> SceneNode<T> {
    /// Places `object` at the origin with identity rotation.
    pub fn new(object: Shared<T>, ids: &IdAllocator) -> Self {
        Self {
            id: ids.next_id(),
            object,
            transform: Transform::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Another handle to the referenced object.
    pub fn object(&self) -> Shared<T> {
        self.object.clone()
    }

    pub fn borrow_object(&self) -> Ref<'_, T> {
        self.object.borrow()
    }

    pub fn borrow_object_mut(&self) -> RefMut<'_, T> {
        self.object.borrow_mut()
    }

    /// Absolute position. Use [`move_by`](Self::move_by) for relative displacement.
    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.transform.position = position;
    }

    /// Absolute orientation. Use [`rotate_deg`](Self::rotate_deg) or
    /// [`rotate_rad`](Self::rotate_rad) for relative rotation.
    pub fn set_rotation(&mut self, rotation: Matrix4<f32>) {
        self.transform.rotation = rotation;
    }

    pub fn move_by(&mut self, offset: Vector3<f32>) {
        self.transform.translate(offset);
    }

    pub fn rotate<A: Into<Rad<f32>>>(&mut self, axis: Vector3<f32>, angle: A) {
        self.transform.rotate(axis, angle.into());
    }

    pub fn rotate_deg(&mut self, axis: Vector3<f32>, degrees: f32) {
        self.rotate(axis, Deg(degrees));
    }

    pub fn rotate_rad(&mut self, axis: Vector3<f32>, radians: f32) {
        self.rotate(axis, Rad(radians));
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    pub fn rotation(&self) -> Matrix4<f32> {
        self.transform.rotation
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// `translation(position) * rotation`, computed from the current state.
    pub fn calculate_model_matrix(&self) -> Matrix4<f32> {
        self.transform.to_matrix()
    }

    pub fn calculate_normal_matrix(&self) -> Matrix3<f32> {
        normal_matrix(self.calculate_model_matrix())
    }
}

impl<T> PartialEq for SceneNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for SceneNode<T> {}

impl<T> Hash for SceneNode<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for SceneNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneNode")
            .field("id", &self.id)
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}
