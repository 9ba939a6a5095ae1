use std::{collections::HashSet, rc::Rc};

use prism_ngin::{
    Deg, Matrix3, Matrix4, Rad, SquareMatrix, Vector3,
    camera::Camera,
    data_structures::{
        id::IdAllocator,
        light::PointLight,
        scene_graph::Scene,
        scene_node::SceneNode,
        shared,
        transform::{Transform, normal_matrix, transform_direction, transform_point},
    },
};

use crate::common::test_utils::{MockBackend, assert_vec3_near, mesh};
mod common;

#[test]
fn allocated_ids_are_pairwise_distinct() {
    let ids = IdAllocator::new();
    let issued: Vec<_> = (0..500).map(|_| ids.next_id()).collect();
    let unique: HashSet<_> = issued.iter().copied().collect();

    assert_eq!(unique.len(), issued.len());
    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(ids.issued(), 500);
}

#[test]
fn scenes_sharing_an_allocator_never_reuse_ids() {
    let backend = MockBackend::new();
    let ids = Rc::new(IdAllocator::new());
    let mut left = Scene::with_allocator(shared(Camera::default()), ids.clone());
    let mut right = Scene::with_allocator(shared(Camera::default()), ids.clone());

    let mut seen = HashSet::new();
    for i in 0..10 {
        let scene = if i % 2 == 0 { &mut left } else { &mut right };
        assert!(seen.insert(scene.add_mesh(shared(mesh(&backend, "m", 1)))));
        assert!(seen.insert(scene.add_point_light(shared(PointLight::new(
            Vector3::new(1.0, 1.0, 1.0),
            1.0,
        )))));
    }
    assert_eq!(ids.issued(), 20);
}

#[test]
fn nodes_referencing_one_object_are_distinct() {
    let ids = IdAllocator::new();
    let light = shared(PointLight::new(Vector3::new(1.0, 0.0, 0.0), 2.0));
    let a = SceneNode::new(light.clone(), &ids);
    let b = SceneNode::new(light.clone(), &ids);

    assert_ne!(a, b);
    assert!(Rc::ptr_eq(&a.object(), &b.object()));

    b.borrow_object_mut().power = 8.0;
    assert_eq!(a.borrow_object().power, 8.0);
}

#[test]
fn model_matrix_translates_points_but_not_directions() {
    let ids = IdAllocator::new();
    let mut node = SceneNode::new(shared(()), &ids);
    node.set_position(Vector3::new(1.0, 2.0, 3.0));

    let model = node.calculate_model_matrix();

    assert_eq!(
        transform_point(model, Vector3::new(0.0, 0.0, 0.0)),
        Vector3::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        transform_direction(model, Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 1.0, 0.0)
    );
    let normal = node.calculate_normal_matrix();
    assert_vec3_near(normal.x, Vector3::unit_x());
    assert_vec3_near(normal.y, Vector3::unit_y());
    assert_vec3_near(normal.z, Vector3::unit_z());
}

#[test]
fn relative_moves_and_rotations_accumulate() {
    let ids = IdAllocator::new();
    let mut node = SceneNode::new(shared(()), &ids);

    node.move_by(Vector3::new(1.0, 0.0, 0.0));
    node.move_by(Vector3::new(0.0, 0.0, 2.0));
    node.rotate_deg(Vector3::unit_z(), 45.0);
    node.rotate(Vector3::unit_z(), Deg(45.0f32));

    assert_eq!(node.position(), Vector3::new(1.0, 0.0, 2.0));
    assert_vec3_near(
        transform_direction(node.rotation(), Vector3::unit_x()),
        Vector3::unit_y(),
    );

    node.set_rotation(Matrix4::identity());
    node.rotate_rad(Vector3::new(0.0, 0.0, 5.0), std::f32::consts::PI);
    assert_vec3_near(
        transform_point(node.calculate_model_matrix(), Vector3::unit_x()),
        Vector3::new(0.0, 0.0, 2.0),
    );
}

#[test]
fn rotation_around_zero_axis_is_ignored() {
    let mut transform = Transform::from(Vector3::new(0.0, 1.0, 0.0));
    transform.rotate(Vector3::new(0.0, 0.0, 0.0), Rad::from(Deg(30.0f32)));
    assert_eq!(transform.rotation, Matrix4::identity());
    assert_eq!(transform, Transform::from(Vector3::new(0.0, 1.0, 0.0)));
}

#[test]
fn normal_matrix_corrects_non_uniform_scale() {
    let model = Matrix4::from_nonuniform_scale(2.0, 1.0, 1.0);
    let normal = normal_matrix(model) * Vector3::new(1.0, 1.0, 0.0);

    assert_vec3_near(normal, Vector3::new(0.5, 1.0, 0.0));

    // singular matrices fall back to their upper 3x3
    let flat = Matrix4::from_nonuniform_scale(1.0, 0.0, 1.0);
    assert_eq!(
        normal_matrix(flat),
        Matrix3::from_cols(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    );
}
