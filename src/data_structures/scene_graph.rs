//! The scene: meshes, lights and cameras, and the per-frame draw.
//!
//! A [`Scene`] owns one [`SceneNode`] per placement. The objects behind the
//! nodes are shared, so the same mesh can be placed many times and cameras can
//! be kept by the host to drive them directly.
//!
//! Drawing happens in two stages. First the scene writes the uniforms every
//! program needs (camera and lights) into a [`ShaderConfiguration`]. Then it
//! walks its meshes in insertion order, binds the framebuffer their program
//! renders to, loads the shared configuration into that program the first
//! time it shows up in the frame, and finally sets the per-mesh uniforms and
//! issues the draw call.

use std::rc::Rc;

use winit::keyboard::KeyCode;

use crate::{
    camera::Camera,
    config::{EngineConfig, LightingConfig},
    data_structures::{
        Shared,
        id::{IdAllocator, NodeId},
        light::{DirectionalLight, PointLight},
        material::MATERIAL_TEXTURE_UNIT_BASE,
        mesh::SceneMesh,
        scene_node::SceneNode,
        shared,
        transform::{normal_matrix, transform_direction},
    },
    error::ShaderError,
    input::KeyboardState,
    pipelines::{configuration::ShaderConfiguration, manager::ShaderManager},
    render::{FrameStats, FramebufferMap},
};

/// Everything that can be put into a scene.
#[derive(Clone, Debug)]
pub enum Placeable {
    Mesh(Shared<SceneMesh>),
    PointLight(Shared<PointLight>),
    DirectionalLight(Shared<DirectionalLight>),
    Camera(Shared<Camera>),
}

impl From<Shared<SceneMesh>> for Placeable {
    fn from(mesh: Shared<SceneMesh>) -> Self {
        Placeable::Mesh(mesh)
    }
}

impl From<Shared<PointLight>> for Placeable {
    fn from(light: Shared<PointLight>) -> Self {
        Placeable::PointLight(light)
    }
}

impl From<Shared<DirectionalLight>> for Placeable {
    fn from(light: Shared<DirectionalLight>) -> Self {
        Placeable::DirectionalLight(light)
    }
}

impl From<Shared<Camera>> for Placeable {
    fn from(camera: Shared<Camera>) -> Self {
        Placeable::Camera(camera)
    }
}

pub struct Scene {
    ids: Rc<IdAllocator>,
    mesh_nodes: Vec<SceneNode<SceneMesh>>,
    point_lights: Vec<SceneNode<PointLight>>,
    directional_lights: Vec<SceneNode<DirectionalLight>>,
    cameras: Vec<Shared<Camera>>,
    active_camera: Shared<Camera>,
    lighting: LightingConfig,
}

impl Scene {
    /// Creates an empty scene with `camera` as its active camera.
    pub fn new(camera: Shared<Camera>) -> Self {
        Self::with_allocator(camera, Rc::new(IdAllocator::new()))
    }

    /// Like [`new`](Self::new), drawing node ids from a shared allocator so
    /// that nodes of different scenes never share an id.
    pub fn with_allocator(camera: Shared<Camera>, ids: Rc<IdAllocator>) -> Self {
        let mut scene = Self {
            ids,
            mesh_nodes: Vec::new(),
            point_lights: Vec::new(),
            directional_lights: Vec::new(),
            cameras: Vec::new(),
            active_camera: camera.clone(),
            lighting: LightingConfig::default(),
        };
        scene.set_active_camera(camera);
        scene
    }

    /// Scene with a default camera tuned by `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let defaults = Camera::default();
        let camera = Camera::with_config(
            defaults.position(),
            defaults.up(),
            defaults.position() - defaults.w(),
            &config.camera,
        );
        let mut scene = Self::new(shared(camera));
        scene.lighting = config.lighting.clone();
        scene
    }

    /// Places `mesh` at the origin and returns the new node's id.
    pub fn add_mesh(&mut self, mesh: Shared<SceneMesh>) -> NodeId {
        let node = SceneNode::new(mesh, &self.ids);
        let id = node.id();
        log::debug!("Added mesh node {} ({})", id, node.borrow_object().name());
        self.mesh_nodes.push(node);
        id
    }

    pub fn add_point_light(&mut self, light: Shared<PointLight>) -> NodeId {
        let node = SceneNode::new(light, &self.ids);
        let id = node.id();
        log::debug!("Added point light node {id}");
        self.point_lights.push(node);
        id
    }

    pub fn add_directional_light(&mut self, light: Shared<DirectionalLight>) -> NodeId {
        let node = SceneNode::new(light, &self.ids);
        let id = node.id();
        log::debug!("Added directional light node {id}");
        self.directional_lights.push(node);
        id
    }

    /// Makes `camera` known to the scene without activating it.
    pub fn add_camera(&mut self, camera: Shared<Camera>) {
        if self.has_camera(&camera) {
            log::debug!("Camera is already part of the scene");
            return;
        }
        self.cameras.push(camera);
    }

    /// Adds any placeable object. Cameras are not placed by nodes, so adding
    /// one returns `None`.
    pub fn add_object(&mut self, object: impl Into<Placeable>) -> Option<NodeId> {
        match object.into() {
            Placeable::Mesh(mesh) => Some(self.add_mesh(mesh)),
            Placeable::PointLight(light) => Some(self.add_point_light(light)),
            Placeable::DirectionalLight(light) => Some(self.add_directional_light(light)),
            Placeable::Camera(camera) => {
                self.add_camera(camera);
                None
            }
        }
    }

    /// Activates `camera`, adding it to the scene's cameras first if needed.
    pub fn set_active_camera(&mut self, camera: Shared<Camera>) {
        self.add_camera(camera.clone());
        self.active_camera = camera;
    }

    pub fn active_camera(&self) -> Shared<Camera> {
        self.active_camera.clone()
    }

    pub fn cameras(&self) -> &[Shared<Camera>] {
        &self.cameras
    }

    pub fn has_camera(&self, camera: &Shared<Camera>) -> bool {
        self.cameras.iter().any(|known| Rc::ptr_eq(known, camera))
    }

    /// Removes the node with `id`, whatever it places. Returns whether a node
    /// was found.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.node_count();
        self.mesh_nodes.retain(|node| node.id() != id);
        self.point_lights.retain(|node| node.id() != id);
        self.directional_lights.retain(|node| node.id() != id);
        let removed = self.node_count() != before;
        if removed {
            log::debug!("Removed node {id}");
        }
        removed
    }

    pub fn node_count(&self) -> usize {
        self.mesh_nodes.len() + self.point_lights.len() + self.directional_lights.len()
    }

    pub fn mesh_nodes(&self) -> &[SceneNode<SceneMesh>] {
        &self.mesh_nodes
    }

    pub fn point_lights(&self) -> &[SceneNode<PointLight>] {
        &self.point_lights
    }

    pub fn directional_lights(&self) -> &[SceneNode<DirectionalLight>] {
        &self.directional_lights
    }

    pub fn mesh_node(&self, id: NodeId) -> Option<&SceneNode<SceneMesh>> {
        self.mesh_nodes.iter().find(|node| node.id() == id)
    }

    pub fn mesh_node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode<SceneMesh>> {
        self.mesh_nodes.iter_mut().find(|node| node.id() == id)
    }

    pub fn point_light_node(&self, id: NodeId) -> Option<&SceneNode<PointLight>> {
        self.point_lights.iter().find(|node| node.id() == id)
    }

    pub fn directional_light_node(&self, id: NodeId) -> Option<&SceneNode<DirectionalLight>> {
        self.directional_lights.iter().find(|node| node.id() == id)
    }

    pub fn point_light_node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode<PointLight>> {
        self.point_lights.iter_mut().find(|node| node.id() == id)
    }

    pub fn directional_light_node_mut(
        &mut self,
        id: NodeId,
    ) -> Option<&mut SceneNode<DirectionalLight>> {
        self.directional_lights
            .iter_mut()
            .find(|node| node.id() == id)
    }

    pub fn lighting(&self) -> &LightingConfig {
        &self.lighting
    }

    pub fn set_lighting(&mut self, lighting: LightingConfig) {
        self.lighting = lighting;
    }

    /**
     * Draws every mesh whose program has a framebuffer in `framebuffers`.
     *
     * Camera and light uniforms are added to `configuration`, which is loaded
     * at most once into each program during this call. The configured state
     * of `shaders` is reset before the first mesh, so every call starts a new
     * frame for the registry.
     *
     * Fails if a routed mesh uses a program that was never registered.
     */
    pub fn draw(
        &self,
        configuration: &mut ShaderConfiguration,
        shaders: &mut ShaderManager,
        framebuffers: &FramebufferMap<'_>,
    ) -> Result<FrameStats, ShaderError> {
        self.write_camera_uniforms(configuration);
        self.write_light_uniforms(configuration);

        shaders.clear_draw_configurations();

        let mut stats = FrameStats::default();
        for node in &self.mesh_nodes {
            let mesh = node.borrow_object();
            let shader_id = mesh.shader_id();
            let Some(framebuffer) = framebuffers.get(&shader_id) else {
                log::trace!(
                    "Skipping mesh {} of node {}: no framebuffer for shader {}",
                    mesh.name(),
                    node.id(),
                    shader_id
                );
                stats.skipped += 1;
                continue;
            };
            framebuffer.bind();

            shaders.use_shader(shader_id)?;
            if shaders.configure_shader(configuration, shader_id)? {
                stats.programs_configured += 1;
            }
            let program = shaders
                .shader(shader_id)
                .ok_or(ShaderError::Unregistered(shader_id))?;

            let model = node.calculate_model_matrix();
            program.set_mat4("model", model);
            program.set_mat3("model_normal", normal_matrix(model));
            mesh.material()
                .push(&*program, "material", MATERIAL_TEXTURE_UNIT_BASE);

            mesh.draw();
            stats.draw_calls += 1;
        }
        Ok(stats)
    }

    fn write_camera_uniforms(&self, configuration: &mut ShaderConfiguration) {
        let camera = self.active_camera.borrow();
        configuration.set_mat4("view", camera.view_matrix());
        configuration.set_vec3("camera_position", camera.position());
        configuration.set_vec3("camera_view_dir", camera.view_direction());
    }

    fn write_light_uniforms(&self, configuration: &mut ShaderConfiguration) {
        if self.point_lights.len() > self.lighting.max_point_lights {
            log::warn!(
                "Scene has {} point lights but shaders declare only {}; the extra lights index past the uniform arrays",
                self.point_lights.len(),
                self.lighting.max_point_lights
            );
        }
        for (i, node) in self.point_lights.iter().enumerate() {
            let light = node.borrow_object();
            configuration.set_vec3(format!("pointLight_position[{i}]"), node.position());
            configuration.set_vec3(format!("pointLight_color[{i}]"), light.color);
            configuration.set_float(format!("pointLight_power[{i}]"), light.power);
        }
        configuration.set_uint("pointLight_count", self.point_lights.len() as u32);

        match self.directional_lights.first() {
            Some(node) => {
                let light = node.borrow_object();
                let direction = transform_direction(node.calculate_model_matrix(), light.direction);
                configuration.set_vec3("directionalLight_direction", direction);
                configuration.set_float("directionalLight_power", light.power);
                configuration.set_bool("useDirectionalLight", true);
            }
            None => configuration.set_bool("useDirectionalLight", false),
        }
    }

    /// Moves the active camera with WASD.
    pub fn process_input(&self, keys: &KeyboardState) {
        let mut camera = self.active_camera.borrow_mut();
        let (u, w) = (camera.u(), camera.w());
        if keys.is_pressed(KeyCode::KeyA) {
            camera.translate(-u);
        }
        if keys.is_pressed(KeyCode::KeyD) {
            camera.translate(u);
        }
        if keys.is_pressed(KeyCode::KeyW) {
            camera.translate(-w);
        }
        if keys.is_pressed(KeyCode::KeyS) {
            camera.translate(w);
        }
    }

    /// Turns the active camera by pointer offsets in pixels.
    pub fn process_mouse(&self, x_offset: f32, y_offset: f32) {
        self.active_camera.borrow_mut().rotate(x_offset, y_offset);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(shared(Camera::default()))
    }
}
