#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    path::Path,
    rc::Rc,
};

use prism_ngin::{
    Matrix3, Matrix4, Vector2, Vector3, Vector4,
    data_structures::{
        material::Material,
        mesh::SceneMesh,
    },
    pipelines::program::{Framebuffer, ShaderId, ShaderProgram},
    resources::{
        mesh::{DrawUsage, GeometryBackend, GpuGeometry, MeshData, Topology, VertexFormat},
        texture::Texture,
    },
};

pub(crate) const EPSILON: f32 = 1e-5;

pub(crate) fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(crate) fn assert_vec3_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert_near(actual.x, expected.x);
    assert_near(actual.y, expected.y);
    assert_near(actual.z, expected.z);
}

/// A uniform value as received by a [`RecordingProgram`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Uniform {
    Bool(bool),
    Int(i32),
    Uint(u32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat3(Matrix3<f32>),
    Mat4(Matrix4<f32>),
}

/// Shader program that logs every uniform it receives, in order.
pub(crate) struct RecordingProgram {
    id: ShaderId,
    name: String,
    calls: RefCell<Vec<(String, Uniform)>>,
    activations: Cell<usize>,
}

impl RecordingProgram {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id: ShaderId(id),
            name: format!("recording-{id}"),
            calls: RefCell::new(Vec::new()),
            activations: Cell::new(0),
        }
    }

    pub(crate) fn shared(id: u32) -> Rc<Self> {
        Rc::new(Self::new(id))
    }

    pub(crate) fn calls(&self) -> Vec<(String, Uniform)> {
        self.calls.borrow().clone()
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    /// How often `name` was set.
    pub(crate) fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|(n, _)| n == name).count()
    }

    /// Last value set for `name`.
    pub(crate) fn last(&self, name: &str) -> Option<Uniform> {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, value)| *value)
    }

    pub(crate) fn activations(&self) -> usize {
        self.activations.get()
    }

    pub(crate) fn reset(&self) {
        self.calls.borrow_mut().clear();
        self.activations.set(0);
    }

    fn record(&self, name: &str, value: Uniform) {
        self.calls.borrow_mut().push((name.to_string(), value));
    }
}

impl ShaderProgram for RecordingProgram {
    fn id(&self) -> ShaderId {
        self.id
    }

    fn debug_name(&self) -> &str {
        &self.name
    }

    fn activate(&self) {
        self.activations.set(self.activations.get() + 1);
    }

    fn set_bool(&self, name: &str, value: bool) {
        self.record(name, Uniform::Bool(value));
    }

    fn set_int(&self, name: &str, value: i32) {
        self.record(name, Uniform::Int(value));
    }

    fn set_uint(&self, name: &str, value: u32) {
        self.record(name, Uniform::Uint(value));
    }

    fn set_float(&self, name: &str, value: f32) {
        self.record(name, Uniform::Float(value));
    }

    fn set_vec2(&self, name: &str, value: Vector2<f32>) {
        self.record(name, Uniform::Vec2(value));
    }

    fn set_vec3(&self, name: &str, value: Vector3<f32>) {
        self.record(name, Uniform::Vec3(value));
    }

    fn set_vec4(&self, name: &str, value: Vector4<f32>) {
        self.record(name, Uniform::Vec4(value));
    }

    fn set_mat3(&self, name: &str, value: Matrix3<f32>) {
        self.record(name, Uniform::Mat3(value));
    }

    fn set_mat4(&self, name: &str, value: Matrix4<f32>) {
        self.record(name, Uniform::Mat4(value));
    }
}

/// Texture binds in the order they happened, as `(texture name, unit)`.
pub(crate) type BindLog = Rc<RefCell<Vec<(String, u32)>>>;

#[derive(Debug)]
pub(crate) struct RecordingTexture {
    name: String,
    log: BindLog,
}

impl RecordingTexture {
    pub(crate) fn new(name: &str, log: &BindLog) -> Rc<dyn Texture> {
        Rc::new(Self {
            name: name.to_string(),
            log: log.clone(),
        })
    }
}

impl Texture for RecordingTexture {
    fn bind(&self, unit: u32) {
        self.log.borrow_mut().push((self.name.clone(), unit));
    }
}

/// Loader stand-in: names each texture after the requested path.
pub(crate) fn recording_loader(log: BindLog) -> impl Fn(&Path) -> anyhow::Result<Rc<dyn Texture>> {
    move |path: &Path| Ok(RecordingTexture::new(&path.display().to_string(), &log))
}

pub(crate) struct CountingFramebuffer {
    name: String,
    binds: Cell<usize>,
}

impl CountingFramebuffer {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            binds: Cell::new(0),
        }
    }

    pub(crate) fn binds(&self) -> usize {
        self.binds.get()
    }
}

impl Framebuffer for CountingFramebuffer {
    fn bind(&self) {
        self.binds.set(self.binds.get() + 1);
    }

    fn debug_name(&self) -> &str {
        &self.name
    }
}

/// Geometry backend whose geometry only counts draw calls and updates.
#[derive(Default)]
pub(crate) struct MockBackend {
    uploads: Cell<usize>,
    draws: Rc<Cell<usize>>,
    updates: Rc<Cell<usize>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn uploads(&self) -> usize {
        self.uploads.get()
    }

    /// Draw calls across every geometry created by this backend.
    pub(crate) fn draws(&self) -> usize {
        self.draws.get()
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl GeometryBackend for MockBackend {
    fn upload(
        &self,
        _data: &MeshData,
        _usage: DrawUsage,
        _topology: Topology,
    ) -> anyhow::Result<Box<dyn GpuGeometry>> {
        self.uploads.set(self.uploads.get() + 1);
        Ok(Box::new(MockGeometry {
            draws: self.draws.clone(),
            updates: self.updates.clone(),
        }))
    }
}

struct MockGeometry {
    draws: Rc<Cell<usize>>,
    updates: Rc<Cell<usize>>,
}

impl GpuGeometry for MockGeometry {
    fn draw(&self) {
        self.draws.set(self.draws.get() + 1);
    }

    fn update(&mut self, _data: &MeshData, _usage: DrawUsage) -> anyhow::Result<()> {
        self.updates.set(self.updates.get() + 1);
        Ok(())
    }
}

/// Backend that refuses every upload.
pub(crate) struct FailingBackend;

impl GeometryBackend for FailingBackend {
    fn upload(
        &self,
        _data: &MeshData,
        _usage: DrawUsage,
        _topology: Topology,
    ) -> anyhow::Result<Box<dyn GpuGeometry>> {
        anyhow::bail!("out of GPU memory")
    }
}

/// A single textured quad as two triangles.
pub(crate) fn quad() -> MeshData {
    let vertices = vec![
        VertexFormat::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
        VertexFormat::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
        VertexFormat::new([1.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0]),
        VertexFormat::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
    ];
    MeshData::new(vertices, Some(vec![0, 1, 2, 0, 2, 3]))
}

pub(crate) fn mesh(backend: &MockBackend, name: &str, shader: u32) -> SceneMesh {
    SceneMesh::new(
        backend,
        name,
        quad(),
        DrawUsage::Static,
        Material::new(),
        ShaderId(shader),
    )
    .expect("mock upload never fails")
}
