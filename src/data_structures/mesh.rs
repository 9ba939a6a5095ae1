//! Drawable meshes.
//!
//! A [`SceneMesh`] owns its vertex data and the GPU geometry uploaded from
//! it. It is meant to be shared: placing the same mesh several times means
//! creating several scene nodes that point at one `SceneMesh`, never copying
//! the mesh.

use std::fmt;

use crate::{
    data_structures::material::Material,
    pipelines::program::ShaderId,
    resources::mesh::{DrawUsage, GeometryBackend, GpuGeometry, MeshData, Topology},
};

pub struct SceneMesh {
    name: String,
    data: MeshData,
    usage: DrawUsage,
    topology: Topology,
    material: Material,
    shader: ShaderId,
    geometry: Box<dyn GpuGeometry>,
}

impl SceneMesh {
    /// Uploads `data` through `backend` and wraps the result.
    ///
    /// `shader` is the program the mesh is drawn with; it also decides which
    /// framebuffer the mesh ends up in.
    pub fn new(
        backend: &dyn GeometryBackend,
        name: &str,
        data: MeshData,
        usage: DrawUsage,
        material: Material,
        shader: ShaderId,
    ) -> anyhow::Result<Self> {
        Self::with_topology(backend, name, data, usage, Topology::Triangles, material, shader)
    }

    pub fn with_topology(
        backend: &dyn GeometryBackend,
        name: &str,
        data: MeshData,
        usage: DrawUsage,
        topology: Topology,
        material: Material,
        shader: ShaderId,
    ) -> anyhow::Result<Self> {
        let geometry = backend.upload(&data, usage, topology)?;
        log::debug!(
            "Uploaded mesh {name} with {} vertices for shader {shader}",
            data.vertices.len()
        );
        Ok(Self {
            name: name.to_string(),
            data,
            usage,
            topology,
            material,
            shader,
            geometry,
        })
    }

    /// Replaces the vertex data, keeping the current usage hint.
    pub fn update(&mut self, data: MeshData) -> anyhow::Result<()> {
        self.update_with_usage(data, self.usage)
    }

    pub fn update_with_usage(&mut self, data: MeshData, usage: DrawUsage) -> anyhow::Result<()> {
        self.geometry.update(&data, usage)?;
        self.data = data;
        self.usage = usage;
        Ok(())
    }

    pub fn draw(&self) {
        self.geometry.draw();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &MeshData {
        &self.data
    }

    pub fn usage(&self) -> DrawUsage {
        self.usage
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn shader_id(&self) -> ShaderId {
        self.shader
    }

    pub fn set_shader(&mut self, shader: ShaderId) {
        self.shader = shader;
    }
}

impl fmt::Debug for SceneMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneMesh")
            .field("name", &self.name)
            .field("vertices", &self.data.vertices.len())
            .field("usage", &self.usage)
            .field("topology", &self.topology)
            .field("shader", &self.shader)
            .finish_non_exhaustive()
    }
}
