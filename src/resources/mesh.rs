use cgmath::{InnerSpace, Vector2, Vector3};

/// Layout of a single vertex as it is uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexFormat {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 3],
}

impl VertexFormat {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent: [0.0; 3],
        }
    }
}

/// How often the geometry is expected to change once uploaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawUsage {
    #[default]
    Static,
    Dynamic,
    Stream,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    #[default]
    Triangles,
    Lines,
    Points,
}

/// Vertices plus optional indices of one mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<VertexFormat>,
    pub indices: Option<Vec<u32>>,
}

impl MeshData {
    pub fn new(vertices: Vec<VertexFormat>, indices: Option<Vec<u32>>) -> Self {
        Self { vertices, indices }
    }

    /**
     * Appends `other` to `self`.
     *
     * Both sides must agree on being indexed or not. Appended indices are
     * offset by the vertex count `self` had before the merge. Mixed inputs
     * are left untouched.
     */
    pub fn unionize(&mut self, other: &MeshData) {
        let offset = self.vertices.len() as u32;
        match (&mut self.indices, &other.indices) {
            (Some(indices), Some(other_indices)) => {
                indices.reserve(other_indices.len());
                indices.extend(other_indices.iter().map(|i| i + offset));
            }
            (None, None) => (),
            _ => {
                log::warn!(
                    "Cannot merge indexed and non-indexed mesh data ({} + {} vertices)",
                    self.vertices.len(),
                    other.vertices.len()
                );
                return;
            }
        }
        self.vertices.extend_from_slice(&other.vertices);
    }

    /// Triangles as vertex index triples, following the index buffer if present.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        match &self.indices {
            Some(indices) => indices
                .chunks_exact(3)
                .map(|c| [c[0] as usize, c[1] as usize, c[2] as usize])
                .collect(),
            None => (0..self.vertices.len() / 3)
                .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
                .collect(),
        }
    }

    /**
     * Computes per-vertex tangents for a triangle list.
     *
     * Vertices shared between triangles get the normalised sum of the
     * triangle tangents. Triangles with degenerate uv mapping are skipped and
     * vertices not referenced by any valid triangle keep their tangent.
     */
    pub fn calculate_tangents(&mut self) {
        let mut sums = vec![Vector3::new(0.0f32, 0.0, 0.0); self.vertices.len()];
        let mut touched = vec![false; self.vertices.len()];

        for [a, b, c] in self.triangles() {
            if a >= self.vertices.len() || b >= self.vertices.len() || c >= self.vertices.len() {
                log::warn!("Triangle ({a}, {b}, {c}) references a missing vertex");
                continue;
            }
            let (v0, v1, v2) = (self.vertices[a], self.vertices[b], self.vertices[c]);

            let delta_pos1 = Vector3::from(v1.position) - Vector3::from(v0.position);
            let delta_pos2 = Vector3::from(v2.position) - Vector3::from(v0.position);
            let delta_uv1 = Vector2::from(v1.uv) - Vector2::from(v0.uv);
            let delta_uv2 = Vector2::from(v2.uv) - Vector2::from(v0.uv);

            let det = delta_uv1.x * delta_uv2.y - delta_uv2.x * delta_uv1.y;
            if det == 0.0 {
                continue;
            }
            let tangent = (delta_pos1 * delta_uv2.y - delta_pos2 * delta_uv1.y) / det;

            for i in [a, b, c] {
                sums[i] += tangent;
                touched[i] = true;
            }
        }

        for (vertex, (sum, touched)) in self.vertices.iter_mut().zip(sums.into_iter().zip(touched)) {
            if touched && sum.magnitude2() > 0.0 {
                vertex.tangent = sum.normalize().into();
            }
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(|indices| bytemuck::cast_slice(indices))
    }

    /// Number of elements a draw call covers: indices if present, vertices otherwise.
    pub fn element_count(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.vertices.len(), |indices| indices.len())
    }
}

/// Geometry that lives on the GPU.
pub trait GpuGeometry {
    /// Issues the draw call with whatever program and target are bound.
    fn draw(&self);

    /// Replaces the uploaded buffers.
    fn update(&mut self, data: &MeshData, usage: DrawUsage) -> anyhow::Result<()>;
}

/// Creates GPU geometry from mesh data.
pub trait GeometryBackend {
    fn upload(
        &self,
        data: &MeshData,
        usage: DrawUsage,
        topology: Topology,
    ) -> anyhow::Result<Box<dyn GpuGeometry>>;
}
