// Cube mesh for the showcase widget.
// Six independently coloured quads (4 vertices each, flat normals) so every
// face can carry its topic colour. Faces use CCW winding viewed from outside,
// matching back-face culling in the pipeline.

use glam::Vec3;

use super::dispatch::CubeFace;

// ============================================================================
// GPU VERTEX
// ============================================================================

/// GPU-ready vertex:
///   @location(0) position: vec3<f32>
///   @location(1) normal:   vec3<f32>
///   @location(2) color:    vec4<f32>
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal:   [f32; 3],
    pub color:    [f32; 4],
}

impl GpuVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: (2 * std::mem::size_of::<[f32; 3]>()) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

// ============================================================================
// RENDER MESH
// ============================================================================

/// GPU-ready triangulated mesh.
/// Upload vertex_bytes() to a VERTEX buffer, index_bytes() to an INDEX buffer.
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices:  Vec<u32>,
}

impl RenderMesh {
    /// Cast vertex slice to raw bytes for wgpu buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Cast index slice to raw bytes for wgpu buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn index_count(&self) -> usize  { self.indices.len() }
}

// ============================================================================
// CUBE FACES
// ============================================================================

/// Outward normal and an in-plane (u, v) basis with `u × v = normal`.
pub fn face_basis(face: CubeFace) -> (Vec3, Vec3, Vec3) {
    match face {
        CubeFace::Front  => (Vec3::Z,     Vec3::X,     Vec3::Y),
        CubeFace::Back   => (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        CubeFace::Right  => (Vec3::X,     Vec3::NEG_Z, Vec3::Y),
        CubeFace::Left   => (Vec3::NEG_X, Vec3::Z,     Vec3::Y),
        CubeFace::Top    => (Vec3::Y,     Vec3::X,     Vec3::NEG_Z),
        CubeFace::Bottom => (Vec3::NEG_Y, Vec3::X,     Vec3::Z),
    }
}

pub fn face_normal(face: CubeFace) -> Vec3 {
    face_basis(face).0
}

/// Build a cube of half size `half_extent` with one colour per face.
pub fn cube_mesh(half_extent: f32, color_of: impl Fn(CubeFace) -> [f32; 4]) -> RenderMesh {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in CubeFace::ALL {
        let (n, u, v) = face_basis(face);
        let color = color_of(face);
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * half_extent;
            vertices.push(GpuVertex {
                position: p.to_array(),
                normal:   n.to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    RenderMesh { vertices, indices }
}
