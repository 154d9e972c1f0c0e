/// Represents a single acquired frame.
///
/// Created by the first clear of a tick and consumed by `Gpu::present_frame`.
/// Holding the surface texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
