/// Depth attachment sized to the surface.
///
/// Recreated whenever the surface is resized; the old texture is dropped.
pub struct DepthBuffer {
    format: wgpu::TextureFormat,
    size: wgpu::Extent3d,
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let size = depth_extent(width, height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("figura depth texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            format,
            size,
            _texture: texture,
            view,
        }
    }

    /// Recreates the texture if the size changed.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if depth_extent(width, height) == self.size {
            return;
        }
        *self = Self::new(device, self.format, width, height);
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }
}

/// Texture extent for a drawable size. wgpu rejects zero-sized textures.
pub(crate) fn depth_extent(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}
