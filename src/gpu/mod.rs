//! GPU upload of the camera and viewport uniforms.
//!
//! One bind group exposes both uniforms to vertex and fragment stages:
//! binding 0 holds the [`CameraUniform`], binding 1 the
//! [`ViewportUniform`] fed by the controls.

use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;
use crate::controls::TrackballControls;
use crate::uniforms::ViewportUniform;

/// Uniform buffers and bind group driven by a [`TrackballControls`].
pub struct UniformBuffers {
    /// CPU copy of the camera uniform.
    pub camera_uniform: CameraUniform,
    /// Camera uniform buffer (binding 0).
    pub camera_buffer: wgpu::Buffer,
    /// Viewport uniform buffer (binding 1).
    pub viewport_buffer: wgpu::Buffer,
    /// Layout shared by pipelines that read the uniforms.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over both buffers.
    pub bind_group: wgpu::BindGroup,
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

impl UniformBuffers {
    /// Create the buffers, initialized from the controls' current state.
    ///
    /// Attaches a uniform feed to `controls` if none is attached yet.
    pub fn new(device: &wgpu::Device, controls: &mut TrackballControls) -> Self {
        if controls.uniforms().is_none() {
            controls.attach_uniforms();
        }

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(controls.camera());
        let viewport_uniform = controls
            .take_uniform_update()
            .or_else(|| controls.uniforms().map(|feed| feed.uniform()))
            .unwrap_or_default();

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Trackball Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let viewport_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Trackball Viewport Buffer"),
                contents: bytemuck::cast_slice(&[viewport_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Trackball Bind Group Layout"),
                entries: &[uniform_entry(0), uniform_entry(1)],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: viewport_buffer.as_entire_binding(),
                },
            ],
            label: Some("Trackball Bind Group"),
        });

        Self {
            camera_uniform,
            camera_buffer,
            viewport_buffer,
            layout,
            bind_group,
        }
    }

    /// Upload the camera uniform, and the viewport uniform if it changed.
    pub fn sync(&mut self, queue: &wgpu::Queue, controls: &mut TrackballControls) {
        self.camera_uniform.update_view_proj(controls.camera());
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        if let Some(viewport) = controls.take_uniform_update() {
            self.write_viewport(queue, viewport);
        }
    }

    fn write_viewport(&self, queue: &wgpu::Queue, viewport: ViewportUniform) {
        queue.write_buffer(
            &self.viewport_buffer,
            0,
            bytemuck::cast_slice(&[viewport]),
        );
    }
}
