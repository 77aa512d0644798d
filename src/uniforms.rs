//! Shader uniforms fed by the controls.
//!
//! Some shaders (e.g. screen-space depth effects) need the viewport width
//! and the distance from the eye to the orbit target. The controls write
//! both into a [`UniformFeed`] and flag it dirty; the renderer uploads it
//! when [`TrackballControls::take_uniform_update`] yields a value.
//!
//! [`TrackballControls::take_uniform_update`]: crate::TrackballControls::take_uniform_update

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform holding viewport and target depth parameters.
pub struct ViewportUniform {
    /// Width of the controlled element in pixels.
    pub renderer_width: f32,
    /// Eye-to-target distance.
    pub target_depth: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

/// A viewport uniform plus a flag recording whether it changed since the
/// last upload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UniformFeed {
    uniform: ViewportUniform,
    needs_update: bool,
}

impl UniformFeed {
    /// Current uniform value.
    #[must_use]
    pub fn uniform(&self) -> ViewportUniform {
        self.uniform
    }

    /// Whether the uniform changed since it was last taken.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Write the renderer width; only marks the feed dirty on change.
    pub(crate) fn set_renderer_width(&mut self, width: f32) {
        if self.uniform.renderer_width != width {
            self.uniform.renderer_width = width;
            self.needs_update = true;
        }
    }

    /// Write the target depth. Always marks the feed dirty.
    pub(crate) fn set_target_depth(&mut self, depth: f32) {
        self.uniform.target_depth = depth;
        self.needs_update = true;
    }

    /// Return the uniform and clear the dirty flag, if it was dirty.
    pub(crate) fn take(&mut self) -> Option<ViewportUniform> {
        if self.needs_update {
            self.needs_update = false;
            Some(self.uniform)
        } else {
            None
        }
    }
}
