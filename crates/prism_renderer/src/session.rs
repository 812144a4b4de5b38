//! Render session: owns the active scene, the output image and the config.
//!
//! Switching scenes swaps the whole scene value and re-renders; nothing is
//! shared globally.

use prism_core::{Preset, Scene, SceneResult};

use crate::config::RenderConfig;
use crate::output::ImageBuffer;
use crate::renderer::render_image;
use crate::tracer::TraceStats;

/// Explicit owner of the "current scene" and "current image".
#[derive(Debug)]
pub struct RenderSession {
    scene: Scene,
    image: ImageBuffer,
    config: RenderConfig,
    last_stats: Option<TraceStats>,
}

impl RenderSession {
    /// Create a session. Nothing is rendered until [`RenderSession::render`].
    pub fn new(scene: Scene, width: u32, height: u32, config: RenderConfig) -> Self {
        Self {
            scene,
            image: ImageBuffer::new(width, height),
            config,
            last_stats: None,
        }
    }

    /// Recompute the full image from the active scene.
    pub fn render(&mut self) -> TraceStats {
        let stats = render_image(&self.scene, &mut self.image, &self.config);
        self.last_stats = Some(stats);
        stats
    }

    /// Swap in a new scene, re-render, and hand back the previous scene.
    pub fn replace_scene(&mut self, scene: Scene) -> Scene {
        let previous = std::mem::replace(&mut self.scene, scene);
        log::debug!(
            "Replaced scene ({} shapes -> {} shapes)",
            previous.len(),
            self.scene.len()
        );
        self.render();
        previous
    }

    /// Build a preset and make it the active scene.
    pub fn load_preset(&mut self, preset: Preset) -> SceneResult<Scene> {
        let scene = preset.build()?;
        Ok(self.replace_scene(scene))
    }

    /// Change the output resolution. Call `render` to refill the image.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image.resize(width, height);
        self.last_stats = None;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Swap the config. Call `render` to bring the image up to date.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
        self.last_stats = None;
    }

    /// Counts from the most recent render, if the image is current.
    pub fn last_stats(&self) -> Option<TraceStats> {
        self.last_stats
    }
}
