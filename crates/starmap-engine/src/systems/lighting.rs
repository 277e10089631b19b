/// Scene lighting for point clouds.
///
/// Points are unlit sprites, so the only light that matters is ambient: the
/// host multiplies point colors by the summed ambient term. Lights belong to
/// the scene and are dropped with it on every rebuild.

/// Uniform light applied to everything in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: [f32; 3], intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// White light at the given intensity.
    pub fn white(intensity: f32) -> Self {
        Self::new([1.0, 1.0, 1.0], intensity)
    }
}

/// Active lights for the current scene.
///
/// With no lights the ambient term is white, i.e. colors render unmodified;
/// 2D canvases rely on that.
#[derive(Debug, Clone, Default)]
pub struct LightState {
    ambient: Vec<AmbientLight>,
}

impl LightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ambient(&mut self, light: AmbientLight) {
        self.ambient.push(light);
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.ambient.clear();
    }

    pub fn count(&self) -> usize {
        self.ambient.len()
    }

    /// Summed ambient color (color × intensity over all ambient lights).
    pub fn ambient(&self) -> [f32; 3] {
        if self.ambient.is_empty() {
            return [1.0, 1.0, 1.0];
        }
        self.ambient.iter().fold([0.0; 3], |mut acc, light| {
            for (channel, c) in acc.iter_mut().zip(light.color) {
                *channel += c * light.intensity;
            }
            acc
        })
    }
}
