use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective orbit camera with damped motion.
///
/// Input (drag, wheel, retargeting) only moves the *goal*; `update` eases the
/// visible state toward it every frame, the same way an orbit-controls widget
/// with damping behaves.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Rotation around the Y axis (radians).
    pub azimuth: f32,
    /// Angle above the XZ plane (radians).
    pub elevation: f32,
    /// Distance from target.
    pub distance: f32,
    /// Vertical field of view (radians).
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Fraction of the remaining gap kept per 1/60 s (0.0 = instant snap).
    smoothing: f32,
    goal_target: Vec3,
    goal_azimuth: f32,
    goal_elevation: f32,
    goal_distance: f32,
    /// Farthest the wheel may zoom out; grows to cover the framed sphere.
    zoom_limit: f32,
}

/// GPU-side uniform data for the camera: 20 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub distance: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(800.0 / 600.0)
    }
}

impl OrbitCamera {
    const ORBIT_SENSITIVITY: f32 = 0.008;
    const ZOOM_STEP: f32 = 1.1;
    pub const MIN_DISTANCE: f32 = 1.0;
    pub const MAX_DISTANCE: f32 = 100_000.0;
    pub const MAX_ELEVATION: f32 = 1.4;
    /// How much farther than a framed sphere's radius the camera sits.
    pub const FRAME_MARGIN: f32 = 1.5;

    pub fn new(aspect: f32) -> Self {
        let distance = 100.0;
        Self {
            target: Vec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
            distance,
            fov_y: 75f32.to_radians(),
            aspect,
            smoothing: 0.0,
            goal_target: Vec3::ZERO,
            goal_azimuth: 0.0,
            goal_elevation: 0.0,
            goal_distance: distance,
            zoom_limit: Self::MAX_DISTANCE,
        }
    }

    /// Set smoothing factor. 0.0 = instant snap, 0.95 ≈ 5% of the gap closed per frame.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Aim at `center` from `FRAME_MARGIN × radius` away, however large the
    /// sphere. Non-finite or non-positive radii leave the camera where it is.
    pub fn frame_sphere(&mut self, center: Vec3, radius: f32) {
        let distance = radius * Self::FRAME_MARGIN;
        if !(distance.is_finite() && radius > 0.0) {
            return;
        }
        self.goal_target = center;
        self.goal_distance = distance.max(Self::MIN_DISTANCE);
        self.zoom_limit = Self::MAX_DISTANCE.max(self.goal_distance);
    }

    /// Rotate by a pointer delta in screen units.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.goal_azimuth += dx * Self::ORBIT_SENSITIVITY;
        self.goal_elevation = (self.goal_elevation - dy * Self::ORBIT_SENSITIVITY)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom by wheel ticks (positive = closer).
    pub fn zoom(&mut self, ticks: f32) {
        self.goal_distance = (self.goal_distance / Self::ZOOM_STEP.powf(ticks))
            .clamp(Self::MIN_DISTANCE, self.zoom_limit);
    }

    /// Jump straight to the goal.
    pub fn snap(&mut self) {
        self.target = self.goal_target;
        self.azimuth = self.goal_azimuth;
        self.elevation = self.goal_elevation;
        self.distance = self.goal_distance;
    }

    /// Ease toward the goal for a frame of length `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.smoothing <= 0.0 {
            self.snap();
            return;
        }
        let t = 1.0 - self.smoothing.powf(dt * 60.0);
        self.target += (self.goal_target - self.target) * t;
        self.azimuth += (self.goal_azimuth - self.azimuth) * t;
        self.elevation += (self.goal_elevation - self.elevation) * t;
        self.distance += (self.goal_distance - self.distance) * t;
    }

    /// Distance the camera is easing toward.
    pub fn goal_distance(&self) -> f32 {
        self.goal_distance
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        self.target + Vec3::new(sin_az * cos_el, sin_el, cos_az * cos_el) * self.distance
    }

    /// Combined perspective × view matrix (GL clip space).
    pub fn view_projection(&self) -> Mat4 {
        // Keep the whole framed shell (far side at 2.5 × radius) inside the frustum.
        let near = (self.distance * 0.001).max(0.01);
        let far = self.distance * 4.0 + 1.0;
        let projection = Mat4::perspective_rh_gl(self.fov_y, self.aspect, near, far);
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Y);
        projection * view
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.eye().to_array(),
            distance: self.distance,
        }
    }
}
