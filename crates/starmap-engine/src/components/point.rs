/// Linear RGB color for point rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl PointColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Gray level with all three channels equal.
    pub const fn gray(level: f32) -> Self {
        Self { r: level, g: level, b: level }
    }
}

impl Default for PointColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Component for entities drawn as a filled disc / sprite point.
///
/// `size` is the circle radius for 2D canvases and the point size for 3D
/// scenes; the host decides how to interpret it for its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointComponent {
    pub size: f32,
    pub color: PointColor,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Default for PointComponent {
    fn default() -> Self {
        Self {
            size: 1.0,
            color: PointColor::default(),
            alpha: 1.0,
        }
    }
}

impl PointComponent {
    pub fn new(size: f32, color: PointColor) -> Self {
        Self {
            size,
            color,
            ..Default::default()
        }
    }
}
