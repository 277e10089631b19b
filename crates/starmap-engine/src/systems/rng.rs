//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic across platforms, so point clouds are reproducible in tests.

use glam::Vec3;

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1). Uses the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniformly distributed direction on the unit sphere.
    ///
    /// Azimuth is uniform in [0, 2π); the polar angle is `acos(2v - 1)`, which
    /// keeps the density even instead of bunching points at the poles.
    pub fn unit_vector(&mut self) -> Vec3 {
        let theta = std::f64::consts::TAU * self.next_f64();
        let phi = (2.0 * self.next_f64() - 1.0).acos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Vec3::new(
            (sin_phi * theta.cos()) as f32,
            (sin_phi * theta.sin()) as f32,
            cos_phi as f32,
        )
    }
}
