use std::ops::{Add, Mul};

/// Linear RGB colour sample.
///
/// Channels are unbounded linear radiance as traced, clamped to 0-1 by
/// [`Colour::saturate`], and display-referred after [`Colour::to_srgb`].
/// Scaling to byte range happens in the presenters, never here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Clamps each channel to 0-1. Idempotent.
    #[must_use]
    pub fn saturate(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Applies the piecewise sRGB transfer curve to each channel.
    ///
    /// Channels must already be saturated to 0-1; gamma encoding is only
    /// defined on that range.
    #[must_use]
    pub fn to_srgb(self) -> Self {
        Self {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
        }
    }

    /// Per-channel arithmetic mean of two samples.
    #[must_use]
    pub fn average(a: Self, b: Self) -> Self {
        (a + b) * 0.5
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    debug_assert!(
        (0.0..=1.0).contains(&c),
        "gamma encoding expects a saturated channel, got {}",
        c
    );

    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl Add for Colour {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl Mul<f32> for Colour {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self {
            r: self.r * scale,
            g: self.g * scale,
            b: self.b * scale,
        }
    }
}
