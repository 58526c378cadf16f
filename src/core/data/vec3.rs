use std::ops::{Add, Mul, Neg, Sub};

// implement the small amount of vector maths the demo scenes need
// instead of pulling in a linear algebra crate
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[must_use]
    pub fn normalised(self) -> Self {
        self * (1.0 / self.length())
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vec3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let b = Vec3 {
            x: 4.0,
            y: -5.0,
            z: 6.0,
        };

        assert_eq!(a.dot(b), 12.0); // 4 - 10 + 18
    }

    #[test]
    fn test_length() {
        let v = Vec3 {
            x: 3.0,
            y: 4.0,
            z: 0.0,
        };

        assert_eq!(v.length(), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn test_normalised_has_unit_length() {
        let v = Vec3 {
            x: 2.0,
            y: -3.0,
            z: 6.0,
        };
        let n = v.normalised();

        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalised_preserves_direction() {
        let v = Vec3 {
            x: 0.0,
            y: 0.0,
            z: 7.0,
        };
        let n = v.normalised();

        assert_eq!(n.x, 0.0);
        assert_eq!(n.y, 0.0);
        assert_eq!(n.z, 1.0);
    }

    #[test]
    fn test_sub_and_neg() {
        let a = Vec3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let b = Vec3 {
            x: 0.5,
            y: 0.5,
            z: 0.5,
        };
        let diff = a - b;

        assert_eq!(diff.x, 0.5);
        assert_eq!(diff.y, 1.5);
        assert_eq!(diff.z, 2.5);
        assert_eq!(-diff.x, -0.5);
    }

    #[test]
    fn test_mul_by_scalar() {
        let v = Vec3 {
            x: 1.0,
            y: -2.0,
            z: 0.25,
        };
        let scaled = v * 4.0;

        assert_eq!(scaled.x, 4.0);
        assert_eq!(scaled.y, -8.0);
        assert_eq!(scaled.z, 1.0);
    }
}
