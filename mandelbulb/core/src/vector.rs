use core::ops::Add;

use mandelbulb_core_maths::MathsCore;

#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// Spherical coordinates, with `theta` measured from the z axis and `phi` in
/// the xy plane.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Polar {
    pub r: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Polar {
    #[must_use]
    #[debug_ensures(ret.r >= 0.0 || ret.r.is_nan(), "radius is non-negative")]
    pub fn from_cartesian<M: MathsCore>(v: Vector) -> Self {
        let xy_squared = v.x * v.x + v.y * v.y;

        Self {
            r: M::sqrt(xy_squared + v.z * v.z),
            theta: M::atan2(M::sqrt(xy_squared), v.z),
            phi: M::atan2(v.y, v.x),
        }
    }

    /// The White-Nylander power map: raises the radius to `n` and multiplies
    /// both angles by `n`.
    #[must_use]
    pub fn power<M: MathsCore>(self, n: f32) -> Vector {
        let radius = M::pow(self.r, n);
        let (theta, phi) = (self.theta * n, self.phi * n);

        Vector {
            x: radius * M::sin(theta) * M::cos(phi),
            y: radius * M::sin(theta) * M::sin(phi),
            z: radius * M::cos(theta),
        }
    }
}
