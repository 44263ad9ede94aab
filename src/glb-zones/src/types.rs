//! Small vector types shared by the extractor and the output formats

use serde::{Deserialize, Serialize};

/// Three-component vector, serialized as `{x, y, z}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Editor space (Z up) to viewer space (Y up): swap Y and Z
    ///
    /// No sign flip or scaling. The swap is its own inverse.
    pub const fn to_viewer(self) -> Self {
        Self {
            x: self.x,
            y: self.z,
            z: self.y,
        }
    }

    /// Round each component to `decimals` places
    ///
    /// Components too large to scale without overflowing are left as they are.
    pub fn rounded(self, decimals: i32) -> Self {
        let factor = 10f64.powi(decimals);
        let round = |v: f64| {
            let scaled = v * factor;
            if scaled.is_finite() {
                scaled.round() / factor
            } else {
                v
            }
        };
        Self::new(round(self.x), round(self.y), round(self.z))
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self::from_array(value)
    }
}

/// Rotation quaternion in glTF `[x, y, z, w]` order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn from_array([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self::from_array(value)
    }
}
