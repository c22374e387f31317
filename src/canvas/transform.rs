//! Affine transform composition for the drawing frame.

/// A cached 3×3 affine transform over homogeneous row vectors.
///
/// Points transform as `p' = p · M` with `M = scale · rotate · translate`,
/// i.e. a point is scaled first, then rotated, then translated. The third
/// component stays 1 through an affine chain, so no homogeneous division is
/// performed when applying the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    m: [[f64; 3]; 3],
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Transform {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Composes the drawing transform from the three frame parameters.
    ///
    /// Rotation is counter-clockwise in screen coordinates (+y down).
    pub fn compose(origin: (f64, f64), scale: (f64, f64), rotation: f64) -> Self {
        let scale_m = [
            [scale.0, 0.0, 0.0],
            [0.0, scale.1, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let rotate_m = [
            [rotation.cos(), -rotation.sin(), 0.0],
            [rotation.sin(), rotation.cos(), 0.0],
            [0.0, 0.0, 1.0],
        ];
        let translate_m = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [origin.0, origin.1, 1.0],
        ];
        Transform {
            m: multiply(multiply(scale_m, rotate_m), translate_m),
        }
    }

    /// Maps a logical point to device coordinates.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let p = [x, y, 1.0];
        let mut out = [0.0; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            for (j, value) in p.iter().enumerate() {
                *slot += value * self.m[j][i];
            }
        }
        (out[0], out[1])
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

fn multiply(a: [[f64; 3]; 3], b: [[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for (k, row) in b.iter().enumerate() {
                out[i][j] += a[i][k] * row[j];
            }
        }
    }
    out
}
