//! Per-element sampling context for kernel bodies

use super::philox::PhiloxStream;
use std::f32::consts::TAU;

/// Scale mapping the top 24 bits of a word onto `[0, 1)`
const F32_SCALE: f32 = 1.0 / (1u32 << 24) as f32;
/// Scale mapping the top 53 bits of a word onto `[0, 1)`
const F64_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Largest `f32` strictly below `x` (finite `x`)
fn f32_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Largest `f64` strictly below `x` (finite `x`)
fn f64_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// Map `u` in `[0, 1)` onto `[a, b)`, pulling rounded-up results below `b`
#[inline]
fn scale_f32(u: f32, a: f32, b: f32) -> f32 {
    let v = a + u * (b - a);
    if a < b && v >= b { f32_below(b) } else { v }
}

#[inline]
fn scale_f64(u: f64, a: f64, b: f64) -> f64 {
    let v = a + u * (b - a);
    if a < b && v >= b { f64_below(b) } else { v }
}

/// Random sampling primitives available inside a kernel
///
/// A launch hands each element its own `Sampler`, so calls inside one
/// kernel body are independent of every other element's calls. All float
/// primitives work in `f32`, the shading `float`.
///
/// ```ignore
/// client.launch(&mut x, |_, s| s.rand() * s.rand())?;
/// client.launch_vec(&mut dirs, |_, s| s.rand_unit_2d())?;
/// ```
#[derive(Clone, Debug)]
pub struct Sampler {
    stream: PhiloxStream,
}

impl Sampler {
    /// Sampler for element `index` of launch `launch` under `seed`
    pub fn new(seed: u64, launch: u64, index: u64) -> Self {
        Self {
            stream: PhiloxStream::new(seed, launch, index),
        }
    }

    /// Uniform `f32` in `[0, 1)`
    ///
    /// Uses the top 24 bits of one word, so every value is exactly
    /// representable and strictly below 1.
    #[inline]
    pub fn rand(&mut self) -> f32 {
        (self.stream.next_u32() >> 8) as f32 * F32_SCALE
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of resolution
    #[inline]
    pub fn rand_f64(&mut self) -> f64 {
        (self.stream.next_u64() >> 11) as f64 * F64_SCALE
    }

    /// Uniform `f32` in `[a, b)`
    ///
    /// The upper bound is excluded even where `a + u * (b - a)` rounds up
    /// to `b`. With `b <= a` the affine map is returned unclamped.
    #[inline]
    pub fn rand_range(&mut self, a: f32, b: f32) -> f32 {
        scale_f32(self.rand(), a, b)
    }

    /// Uniform `f64` in `[a, b)`, same bound handling as [`Self::rand_range`]
    #[inline]
    pub fn rand_range_f64(&mut self, a: f64, b: f64) -> f64 {
        scale_f64(self.rand_f64(), a, b)
    }

    /// Uniform integer in `[a, b)`
    ///
    /// Computed as `a + floor(u * (b - a))` with a 32-bit fixed-point `u`,
    /// so the upper bound is never produced. Returns `a` when `b <= a`.
    #[inline]
    pub fn rand_int(&mut self, a: i32, b: i32) -> i32 {
        if b <= a {
            return a;
        }
        let span = (b as i64 - a as i64) as u64;
        let offset = (self.stream.next_u32() as u64 * span) >> 32;
        (a as i64 + offset as i64) as i32
    }

    /// Vector of `N` independent uniforms in `[0, 1)`
    #[inline]
    pub fn rand_nd<const N: usize>(&mut self) -> [f32; N] {
        std::array::from_fn(|_| self.rand())
    }

    /// Vector of `N` independent uniforms, component `k` in `[a[k], b[k])`
    #[inline]
    pub fn rand_nd_range<const N: usize>(&mut self, a: [f32; N], b: [f32; N]) -> [f32; N] {
        std::array::from_fn(|k| self.rand_range(a[k], b[k]))
    }

    /// Uniform direction on the unit circle
    #[inline]
    pub fn rand_unit_2d(&mut self) -> [f32; 2] {
        let theta = self.rand() * TAU;
        let (s, c) = theta.sin_cos();
        [c, s]
    }

    /// Uniform point inside the unit disk
    #[inline]
    pub fn rand_solid_2d(&mut self) -> [f32; 2] {
        let [c, s] = self.rand_unit_2d();
        let r = self.rand().sqrt();
        [c * r, s * r]
    }

    /// Uniform direction on the unit sphere
    #[inline]
    pub fn rand_unit_3d(&mut self) -> [f32; 3] {
        let z = self.rand_range(-1.0, 1.0);
        let [c, s] = self.rand_unit_2d();
        let r = (1.0 - z * z).max(0.0).sqrt();
        [c * r, s * r, z]
    }

    /// Standard normal variate via the Box-Muller transform
    #[inline]
    pub fn rand_normal(&mut self) -> f32 {
        // Clamp to avoid ln(0)
        let u1 = self.rand_f64().max(1e-10);
        let u2 = self.rand_f64();
        let r = (-2.0 * u1.ln()).sqrt();
        (r * (std::f64::consts::TAU * u2).cos()) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samplers(n: u64) -> impl Iterator<Item = Sampler> {
        (0..n).map(|i| Sampler::new(1234, 0, i))
    }

    #[test]
    fn test_rand_in_unit_interval() {
        for mut s in samplers(2000) {
            let u = s.rand();
            assert!((0.0..1.0).contains(&u), "rand value {} out of range", u);
            let v = s.rand_f64();
            assert!((0.0..1.0).contains(&v), "rand_f64 value {} out of range", v);
        }
    }

    #[test]
    fn test_rand_int_bounds() {
        let mut seen_low = false;
        let mut seen_high = false;
        for mut s in samplers(5000) {
            let k = s.rand_int(3, 7);
            assert!((3..7).contains(&k), "rand_int value {} out of range", k);
            seen_low |= k == 3;
            seen_high |= k == 6;
        }
        assert!(seen_low && seen_high, "both ends of [3, 7) should appear");
    }

    #[test]
    fn test_rand_int_full_i32_span() {
        for mut s in samplers(1000) {
            let k = s.rand_int(i32::MIN, i32::MAX);
            assert!(k < i32::MAX);
        }
    }

    #[test]
    fn test_rand_int_empty_range_returns_low() {
        let mut s = Sampler::new(0, 0, 0);
        assert_eq!(s.rand_int(5, 5), 5);
        assert_eq!(s.rand_int(5, 2), 5);
    }

    #[test]
    fn test_rand_nd_range_components() {
        for mut s in samplers(500) {
            let v = s.rand_nd_range([0.0, 10.0, -2.0], [1.0, 11.0, -1.0]);
            assert!((0.0..1.0).contains(&v[0]));
            assert!((10.0..11.0).contains(&v[1]));
            assert!((-2.0..-1.0).contains(&v[2]));
        }
    }

    #[test]
    fn test_range_excludes_upper_bound_at_max_uniform() {
        let u_max = 1.0 - F32_SCALE;
        for (a, b) in [(1.0f32, 3.0f32), (100.0, 101.0), (-2.0, -1.0), (-1.0, 0.0)] {
            let v = scale_f32(u_max, a, b);
            assert!(v < b, "max uniform mapped to {} for [{}, {})", v, a, b);
            assert!(v >= a);
        }

        let u_max = 1.0 - F64_SCALE;
        for (a, b) in [(1.0f64, 3.0f64), (1e15, 1e15 + 1.0), (-3.0, 5.0)] {
            let v = scale_f64(u_max, a, b);
            assert!(v < b, "max uniform mapped to {} for [{}, {})", v, a, b);
        }
    }

    #[test]
    fn test_below_steps_one_ulp() {
        assert_eq!(f32_below(1.0), 1.0 - f32::EPSILON / 2.0);
        assert_eq!(f32_below(-1.0), -1.0 - f32::EPSILON);
        assert!(f32_below(0.0) < 0.0);
        assert_eq!(f64_below(2.0), 2.0 - f64::EPSILON);
    }

    #[test]
    fn test_unit_directions_have_unit_length() {
        for mut s in samplers(500) {
            let [x, y] = s.rand_unit_2d();
            assert!(((x * x + y * y) - 1.0).abs() < 1e-5);

            let [x, y, z] = s.rand_unit_3d();
            assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_solid_2d_inside_disk() {
        for mut s in samplers(500) {
            let [x, y] = s.rand_solid_2d();
            assert!(x * x + y * y <= 1.0 + 1e-6);
        }
    }
}
