use rand::Rng;

/// Random float in `[min, max)`.
pub fn random_float(min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// Random integer in `[min, max)`.
pub fn random_int(min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rand::thread_rng().gen_range(min..max)
}

/// A 16-digit random value, zero padded, as displayed by the random
/// number sketch.
pub fn random_digits16() -> String {
    let value: u64 = rand::thread_rng().gen_range(0..10_u64.pow(16));
    format!("{value:016}")
}

/// Linear map of `value` from `[in_min, in_max]` to `[out_min, out_max]`,
/// clamped to the output range.
pub fn scale(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let result = (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
    result.clamp(out_min.min(out_max), out_min.max(out_max))
}

pub fn zero_padding(num: u32, length: usize) -> String {
    format!("{num:0length$}")
}

pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (std::f32::consts::PI / 180.0)
}

/// Moves `current` toward `target` by `factor` of the remaining arc,
/// taking the short way around the circle.
pub fn ease_angle(current: f32, target: f32, factor: f32) -> f32 {
    let mut diff = target - current;
    while diff > std::f32::consts::PI {
        diff -= std::f32::consts::TAU;
    }
    while diff < -std::f32::consts::PI {
        diff += std::f32::consts::TAU;
    }
    current + diff * factor
}

/// Smooth 2-D value noise in `[-1, 1]`, deterministic in its inputs.
/// Hash lattice with smoothstep interpolation; enough for the needle
/// and wind fields, which only need a coherent perturbation.
pub fn noise2(x: f32, y: f32) -> f32 {
    fn lattice(ix: i32, iy: i32) -> f32 {
        let mut h = (ix as u32).wrapping_mul(0x85eb_ca6b) ^ (iy as u32).wrapping_mul(0xc2b2_ae35);
        h ^= h >> 13;
        h = h.wrapping_mul(0x27d4_eb2f);
        h ^= h >> 16;
        (h as f32 / u32::MAX as f32) * 2.0 - 1.0
    }

    fn smoothstep(t: f32) -> f32 {
        t * t * (3.0 - 2.0 * t)
    }

    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = x - x.floor();
    let fy = y - y.floor();

    let v00 = lattice(ix, iy);
    let v10 = lattice(ix + 1, iy);
    let v01 = lattice(ix, iy + 1);
    let v11 = lattice(ix + 1, iy + 1);

    let sx = smoothstep(fx);
    let sy = smoothstep(fy);

    let a = v00 + (v10 - v00) * sx;
    let b = v01 + (v11 - v01) * sx;
    a + (b - a) * sy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_and_clamps() {
        assert_eq!(scale(2.5, 0.0, 5.0, 0.5, 1.0), 0.75);
        assert_eq!(scale(-1.0, 0.0, 5.0, 0.5, 1.0), 0.5);
        assert_eq!(scale(99.0, 0.0, 5.0, 0.5, 1.0), 1.0);
    }

    #[test]
    fn zero_padding_pads_to_length() {
        assert_eq!(zero_padding(7, 2), "07");
        assert_eq!(zero_padding(123, 4), "0123");
        assert_eq!(zero_padding(123, 2), "123");
    }

    #[test]
    fn random_float_stays_in_range() {
        for _ in 0..100 {
            let v = random_float(2.0, 3.0);
            assert!((2.0..3.0).contains(&v));
        }
    }

    #[test]
    fn random_digits16_is_sixteen_digits() {
        let s = random_digits16();
        assert_eq!(s.len(), 16);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn noise2_is_deterministic_and_bounded() {
        assert_eq!(noise2(1.3, 4.7), noise2(1.3, 4.7));
        for i in 0..50 {
            for j in 0..50 {
                let v = noise2(i as f32 * 0.17, j as f32 * 0.23);
                assert!((-1.0..=1.0).contains(&v), "out of range: {v}");
            }
        }
    }
}
