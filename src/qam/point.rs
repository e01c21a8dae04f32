use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A symbol coordinate on the odd-integer I/Q lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolPoint {
    pub i: i32,
    pub q: i32,
}

impl SymbolPoint {
    pub const fn new(i: i32, q: i32) -> Self {
        Self { i, q }
    }

    pub fn is_origin(&self) -> bool {
        self.i == 0 && self.q == 0
    }

    /// Squared magnitude `i² + q²`
    pub fn power(&self) -> f64 {
        let (i, q) = (self.i as f64, self.q as f64);
        i * i + q * q
    }

    /// Distance from the origin, `sqrt(i² + q²)`
    pub fn energy(&self) -> f64 {
        self.power().sqrt()
    }

    /// Phase angle in radians, normalized to [0, 2π)
    pub fn phase(&self) -> f64 {
        let theta = (self.q as f64).atan2(self.i as f64);
        (theta + 2.0 * PI) % (2.0 * PI)
    }

    pub fn to_complex(&self) -> Complex64 {
        Complex64::new(self.i as f64, self.q as f64)
    }

    /// Same point with the sign of either coordinate flipped
    pub fn mirrored(&self, flip_i: bool, flip_q: bool) -> Self {
        Self {
            i: if flip_i { -self.i } else { self.i },
            q: if flip_q { -self.q } else { self.q },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_normalized() {
        assert!((SymbolPoint::new(1, 1).phase() - PI / 4.0).abs() < 1e-12);
        assert!((SymbolPoint::new(-1, -1).phase() - 5.0 * PI / 4.0).abs() < 1e-12);
        assert!((SymbolPoint::new(1, -1).phase() - 7.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_energy_and_power() {
        let p = SymbolPoint::new(3, -1);
        assert_eq!(p.power(), 10.0);
        assert!((p.energy() - 10f64.sqrt()).abs() < 1e-12);
        assert_eq!(p.to_complex(), Complex64::new(3.0, -1.0));
    }
}
