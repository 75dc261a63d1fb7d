// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Affine quantization metadata.

/// Affine quantization parameters for an integer tensor.
///
/// Stored values map to real values via
/// `real = scale * (stored - zero_point)`. The `scale` must be a
/// positive real; `zero_point` is the stored value representing real
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuantParams {
    /// Positive scale factor of the affine map.
    pub scale: f32,
    /// Stored integer value representing real zero.
    pub zero_point: i32,
}

impl QuantParams {
    /// Creates a new parameter pair.
    pub fn new(scale: f32, zero_point: i32) -> Self {
        Self { scale, zero_point }
    }

    /// Dequantizes a stored value back into real space.
    pub fn dequantize(&self, stored: i8) -> f32 {
        self.scale * (stored as i32 - self.zero_point) as f32
    }
}

impl std::fmt::Display for QuantParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(scale={}, zero_point={})", self.scale, self.zero_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequantize_zero_point_zero() {
        let q = QuantParams::new(0.01, 0);
        assert!((q.dequantize(100) - 1.0).abs() < 1e-6);
        assert!((q.dequantize(-100) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dequantize_shifted_zero_point() {
        let q = QuantParams::new(0.5, -10);
        // stored -10 is real zero.
        assert_eq!(q.dequantize(-10), 0.0);
        assert_eq!(q.dequantize(0), 5.0);
    }

    #[test]
    fn test_display() {
        let q = QuantParams::new(0.01, -10);
        assert_eq!(format!("{q}"), "(scale=0.01, zero_point=-10)");
    }
}
