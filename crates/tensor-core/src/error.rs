// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction.

/// Errors that can occur when constructing a tensor.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The provided buffer size does not match the expected size for the given shape and dtype.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A raw byte for a bool tensor was neither 0 nor 1.
    #[error("invalid bool byte {value} at index {index}")]
    InvalidBoolValue { index: usize, value: u8 },
}
