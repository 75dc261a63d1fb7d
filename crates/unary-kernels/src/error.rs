// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for kernel validation and evaluation.

use crate::UnaryOp;
use tensor_core::{DType, Shape};

/// Errors that can occur while preparing or evaluating a kernel.
///
/// All failures are reported synchronously to the caller. On failure
/// the output tensor's contents are unspecified; there is no partial
/// application guarantee and no retry policy (the kernels are pure,
/// so retrying with the same inputs reproduces the same failure).
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Input and output element types differ.
    #[error("dtype mismatch for {op}: input is {input}, output is {output}")]
    DTypeMismatch {
        op: UnaryOp,
        input: DType,
        output: DType,
    },

    /// The element type is not in the operator's accepted set.
    #[error("unsupported dtype {dtype} for {op}")]
    UnsupportedDType { op: UnaryOp, dtype: DType },

    /// Input and output shapes differ at evaluation time.
    #[error("shape mismatch for {op}: input {input} vs output {output}")]
    ShapeMismatch {
        op: UnaryOp,
        input: Shape,
        output: Shape,
    },

    /// Quantized evaluation requires numerically equal input and
    /// output scales; no rescaling fallback exists.
    #[error("quantized {op} requires equal scales: input {input_scale}, output {output_scale}")]
    ScaleMismatch {
        op: UnaryOp,
        input_scale: f32,
        output_scale: f32,
    },

    /// An i8 tensor reached the quantized path without quantization
    /// parameters attached.
    #[error("missing quantization parameters on {side} tensor for {op}")]
    MissingQuantParams { op: UnaryOp, side: &'static str },
}
