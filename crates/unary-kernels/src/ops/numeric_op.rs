// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Facades for the float-only numeric operators.

use crate::{dense, KernelError, UnaryOp};
use tensor_core::{Tensor, TensorView};

/// Computes element-wise sine.
pub fn sin(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Sin, input, output)
}

/// Computes element-wise cosine.
pub fn cos(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Cos, input, output)
}

/// Computes element-wise natural logarithm.
pub fn log(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Log, input, output)
}

/// Computes element-wise square root.
pub fn sqrt(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Sqrt, input, output)
}

/// Computes element-wise reciprocal square root, `1/sqrt(x)`.
pub fn rsqrt(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Rsqrt, input, output)
}

/// Computes element-wise square, `x*x`.
pub fn square(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::Square, input, output)
}
