// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Absolute value over float and affine-quantized i8 tensors.

use crate::{dense, quantized, KernelError, UnaryOp};
use tensor_core::{DType, Tensor, TensorView};

/// Computes element-wise absolute value.
///
/// Branches on the input's storage type: `F32` goes through the dense
/// evaluator with the float absolute value; `I8` goes through the
/// quantized affine evaluator, which requires equal input/output
/// scales. Any other dtype is rejected without falling through to
/// either evaluator.
///
/// # Errors
/// Returns [`KernelError::UnsupportedDType`] for dtypes other than
/// `F32`/`I8`, plus the respective evaluator's errors.
pub fn abs(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    match input.dtype() {
        DType::F32 => dense::eval(UnaryOp::Abs, input, output),
        DType::I8 => quantized::abs_quantized(input, output),
        dtype => Err(KernelError::UnsupportedDType {
            op: UnaryOp::Abs,
            dtype,
        }),
    }
}
