// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dense element-wise evaluator for the float and bool domains.
//!
//! Applies `out[i] = f(in[i])` over the flat buffers. O(n) in element
//! count, no additional allocation. Empty tensors are a no-op.

use crate::{KernelError, UnaryFn, UnaryOp};
use tensor_core::{DType, Tensor, TensorView};

/// Evaluates `op` by applying its registered scalar function.
///
/// Selects the float or bool path from [`UnaryOp::scalar_fn`]. Used by
/// every facade except the quantized Abs branch.
pub(crate) fn eval(
    op: UnaryOp,
    input: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), KernelError> {
    match op.scalar_fn() {
        UnaryFn::Float(f) => eval_float(op, input, output, f),
        UnaryFn::Bool(f) => eval_bool(op, input, output, f),
    }
}

/// Applies a float scalar function element-wise.
///
/// # Errors
/// Returns [`KernelError::UnsupportedDType`] if the input is not `F32`,
/// [`KernelError::DTypeMismatch`] if the output dtype differs, and
/// [`KernelError::ShapeMismatch`] if the shapes differ.
pub(crate) fn eval_float(
    op: UnaryOp,
    input: &TensorView<'_>,
    output: &mut Tensor,
    f: fn(f32) -> f32,
) -> Result<(), KernelError> {
    check_pair(op, input, output, DType::F32)?;

    let src = input.as_f32_slice();
    let dst = output.as_f32_slice_mut();
    for (d, &x) in dst.iter_mut().zip(src.iter()) {
        *d = f(x);
    }

    Ok(())
}

/// Applies a bool scalar function element-wise.
pub(crate) fn eval_bool(
    op: UnaryOp,
    input: &TensorView<'_>,
    output: &mut Tensor,
    f: fn(bool) -> bool,
) -> Result<(), KernelError> {
    check_pair(op, input, output, DType::Bool)?;

    let src = input.as_bool_slice();
    let dst = output.as_bool_slice_mut();
    for (d, &v) in dst.iter_mut().zip(src.iter()) {
        *d = f(v);
    }

    Ok(())
}

/// Shared dtype/shape checks for both evaluator paths.
fn check_pair(
    op: UnaryOp,
    input: &TensorView<'_>,
    output: &Tensor,
    expected: DType,
) -> Result<(), KernelError> {
    if input.dtype() != expected {
        return Err(KernelError::UnsupportedDType {
            op,
            dtype: input.dtype(),
        });
    }
    if output.dtype() != input.dtype() {
        return Err(KernelError::DTypeMismatch {
            op,
            input: input.dtype(),
            output: output.dtype(),
        });
    }
    if input.shape() != output.shape() {
        return Err(KernelError::ShapeMismatch {
            op,
            input: input.shape().clone(),
            output: output.shape().clone(),
        });
    }
    Ok(())
}
