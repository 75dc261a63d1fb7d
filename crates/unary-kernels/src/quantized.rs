// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Quantized affine evaluator for absolute value on i8 tensors.

use crate::{KernelError, UnaryOp};
use tensor_core::{DType, QuantParams, Tensor, TensorView};

/// Computes absolute value over affine-quantized i8 buffers without
/// round-tripping through float.
///
/// Only the case where input and output share the same quantization
/// scale is supported; the zero points may differ. Per element, in
/// widened i32 arithmetic:
///
/// ```text
/// centered = in[i] - in_zero_point
/// val      = if centered < 0 { out_zero_point - centered }
///            else            { out_zero_point + centered }
/// out[i]   = clamp(val, i8::MIN, i8::MAX) as i8
/// ```
///
/// The negative branch is `out_zero_point - centered`, not
/// `out_zero_point + centered.abs()`; with equal scales the stored
/// convention already yields the dequantized magnitude through this
/// relation, and it must match the reference vectors exactly.
/// The clamp saturates at the storage range, so an input at `i8::MIN`
/// cannot overflow when negated.
///
/// # Errors
/// Returns [`KernelError::ScaleMismatch`] if the scales differ (no
/// silent fallback), [`KernelError::MissingQuantParams`] if either
/// tensor lacks parameters, and the usual dtype/shape errors.
pub(crate) fn abs_quantized(
    input: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), KernelError> {
    const OP: UnaryOp = UnaryOp::Abs;

    if input.dtype() != DType::I8 {
        return Err(KernelError::UnsupportedDType {
            op: OP,
            dtype: input.dtype(),
        });
    }
    if output.dtype() != DType::I8 {
        return Err(KernelError::DTypeMismatch {
            op: OP,
            input: input.dtype(),
            output: output.dtype(),
        });
    }
    if input.shape() != output.shape() {
        return Err(KernelError::ShapeMismatch {
            op: OP,
            input: input.shape().clone(),
            output: output.shape().clone(),
        });
    }

    let in_q = quant_of(input.quant_params(), "input")?;
    let out_q = quant_of(output.quant_params(), "output")?;
    if in_q.scale != out_q.scale {
        return Err(KernelError::ScaleMismatch {
            op: OP,
            input_scale: in_q.scale,
            output_scale: out_q.scale,
        });
    }

    let in_zp = in_q.zero_point;
    let out_zp = out_q.zero_point;
    let src = input.as_i8_slice();
    let dst = output.as_i8_slice_mut();

    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        let centered = s as i32 - in_zp;
        let val = if centered < 0 {
            out_zp - centered
        } else {
            out_zp + centered
        };
        *d = val.clamp(i8::MIN as i32, i8::MAX as i32) as i8;
    }

    Ok(())
}

fn quant_of(
    params: Option<QuantParams>,
    side: &'static str,
) -> Result<QuantParams, KernelError> {
    params.ok_or(KernelError::MissingQuantParams {
        op: UnaryOp::Abs,
        side,
    })
}
