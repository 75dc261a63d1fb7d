// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Generic prepare phase: dtype validation and output shape resolution.

use crate::{KernelError, UnaryOp};
use tensor_core::{Tensor, TensorView};

/// Validates the input/output pair for `op` and resizes the output
/// tensor's shape to an exact copy of the input shape.
///
/// Run once per shape-change event, before any evaluation. Checks, in
/// order:
/// 1. input and output share an element type;
/// 2. that type satisfies the operator's accepted-dtype predicate.
///
/// On failure the output tensor is left untouched. On success only the
/// output's shape descriptor and backing buffer size change; element
/// contents are never written here. Arity (exactly one input, one
/// output) is structural in the signature.
///
/// # Errors
/// Returns [`KernelError::DTypeMismatch`] if the element types differ.
/// Returns [`KernelError::UnsupportedDType`] if the type is outside
/// the operator's accepted set.
pub fn prepare(
    op: UnaryOp,
    input: &TensorView<'_>,
    output: &mut Tensor,
) -> Result<(), KernelError> {
    if input.dtype() != output.dtype() {
        return Err(KernelError::DTypeMismatch {
            op,
            input: input.dtype(),
            output: output.dtype(),
        });
    }

    if !op.supports(input.dtype()) {
        return Err(KernelError::UnsupportedDType {
            op,
            dtype: input.dtype(),
        });
    }

    tracing::debug!("prepare {op}: output resized to {}", input.shape());
    output.resize(input.shape().clone());
    Ok(())
}
