// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Facade for the bool-only logical operator.

use crate::{dense, KernelError, UnaryOp};
use tensor_core::{Tensor, TensorView};

/// Computes element-wise logical negation.
pub fn logical_not(input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
    dense::eval(UnaryOp::LogicalNot, input, output)
}
