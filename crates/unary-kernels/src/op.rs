// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operator identities and the scalar function registry.

use crate::{ops, prepare, KernelError};
use tensor_core::{DType, Tensor, TensorView};

/// Identifies one of the supported unary element-wise operators.
///
/// Each operator carries its accepted-dtype predicate
/// ([`supports`](UnaryOp::supports)) and its scalar function
/// ([`scalar_fn`](UnaryOp::scalar_fn)) as data, selected by a single
/// match. The set is closed; hosts dispatching on a runtime operator
/// identity go through [`prepare`](UnaryOp::prepare) and
/// [`eval`](UnaryOp::eval).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Absolute value. Accepts `F32`, and `I8` under affine quantization.
    Abs,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Natural logarithm.
    Log,
    /// Square root.
    Sqrt,
    /// Reciprocal square root, `1/sqrt(x)`.
    Rsqrt,
    /// Square, `x*x`.
    Square,
    /// Boolean negation.
    LogicalNot,
}

/// A pure scalar function applied per element by the dense evaluator.
#[derive(Debug, Clone, Copy)]
pub enum UnaryFn {
    /// Float-to-float function for numeric operators.
    Float(fn(f32) -> f32),
    /// Bool-to-bool function for logical operators.
    Bool(fn(bool) -> bool),
}

impl UnaryOp {
    /// All supported operators, in registration order.
    pub const ALL: [UnaryOp; 8] = [
        UnaryOp::Abs,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Log,
        UnaryOp::Sqrt,
        UnaryOp::Rsqrt,
        UnaryOp::Square,
        UnaryOp::LogicalNot,
    ];

    /// Returns the operator's lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Abs => "abs",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Log => "log",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Rsqrt => "rsqrt",
            UnaryOp::Square => "square",
            UnaryOp::LogicalNot => "logical_not",
        }
    }

    /// Returns `true` if this operator accepts tensors of `dtype`.
    ///
    /// Numeric operators accept `F32` only; `LogicalNot` accepts
    /// `Bool` only; `Abs` additionally accepts `I8` (quantized path).
    pub fn supports(self, dtype: DType) -> bool {
        match self {
            UnaryOp::LogicalNot => dtype == DType::Bool,
            UnaryOp::Abs => matches!(dtype, DType::F32 | DType::I8),
            _ => dtype == DType::F32,
        }
    }

    /// Returns the scalar function for the dense evaluator.
    ///
    /// Total over the operator set. For `Abs` this is the float path;
    /// the quantized i8 path never consults it.
    pub fn scalar_fn(self) -> UnaryFn {
        match self {
            UnaryOp::Abs => UnaryFn::Float(f32::abs),
            UnaryOp::Sin => UnaryFn::Float(f32::sin),
            UnaryOp::Cos => UnaryFn::Float(f32::cos),
            UnaryOp::Log => UnaryFn::Float(f32::ln),
            UnaryOp::Sqrt => UnaryFn::Float(f32::sqrt),
            UnaryOp::Rsqrt => UnaryFn::Float(|x| 1.0 / x.sqrt()),
            UnaryOp::Square => UnaryFn::Float(|x| x * x),
            UnaryOp::LogicalNot => UnaryFn::Bool(|v| !v),
        }
    }

    /// Prepare phase: validates dtypes and resizes the output to the
    /// input's shape. Run once per shape-change event.
    pub fn prepare(
        self,
        input: &TensorView<'_>,
        output: &mut Tensor,
    ) -> Result<(), KernelError> {
        prepare(self, input, output)
    }

    /// Evaluation phase: applies the operator over the flat buffers.
    pub fn eval(self, input: &TensorView<'_>, output: &mut Tensor) -> Result<(), KernelError> {
        match self {
            UnaryOp::Abs => ops::abs(input, output),
            UnaryOp::Sin => ops::sin(input, output),
            UnaryOp::Cos => ops::cos(input, output),
            UnaryOp::Log => ops::log(input, output),
            UnaryOp::Sqrt => ops::sqrt(input, output),
            UnaryOp::Rsqrt => ops::rsqrt(input, output),
            UnaryOp::Square => ops::square(input, output),
            UnaryOp::LogicalNot => ops::logical_not(input, output),
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
