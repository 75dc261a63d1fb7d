// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # unary-kernels
//!
//! Unary element-wise tensor kernels: one input tensor in, one output
//! tensor of identical shape out, produced by applying a pure scalar
//! function per element.
//!
//! Supported operators: absolute value, sine, cosine, natural log,
//! square root, reciprocal square root, square, and logical negation.
//! Float and bool tensors go through the dense evaluator; absolute
//! value additionally supports i8 tensors under affine quantization,
//! computed entirely in integer arithmetic with saturating clamps.
//!
//! # Usage
//! Each operator has two phases, mirroring a prepare/eval host
//! contract:
//! - [`prepare`] (or [`UnaryOp::prepare`]) validates dtypes once per
//!   shape change and resizes the output to match the input.
//! - A facade in [`ops`] (or [`UnaryOp::eval`]) applies the scalar
//!   function over the flat buffer once per invocation.
//!
//! ```
//! use tensor_core::{DType, Shape, Tensor};
//! use unary_kernels::{ops, prepare, UnaryOp};
//!
//! let input = Tensor::from_f32(Shape::vector(3), &[0.0, 1.0, 4.0]).unwrap();
//! let mut output = Tensor::zeros(Shape::scalar(), DType::F32);
//!
//! prepare(UnaryOp::Sqrt, &input.view(), &mut output).unwrap();
//! ops::sqrt(&input.view(), &mut output).unwrap();
//! assert_eq!(output.as_f32_slice(), &[0.0, 1.0, 2.0]);
//! ```
//!
//! The crate is synchronous and holds no state across calls; tensors
//! are borrowed for the duration of a single call.

mod dense;
mod error;
mod op;
pub mod ops;
mod prepare;
mod quantized;

pub use error::KernelError;
pub use op::{UnaryFn, UnaryOp};
pub use prepare::prepare;
