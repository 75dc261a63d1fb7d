// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Lightweight tensor types for unary element-wise kernels.
//!
//! This crate provides:
//! - [`Tensor`] — an owned, contiguous, row-major tensor of a single
//!   primitive element type.
//! - [`TensorView`] — a zero-copy, read-only view over a tensor.
//! - [`Shape`] — runtime shape descriptors.
//! - [`DType`] — supported element data types (f32, i8, bool).
//! - [`QuantParams`] — affine quantization metadata for i8 tensors.
//!
//! # Design Goals
//! - Zero-copy views wherever possible.
//! - No heap allocation in hot paths (kernels work on pre-allocated buffers).
//! - Clean error types via `thiserror`.

mod dtype;
mod error;
mod quant;
mod shape;
mod tensor;

pub use dtype::DType;
pub use error::TensorError;
pub use quant::QuantParams;
pub use shape::Shape;
pub use tensor::{Tensor, TensorView};
