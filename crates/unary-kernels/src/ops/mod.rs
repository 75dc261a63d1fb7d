// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-operator evaluation facades.
//!
//! One entry point per supported operator. All of them assume the pair
//! passed [`crate::prepare`] for the same operator; evaluation
//! re-checks dtypes and shapes and fails cleanly rather than reading
//! out of bounds.

mod abs_op;
mod logical_op;
mod numeric_op;

pub use abs_op::abs;
pub use logical_op::logical_not;
pub use numeric_op::{cos, log, rsqrt, sin, sqrt, square};
