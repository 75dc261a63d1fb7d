// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end prepare → eval flow.
//!
//! These tests exercise the complete host-facing contract for each
//! operator — prepare once per shape change, then evaluate — against
//! the reference vectors, proving that the validator, the registry,
//! and both evaluators compose correctly.

use tensor_core::{DType, QuantParams, Shape, Tensor};
use unary_kernels::{prepare, KernelError, UnaryOp};

// ── Helpers ────────────────────────────────────────────────────

fn approx_eq(a: &[f32], b: &[f32], tol: f32) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
}

/// Runs the full prepare → eval flow for a float operator. The output
/// starts with a deliberately wrong shape so the test also proves the
/// prepare phase resizes it.
fn run_float(op: UnaryOp, shape: Shape, values: &[f32]) -> Vec<f32> {
    let input = Tensor::from_f32(shape, values).unwrap();
    let mut output = Tensor::zeros(Shape::scalar(), DType::F32);

    op.prepare(&input.view(), &mut output).unwrap();
    assert_eq!(output.shape(), input.shape());

    op.eval(&input.view(), &mut output).unwrap();
    output.as_f32_slice().to_vec()
}

// ── Float scenarios ────────────────────────────────────────────

#[test]
fn sin_reference_vector() {
    let r = run_float(
        UnaryOp::Sin,
        Shape::new(vec![1, 1, 4, 1]),
        &[0.0, 3.1415926, -3.1415926, 1.0],
    );
    assert!(approx_eq(&r, &[0.0, 0.0, 0.0, 0.84147], 1e-4));
}

#[test]
fn cos_reference_vector() {
    let r = run_float(
        UnaryOp::Cos,
        Shape::new(vec![1, 1, 4, 1]),
        &[0.0, 3.1415926, -3.1415926, 1.0],
    );
    assert!(approx_eq(&r, &[1.0, -1.0, -1.0, 0.54030], 1e-4));
}

#[test]
fn log_reference_vector() {
    let r = run_float(
        UnaryOp::Log,
        Shape::new(vec![1, 1, 4, 1]),
        &[1.0, 3.1415926, 1.0, 1.0],
    );
    assert!(approx_eq(&r, &[0.0, 1.14473, 0.0, 0.0], 1e-4));
}

#[test]
fn abs_float_reference_vector() {
    let r = run_float(
        UnaryOp::Abs,
        Shape::new(vec![1, 2, 4, 1]),
        &[0.0, -6.2, 2.0, 4.0, 3.0, -2.0, 10.0, 1.0],
    );
    assert!(approx_eq(&r, &[0.0, 6.2, 2.0, 4.0, 3.0, 2.0, 10.0, 1.0], 1e-6));
}

#[test]
fn sqrt_reference_vector() {
    let r = run_float(UnaryOp::Sqrt, Shape::new(vec![1, 1, 4, 1]), &[0.0, 1.0, 2.0, 4.0]);
    assert!(approx_eq(&r, &[0.0, 1.0, 1.41421, 2.0], 1e-4));
}

#[test]
fn rsqrt_reference_vector() {
    let r = run_float(UnaryOp::Rsqrt, Shape::new(vec![1, 1, 4, 1]), &[1.0, 2.0, 4.0, 9.0]);
    assert!(approx_eq(&r, &[1.0, 0.7071, 0.5, 0.33333], 1e-4));
}

#[test]
fn square_reference_vector() {
    let r = run_float(UnaryOp::Square, Shape::new(vec![1, 1, 4, 1]), &[1.0, 2.0, 0.5, -3.0]);
    assert!(approx_eq(&r, &[1.0, 4.0, 0.25, 9.0], 1e-5));
}

#[test]
fn float_ops_are_idempotent() {
    let values = [0.25, 1.0, 2.5, 7.0];
    for op in [UnaryOp::Sqrt, UnaryOp::Rsqrt, UnaryOp::Log, UnaryOp::Square] {
        let a = run_float(op, Shape::vector(4), &values);
        let b = run_float(op, Shape::vector(4), &values);
        assert_eq!(a, b, "{op} must produce identical output on reruns");
    }
}

// ── Bool scenario ──────────────────────────────────────────────

#[test]
fn logical_not_reference_vector() {
    let input =
        Tensor::from_bool(Shape::new(vec![1, 1, 4, 1]), &[true, false, true, false]).unwrap();
    let mut output = Tensor::zeros(Shape::scalar(), DType::Bool);

    UnaryOp::LogicalNot.prepare(&input.view(), &mut output).unwrap();
    UnaryOp::LogicalNot.eval(&input.view(), &mut output).unwrap();

    assert_eq!(output.shape(), &Shape::new(vec![1, 1, 4, 1]));
    assert_eq!(output.as_bool_slice(), &[false, true, false, true]);
}

// ── Quantized scenarios ────────────────────────────────────────

fn run_quantized(values: &[i8], in_q: QuantParams, out_q: QuantParams) -> Result<Vec<i8>, KernelError> {
    let shape = Shape::new(vec![1, 1, values.len(), 1]);
    let input = Tensor::from_i8(shape, values, in_q).unwrap();
    let mut output = Tensor::zeros(Shape::scalar(), DType::I8).with_quant_params(out_q);

    UnaryOp::Abs.prepare(&input.view(), &mut output)?;
    UnaryOp::Abs.eval(&input.view(), &mut output)?;
    Ok(output.as_i8_slice().to_vec())
}

#[test]
fn quantized_abs_zero_point_zero() {
    let q = QuantParams::new(0.01, 0);
    let r = run_quantized(&[-127, 0, 0, 127], q, q).unwrap();
    assert_eq!(r, vec![127, 0, 0, 127]);
}

#[test]
fn quantized_abs_saturates() {
    let q = QuantParams::new(0.01, 0);
    let r = run_quantized(&[-128, 0, 0, 127], q, q).unwrap();
    assert_eq!(r, vec![127, 0, 0, 127]);
}

#[test]
fn quantized_abs_shifted_zero_point() {
    let q = QuantParams::new(0.01, -10);
    let r = run_quantized(&[-128, 0, 0, 12], q, q).unwrap();
    assert_eq!(r, vec![108, 0, 0, 12]);
}

#[test]
fn quantized_abs_rejects_differing_scales() {
    let err = run_quantized(
        &[1, -1],
        QuantParams::new(0.01, 0),
        QuantParams::new(0.02, 0),
    )
    .unwrap_err();
    assert!(matches!(err, KernelError::ScaleMismatch { .. }));
}

// ── Cross-operator properties ──────────────────────────────────

#[test]
fn output_shape_matches_input_for_all_ops() {
    let shape = Shape::new(vec![2, 3]);
    for op in UnaryOp::ALL {
        let (input, mut output) = match op {
            UnaryOp::LogicalNot => (
                Tensor::from_bool(shape.clone(), &[false; 6]).unwrap(),
                Tensor::zeros(Shape::scalar(), DType::Bool),
            ),
            _ => (
                Tensor::from_f32(shape.clone(), &[1.0; 6]).unwrap(),
                Tensor::zeros(Shape::scalar(), DType::F32),
            ),
        };

        op.prepare(&input.view(), &mut output).unwrap();
        op.eval(&input.view(), &mut output).unwrap();
        assert_eq!(output.shape(), &shape, "{op} must preserve shape");
    }
}

#[test]
fn empty_tensors_are_noops() {
    let shape = Shape::new(vec![4, 0, 2]);
    let input = Tensor::from_f32(shape.clone(), &[]).unwrap();
    let mut output = Tensor::zeros(Shape::scalar(), DType::F32);

    UnaryOp::Sqrt.prepare(&input.view(), &mut output).unwrap();
    UnaryOp::Sqrt.eval(&input.view(), &mut output).unwrap();
    assert_eq!(output.shape(), &shape);
    assert_eq!(output.shape().num_elements(), 0);
}
