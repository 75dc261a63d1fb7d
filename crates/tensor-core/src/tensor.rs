// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type and view abstractions.

use crate::{DType, QuantParams, Shape, TensorError};

/// An owned, n-dimensional tensor stored in contiguous memory.
///
/// `Tensor` is the data carrier for the element-wise kernels. It owns
/// its data buffer and exposes immutable views via [`TensorView`].
/// Kernels borrow tensors for the duration of one call and never
/// retain references.
///
/// # Memory Layout
/// Data is stored in row-major (C) order as a flat byte buffer.
/// Typed access is provided via [`as_f32_slice`](Tensor::as_f32_slice)
/// and friends.
#[derive(Debug, Clone)]
pub struct Tensor {
    shape: Shape,
    dtype: DType,
    data: Vec<u8>,
    quant: Option<QuantParams>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape, DType};
    /// let t = Tensor::zeros(Shape::matrix(2, 3), DType::F32);
    /// assert_eq!(t.size_bytes(), 24); // 2 * 3 * 4 bytes
    /// ```
    pub fn zeros(shape: Shape, dtype: DType) -> Self {
        let size = shape.size_bytes(dtype);
        Self {
            shape,
            dtype,
            data: vec![0u8; size],
            quant: None,
        }
    }

    /// Creates a tensor from raw bytes.
    ///
    /// Returns an error if the buffer size does not match
    /// `shape.size_bytes(dtype)`, or if a `Bool` buffer contains a
    /// byte other than 0 or 1 (the `bool` validity invariant that
    /// [`as_bool_slice`](Tensor::as_bool_slice) relies on).
    pub fn from_bytes(shape: Shape, dtype: DType, data: Vec<u8>) -> Result<Self, TensorError> {
        let expected = shape.size_bytes(dtype);
        if data.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if dtype == DType::Bool {
            if let Some(index) = data.iter().position(|&b| b > 1) {
                return Err(TensorError::InvalidBoolValue {
                    index,
                    value: data[index],
                });
            }
        }
        Ok(Self {
            shape,
            dtype,
            data,
            quant: None,
        })
    }

    /// Creates a tensor from a slice of `f32` values.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::from_f32(Shape::vector(3), &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(t.as_f32_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_f32(shape: Shape, values: &[f32]) -> Result<Self, TensorError> {
        let expected_elements = shape.num_elements();
        if values.len() != expected_elements {
            return Err(TensorError::BufferSizeMismatch {
                expected: expected_elements * DType::F32.size_bytes(),
                actual: values.len() * DType::F32.size_bytes(),
            });
        }
        // SAFETY: reinterpreting &[f32] as &[u8] is safe for Copy types.
        let byte_slice = unsafe {
            std::slice::from_raw_parts(values.as_ptr() as *const u8, values.len() * 4)
        };
        Ok(Self {
            shape,
            dtype: DType::F32,
            data: byte_slice.to_vec(),
            quant: None,
        })
    }

    /// Creates an affine-quantized tensor from a slice of `i8` values.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape, QuantParams};
    /// let q = QuantParams::new(0.01, 0);
    /// let t = Tensor::from_i8(Shape::vector(2), &[-128, 127], q).unwrap();
    /// assert_eq!(t.as_i8_slice(), &[-128, 127]);
    /// ```
    pub fn from_i8(shape: Shape, values: &[i8], quant: QuantParams) -> Result<Self, TensorError> {
        let expected_elements = shape.num_elements();
        if values.len() != expected_elements {
            return Err(TensorError::BufferSizeMismatch {
                expected: expected_elements,
                actual: values.len(),
            });
        }
        // SAFETY: i8 and u8 have identical size and alignment.
        let byte_slice =
            unsafe { std::slice::from_raw_parts(values.as_ptr() as *const u8, values.len()) };
        Ok(Self {
            shape,
            dtype: DType::I8,
            data: byte_slice.to_vec(),
            quant: Some(quant),
        })
    }

    /// Creates a boolean tensor from a slice of `bool` values.
    pub fn from_bool(shape: Shape, values: &[bool]) -> Result<Self, TensorError> {
        let expected_elements = shape.num_elements();
        if values.len() != expected_elements {
            return Err(TensorError::BufferSizeMismatch {
                expected: expected_elements,
                actual: values.len(),
            });
        }
        let data = values.iter().map(|&v| v as u8).collect();
        Ok(Self {
            shape,
            dtype: DType::Bool,
            data,
            quant: None,
        })
    }

    /// Attaches quantization parameters, consuming and returning the tensor.
    pub fn with_quant_params(mut self, quant: QuantParams) -> Self {
        self.quant = Some(quant);
        self
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns the tensor's quantization parameters, if any.
    pub fn quant_params(&self) -> Option<QuantParams> {
        self.quant
    }

    /// Resizes the tensor to a new shape, reallocating the buffer.
    ///
    /// The dtype and quantization parameters are kept. Existing
    /// element contents are not preserved beyond the common prefix;
    /// callers that resize are expected to overwrite the buffer.
    pub fn resize(&mut self, shape: Shape) {
        let size = shape.size_bytes(self.dtype);
        self.data.resize(size, 0);
        self.shape = shape;
    }

    /// Returns an immutable view over this tensor's data.
    pub fn view(&self) -> TensorView<'_> {
        TensorView {
            shape: &self.shape,
            dtype: self.dtype,
            data: &self.data,
            quant: self.quant,
        }
    }

    /// Returns the raw byte slice backing this tensor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the memory footprint of this tensor in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Interprets the buffer as a slice of `f32`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::F32`.
    pub fn as_f32_slice(&self) -> &[f32] {
        assert_eq!(
            self.dtype,
            DType::F32,
            "as_f32_slice called on {:?} tensor",
            self.dtype
        );
        let n = self.shape.num_elements();
        if n == 0 {
            return &[];
        }
        // SAFETY: data was constructed from f32s; length is checked at
        // construction and on resize.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr() as *const f32, n) }
    }

    /// Interprets the buffer as a mutable slice of `f32`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::F32`.
    pub fn as_f32_slice_mut(&mut self) -> &mut [f32] {
        assert_eq!(
            self.dtype,
            DType::F32,
            "as_f32_slice_mut called on {:?} tensor",
            self.dtype
        );
        let n = self.shape.num_elements();
        if n == 0 {
            return &mut [];
        }
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr() as *mut f32, n) }
    }

    /// Interprets the buffer as a slice of `i8`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::I8`.
    pub fn as_i8_slice(&self) -> &[i8] {
        assert_eq!(
            self.dtype,
            DType::I8,
            "as_i8_slice called on {:?} tensor",
            self.dtype
        );
        // SAFETY: i8 and u8 have identical size and alignment.
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr() as *const i8, self.shape.num_elements())
        }
    }

    /// Interprets the buffer as a mutable slice of `i8`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::I8`.
    pub fn as_i8_slice_mut(&mut self) -> &mut [i8] {
        assert_eq!(
            self.dtype,
            DType::I8,
            "as_i8_slice_mut called on {:?} tensor",
            self.dtype
        );
        let n = self.shape.num_elements();
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr() as *mut i8, n) }
    }

    /// Interprets the buffer as a slice of `bool`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::Bool`.
    pub fn as_bool_slice(&self) -> &[bool] {
        assert_eq!(
            self.dtype,
            DType::Bool,
            "as_bool_slice called on {:?} tensor",
            self.dtype
        );
        // SAFETY: Bool tensors only ever hold bytes 0 or 1 — enforced by
        // every constructor (`from_bool`, `zeros`, and the byte check in
        // `from_bytes`) and preserved by writes through `&mut bool`.
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr() as *const bool, self.shape.num_elements())
        }
    }

    /// Interprets the buffer as a mutable slice of `bool`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::Bool`.
    pub fn as_bool_slice_mut(&mut self) -> &mut [bool] {
        assert_eq!(
            self.dtype,
            DType::Bool,
            "as_bool_slice_mut called on {:?} tensor",
            self.dtype
        );
        let n = self.shape.num_elements();
        // SAFETY: see `as_bool_slice`; writes go through &mut bool so the
        // 0/1 invariant is preserved.
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr() as *mut bool, n) }
    }
}

/// A borrowed, read-only view over a [`Tensor`]'s data.
///
/// Views are zero-copy and tied to the lifetime of the source tensor,
/// enforced by the borrow checker.
#[derive(Debug)]
pub struct TensorView<'a> {
    shape: &'a Shape,
    dtype: DType,
    data: &'a [u8],
    quant: Option<QuantParams>,
}

impl<'a> TensorView<'a> {
    /// Returns the shape of the viewed tensor.
    pub fn shape(&self) -> &Shape {
        self.shape
    }

    /// Returns the data type of the viewed tensor.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns the quantization parameters of the viewed tensor, if any.
    pub fn quant_params(&self) -> Option<QuantParams> {
        self.quant
    }

    /// Returns the raw byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// Interprets the view as a slice of `f32`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::F32`.
    pub fn as_f32_slice(&self) -> &[f32] {
        assert_eq!(
            self.dtype,
            DType::F32,
            "as_f32_slice called on {:?} view",
            self.dtype
        );
        let n = self.shape.num_elements();
        if n == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.data.as_ptr() as *const f32, n) }
    }

    /// Interprets the view as a slice of `i8`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::I8`.
    pub fn as_i8_slice(&self) -> &[i8] {
        assert_eq!(
            self.dtype,
            DType::I8,
            "as_i8_slice called on {:?} view",
            self.dtype
        );
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr() as *const i8, self.shape.num_elements())
        }
    }

    /// Interprets the view as a slice of `bool`.
    ///
    /// # Panics
    /// Panics if `self.dtype() != DType::Bool`.
    pub fn as_bool_slice(&self) -> &[bool] {
        assert_eq!(
            self.dtype,
            DType::Bool,
            "as_bool_slice called on {:?} view",
            self.dtype
        );
        // SAFETY: see `Tensor::as_bool_slice`.
        unsafe {
            std::slice::from_raw_parts(self.data.as_ptr() as *const bool, self.shape.num_elements())
        }
    }
}
