/*
 * @Description  : 张量的原地运算（+=、-=、*=）。
 *                 右操作数为张量时，其形状须与左操作数严格一致或为标量；
 *                 原地运算不会改变左操作数的形状。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::{AddAssign, MulAssign, SubAssign};

fn assert_assignable(target: &Tensor, other: &Tensor, operator: Operator) {
    assert!(
        target.is_same_shape(other) || other.is_scalar(),
        "{}",
        TensorError::OperatorError {
            operator,
            tensor1_shape: target.shape().to_vec(),
            tensor2_shape: other.shape().to_vec(),
        }
    );
}

impl<'a> AddAssign<&'a Tensor> for Tensor {
    fn add_assign(&mut self, other: &'a Tensor) {
        assert_assignable(self, other, Operator::AddAssign);
        match other.number() {
            Some(scalar) if !self.is_same_shape(other) => self.data += scalar,
            _ => self.data += &other.data,
        }
    }
}

impl AddAssign<f32> for Tensor {
    fn add_assign(&mut self, scalar: f32) {
        self.data += scalar;
    }
}

impl<'a> SubAssign<&'a Tensor> for Tensor {
    fn sub_assign(&mut self, other: &'a Tensor) {
        assert_assignable(self, other, Operator::SubAssign);
        match other.number() {
            Some(scalar) if !self.is_same_shape(other) => self.data -= scalar,
            _ => self.data -= &other.data,
        }
    }
}

impl<'a> MulAssign<&'a Tensor> for Tensor {
    fn mul_assign(&mut self, other: &'a Tensor) {
        assert_assignable(self, other, Operator::MulAssign);
        match other.number() {
            Some(scalar) if !self.is_same_shape(other) => self.data *= scalar,
            _ => self.data *= &other.data,
        }
    }
}

impl MulAssign<f32> for Tensor {
    fn mul_assign(&mut self, scalar: f32) {
        self.data *= scalar;
    }
}
