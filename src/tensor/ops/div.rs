//! 张量的除法。与纯数相除时除数不得为零；两个张量相除时遵循 IEEE 语义（不检查零元素）

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use std::ops::Div;

impl Div<f32> for Tensor {
    type Output = Tensor;

    fn div(self, scalar: f32) -> Tensor {
        &self / scalar
    }
}
impl Div<f32> for &Tensor {
    type Output = Tensor;

    fn div(self, scalar: f32) -> Tensor {
        assert!(scalar != 0., "{}", TensorError::DivByZero);
        Tensor {
            data: &self.data / scalar,
        }
    }
}

impl Div for Tensor {
    type Output = Tensor;

    fn div(self, other: Tensor) -> Tensor {
        &self / &other
    }
}
impl<'a> Div<&'a Tensor> for Tensor {
    type Output = Tensor;

    fn div(self, other: &'a Tensor) -> Tensor {
        &self / other
    }
}
impl<'b> Div<&'b Tensor> for &Tensor {
    type Output = Tensor;

    fn div(self, other: &'b Tensor) -> Tensor {
        super::binary::assert_broadcastable(self, other, Operator::Div);
        Tensor {
            data: &self.data / &other.data,
        }
    }
}
