/*
 * @Description  : 张量二元运算的公共实现。
 *                 对每个运算符生成以下组合的实现：
 *                 1. f32 与（不）带引用的张量；
 *                 2. （不）带引用的张量与 f32；
 *                 3. （不）带引用的张量与（不）带引用的张量，支持 NumPy 风格的广播。
 */

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

/// 检查两个张量能否广播，不能则panic
pub(super) fn assert_broadcastable(tensor_1: &Tensor, tensor_2: &Tensor, operator: Operator) {
    assert!(
        tensor_1.can_broadcast_with(tensor_2),
        "{}",
        TensorError::OperatorError {
            operator,
            tensor1_shape: tensor_1.shape().to_vec(),
            tensor2_shape: tensor_2.shape().to_vec(),
        }
    );
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $method:ident, $operator:expr) => {
        impl std::ops::$op_trait<Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: Tensor) -> Tensor {
                Tensor {
                    data: std::ops::$op_trait::$method(self, &tensor.data),
                }
            }
        }
        impl<'a> std::ops::$op_trait<&'a Tensor> for f32 {
            type Output = Tensor;

            fn $method(self, tensor: &'a Tensor) -> Tensor {
                Tensor {
                    data: std::ops::$op_trait::$method(self, &tensor.data),
                }
            }
        }

        impl std::ops::$op_trait<f32> for Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                std::ops::$op_trait::$method(&self, scalar)
            }
        }
        impl std::ops::$op_trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, scalar: f32) -> Tensor {
                Tensor {
                    data: std::ops::$op_trait::$method(&self.data, scalar),
                }
            }
        }

        impl std::ops::$op_trait for Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                std::ops::$op_trait::$method(&self, &other)
            }
        }
        impl<'a> std::ops::$op_trait<&'a Tensor> for Tensor {
            type Output = Tensor;

            fn $method(self, other: &'a Tensor) -> Tensor {
                std::ops::$op_trait::$method(&self, other)
            }
        }
        impl std::ops::$op_trait<Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: Tensor) -> Tensor {
                std::ops::$op_trait::$method(self, &other)
            }
        }
        impl<'b> std::ops::$op_trait<&'b Tensor> for &Tensor {
            type Output = Tensor;

            fn $method(self, other: &'b Tensor) -> Tensor {
                $crate::tensor::ops::binary::assert_broadcastable(self, other, $operator);
                Tensor {
                    data: std::ops::$op_trait::$method(&self.data, &other.data),
                }
            }
        }
    };
}
