use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::{Axis, Zip};
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Tensor {
    /// 对张量中的所有元素求和，返回纯数
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 所有元素的均值；空张量返回NaN
    pub fn mean(&self) -> f32 {
        self.data.mean().unwrap_or(f32::NAN)
    }

    /// 沿第0维求和并保留该维（长度为1），如[n, m] -> [1, m]
    pub fn sum_axis0(&self) -> Tensor {
        Tensor {
            data: self.data.sum_axis(Axis(0)).insert_axis(Axis(0)),
        }
    }

    /// 逐元素开方
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::sqrt),
        }
    }

    /// 逐元素平方
    pub fn square(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(|x| x * x),
        }
    }

    /// 与形状相同的张量逐元素取最大值
    pub fn maximum(&self, other: &Tensor) -> Tensor {
        assert!(
            self.is_same_shape(other),
            "{}",
            TensorError::OperatorError {
                operator: Operator::Maximum,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
        Tensor {
            data: Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| a.max(b)),
        }
    }
}
