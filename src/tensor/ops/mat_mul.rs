use crate::errors::TensorError;
use crate::tensor::Tensor;
use ndarray::Ix2;

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，否则会触发panic。
    /// 需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则也会触发panic。
    pub fn mat_mul(&self, other: &Tensor) -> Tensor {
        match self.try_mat_mul(other) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }

    /// `mat_mul`的非panic版本
    pub fn try_mat_mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        let shape_error = || TensorError::MatMulShape {
            left: self.shape().to_vec(),
            right: other.shape().to_vec(),
        };
        if self.dimension() != 2 || other.dimension() != 2 || self.shape()[1] != other.shape()[0] {
            return Err(shape_error());
        }
        // 将动态维度数组转换为常量维度数组
        let self_data = self
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| shape_error())?;
        let other_data = other
            .data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| shape_error())?;
        Ok(Tensor {
            data: self_data.dot(&other_data).into_dyn(),
        })
    }
}
