/*
 * @Description  : 损失函数
 */

use super::NnError;
use crate::tensor::Tensor;

/// 均方误差损失：loss = mean((pred - target)²)
#[derive(Debug, Clone, Copy, Default)]
pub struct MseLoss;

impl MseLoss {
    pub fn new() -> Self {
        Self
    }

    /// 计算损失值
    pub fn forward(&self, pred: &Tensor, target: &Tensor) -> Result<f32, NnError> {
        Self::check_shape(pred, target)?;
        Ok((pred - target).square().mean())
    }

    /// 损失对预测值的梯度：2 * (pred - target) / N
    pub fn backward(&self, pred: &Tensor, target: &Tensor) -> Result<Tensor, NnError> {
        Self::check_shape(pred, target)?;
        let n = pred.size() as f32;
        Ok((pred - target) * (2.0 / n))
    }

    fn check_shape(pred: &Tensor, target: &Tensor) -> Result<(), NnError> {
        if pred.is_same_shape(target) {
            Ok(())
        } else {
            Err(NnError::ShapeMismatch {
                expected: pred.shape().to_vec(),
                got: target.shape().to_vec(),
                message: "MSE的目标值须与预测值同形状".to_string(),
            })
        }
    }
}
