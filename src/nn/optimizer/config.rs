/*
 * @Description  : Adam 系优化器的超参数
 */

use super::OptimizerError;
use serde::{Deserialize, Serialize};

/// Adam 系优化器的超参数
///
/// 各字段默认值与 PyTorch 的 `torch.optim.Adam` 一致。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    /// 学习率
    pub lr: f32,
    /// 一阶矩与二阶矩的衰减系数
    pub betas: (f32, f32),
    /// 加到分母上以保证数值稳定
    pub eps: f32,
    /// L2 惩罚系数
    pub weight_decay: f32,
    /// 是否使用 AMSGrad 变体
    pub amsgrad: bool,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            lr: 1e-3,
            betas: (0.9, 0.999),
            eps: 1e-8,
            weight_decay: 0.0,
            amsgrad: false,
        }
    }
}

impl AdamConfig {
    pub const fn with_lr(mut self, lr: f32) -> Self {
        self.lr = lr;
        self
    }

    pub const fn with_betas(mut self, beta1: f32, beta2: f32) -> Self {
        self.betas = (beta1, beta2);
        self
    }

    pub const fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    pub const fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub const fn with_amsgrad(mut self, amsgrad: bool) -> Self {
        self.amsgrad = amsgrad;
        self
    }

    /// 参数合法性检查，规则与 `torch.optim.Adam` 相同
    pub fn validate(&self) -> Result<(), OptimizerError> {
        // 用`!(x >= 0)`的写法让NaN也被拒绝
        if !(self.lr >= 0.0) {
            return Err(OptimizerError::InvalidLearningRate(self.lr));
        }
        if !(self.eps >= 0.0) {
            return Err(OptimizerError::InvalidEpsilon(self.eps));
        }
        for (index, value) in [self.betas.0, self.betas.1].into_iter().enumerate() {
            if !(0.0..1.0).contains(&value) {
                return Err(OptimizerError::InvalidBeta { index, value });
            }
        }
        if !(self.weight_decay >= 0.0) {
            return Err(OptimizerError::InvalidWeightDecay(self.weight_decay));
        }
        Ok(())
    }
}
