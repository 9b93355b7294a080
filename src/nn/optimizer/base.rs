/*
 * @Description  : 优化器基础trait和参数组
 */

use super::{AdamConfig, OptimizerError};
use crate::nn::{ParamId, ParamStore};

/// 参数组：一组参数及其共享的超参数
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGroup {
    pub params: Vec<ParamId>,
    pub config: AdamConfig,
}

impl ParamGroup {
    pub fn new(params: &[ParamId], config: AdamConfig) -> Self {
        Self {
            params: params.to_vec(),
            config,
        }
    }
}

/// 优化器核心 trait
///
/// `PyTorch` 风格训练循环：
/// ```ignore
/// optimizer.zero_grad(&mut store)?;
/// let pred = model.forward(&store, &x)?;
/// let loss = criterion.forward(&pred, &y)?;
/// model.backward(&mut store, &x, &criterion.backward(&pred, &y)?)?;
/// optimizer.step(&mut store)?;
/// ```
pub trait Optimizer {
    /// 清零所有绑定参数的梯度
    fn zero_grad(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError>;

    /// 使用已计算的梯度更新参数，没有梯度的参数会被跳过
    fn step(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError>;

    /// 获取学习率（第一个参数组）
    fn learning_rate(&self) -> f32;

    /// 设置所有参数组的学习率
    fn set_learning_rate(&mut self, lr: f32);

    /// 重置累积状态（如 Adam 的动量）
    fn reset(&mut self);

    /// 参数组
    fn param_groups(&self) -> &[ParamGroup];
}
