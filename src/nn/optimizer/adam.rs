/*
 * @Description  : Adam优化器实现（标准的“比值”形式：m̂ / (√v̂ + ε)）
 */

use super::base::{Optimizer, ParamGroup};
use super::{AdamConfig, OptimizerError};
use crate::nn::{ParamId, ParamStore};
use crate::tensor::Tensor;
use std::collections::{HashMap, HashSet};

/// 单个参数的 Adam 状态
#[derive(Debug, Clone)]
struct AdamState {
    /// 该参数已执行的更新次数
    step: i32,
    /// 一阶矩估计
    exp_avg: Tensor,
    /// 二阶矩估计
    exp_avg_sq: Tensor,
    /// AMSGrad 下二阶矩的历史最大值
    max_exp_avg_sq: Option<Tensor>,
}

/// Adam优化器
#[derive(Debug)]
pub struct Adam {
    param_groups: Vec<ParamGroup>,
    state: HashMap<ParamId, AdamState>,
}

impl Adam {
    /// 用同一组超参数优化`params`
    pub fn new(params: &[ParamId], config: AdamConfig) -> Result<Self, OptimizerError> {
        Self::with_groups(vec![ParamGroup::new(params, config)])
    }

    /// 使用默认超参数（仅指定学习率）
    pub fn new_default(params: &[ParamId], lr: f32) -> Result<Self, OptimizerError> {
        Self::new(params, AdamConfig::default().with_lr(lr))
    }

    /// 用多个参数组创建，每组可有不同的超参数
    ///
    /// 用于需要分别优化不同参数组的场景，如：
    /// - 迁移学习（冻结部分层）
    /// - 分层学习率
    pub fn with_groups(groups: Vec<ParamGroup>) -> Result<Self, OptimizerError> {
        if groups.iter().all(|group| group.params.is_empty()) {
            return Err(OptimizerError::EmptyParameterList);
        }
        let mut adam = Self {
            param_groups: Vec::with_capacity(groups.len()),
            state: HashMap::new(),
        };
        for group in groups {
            adam.add_param_group(group)?;
        }
        Ok(adam)
    }

    /// 追加一个参数组
    pub fn add_param_group(&mut self, group: ParamGroup) -> Result<(), OptimizerError> {
        group.config.validate()?;

        let mut seen: HashSet<ParamId> = self
            .param_groups
            .iter()
            .flat_map(|g| g.params.iter().copied())
            .collect();
        for &id in &group.params {
            if !seen.insert(id) {
                return Err(OptimizerError::DuplicateParameter(id));
            }
        }

        self.param_groups.push(group);
        Ok(())
    }

    /// 某参数已执行的更新次数（尚未更新过则为0）
    pub fn step_count(&self, id: ParamId) -> i32 {
        self.state.get(&id).map_or(0, |s| s.step)
    }
}

impl Optimizer for Adam {
    fn zero_grad(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        for group in &self.param_groups {
            store.zero_grad(&group.params)?;
        }
        Ok(())
    }

    fn step(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        for group in &self.param_groups {
            for &id in &group.params {
                // 先复制出梯度（避免借用冲突）
                let Some(gradient) = store.grad(id)?.cloned() else {
                    continue;
                };
                let state = self.state.entry(id).or_insert_with(|| AdamState {
                    step: 0,
                    exp_avg: Tensor::zeros_like(&gradient),
                    exp_avg_sq: Tensor::zeros_like(&gradient),
                    max_exp_avg_sq: group.config.amsgrad.then(|| Tensor::zeros_like(&gradient)),
                });
                adam_update(store, id, gradient, state, &group.config)?;
            }
        }
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.param_groups.first().map_or(0.0, |g| g.config.lr)
    }

    fn set_learning_rate(&mut self, lr: f32) {
        for group in &mut self.param_groups {
            group.config.lr = lr;
        }
    }

    fn reset(&mut self) {
        self.state.clear();
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }
}

/// Adam 参数更新的核心逻辑
fn adam_update(
    store: &mut ParamStore,
    id: ParamId,
    mut gradient: Tensor,
    state: &mut AdamState,
    config: &AdamConfig,
) -> Result<(), OptimizerError> {
    let (beta1, beta2) = config.betas;
    let param = store.value(id)?;

    // L2 惩罚并入梯度：g = g + λθ
    if config.weight_decay != 0.0 {
        gradient = gradient + param * config.weight_decay;
    }

    state.step += 1;

    // m = β1 * m + (1 - β1) * g
    state.exp_avg *= beta1;
    state.exp_avg += &(&gradient * (1.0 - beta1));
    // v = β2 * v + (1 - β2) * g²
    state.exp_avg_sq *= beta2;
    state.exp_avg_sq += &(gradient.square() * (1.0 - beta2));

    // 偏差修正
    let bias_correction1 = 1.0 - beta1.powi(state.step);
    let bias_correction2_sqrt = (1.0 - beta2.powi(state.step)).sqrt();
    let step_size = config.lr / bias_correction1;

    let second_moment = match &mut state.max_exp_avg_sq {
        Some(max_exp_avg_sq) => {
            *max_exp_avg_sq = max_exp_avg_sq.maximum(&state.exp_avg_sq);
            &*max_exp_avg_sq
        }
        None => &state.exp_avg_sq,
    };

    // θ = θ - lr / bc1 * m / (√v / √bc2 + ε)
    let denominator = second_moment.sqrt() / bias_correction2_sqrt + config.eps;
    let new_value = param - &(&state.exp_avg / &denominator) * step_size;
    store.set_value(id, new_value)?;
    Ok(())
}
