/*
 * @Description  : AdamATan2 的回退实现。
 *
 * 真正的 AdamATan2 依赖 CUDA 扩展，用 atan2(m̂, √v̂) 代替 m̂ / (√v̂ + ε) 计算更新量；
 * 在没有 CUDA 扩展的机器上（如 Intel Arc）改用标准 Adam，构造接口保持一致，
 * 两者的数值行为并不相同，构造时会提示一次。
 */

use super::{Adam, AdamConfig, Optimizer, OptimizerError, ParamGroup};
use crate::nn::{ParamId, ParamStore};

/// 构造回退优化器时输出的提示
pub const FALLBACK_NOTICE: &str = "Using standard Adam optimizer as fallback for AdamATan2 \
    (CUDA extensions not available): updates use m/(sqrt(v)+eps) instead of atan2(m, sqrt(v))";

/// 与 AdamATan2 构造接口一致、内部完全委托给 [`Adam`] 的优化器
#[derive(Debug)]
pub struct AdamAtan2 {
    inner: Adam,
}

impl AdamAtan2 {
    /// 创建回退优化器，提示通过`log::warn!`输出
    pub fn new(params: &[ParamId], config: AdamConfig) -> Result<Self, OptimizerError> {
        Self::with_notice(params, config, |notice| log::warn!("{notice}"))
    }

    /// 创建回退优化器，提示交给`notice`处理
    ///
    /// 参数原样转交给 [`Adam::new`]，配置错误也原样返回（此时不会产生提示）。
    pub fn with_notice(
        params: &[ParamId],
        config: AdamConfig,
        notice: impl FnOnce(&str),
    ) -> Result<Self, OptimizerError> {
        let inner = Adam::new(params, config)?;
        notice(FALLBACK_NOTICE);
        Ok(Self { inner })
    }

    /// 实际执行更新的标准 Adam
    pub fn inner(&self) -> &Adam {
        &self.inner
    }
}

impl Optimizer for AdamAtan2 {
    fn zero_grad(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        self.inner.zero_grad(store)
    }

    fn step(&mut self, store: &mut ParamStore) -> Result<(), OptimizerError> {
        self.inner.step(store)
    }

    fn learning_rate(&self) -> f32 {
        self.inner.learning_rate()
    }

    fn set_learning_rate(&mut self, lr: f32) {
        self.inner.set_learning_rate(lr);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }

    fn param_groups(&self) -> &[ParamGroup] {
        self.inner.param_groups()
    }
}
