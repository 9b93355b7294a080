use crate::nn::{NnError, ParamId};
use thiserror::Error;

/// 优化器构造与更新时的错误
#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    #[error("无效的学习率: {0}")]
    InvalidLearningRate(f32),

    #[error("无效的 epsilon: {0}")]
    InvalidEpsilon(f32),

    #[error("无效的 beta（第{index}个）: {value}，须在[0, 1)内")]
    InvalidBeta { index: usize, value: f32 },

    #[error("无效的 weight_decay: {0}")]
    InvalidWeightDecay(f32),

    #[error("优化器的参数列表为空")]
    EmptyParameterList,

    #[error("参数{0}出现在多个参数组中")]
    DuplicateParameter(ParamId),

    #[error(transparent)]
    Nn(#[from] NnError),
}
