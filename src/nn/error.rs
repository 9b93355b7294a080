/*
 * @Description  : nn 模块的错误类型
 */

use crate::device::DeviceError;
use crate::errors::TensorError;
use crate::nn::ParamId;
use thiserror::Error;

/// 参数管理、层与损失函数的错误
#[derive(Debug, Error, PartialEq)]
pub enum NnError {
    #[error("参数{0}不存在")]
    ParameterNotFound(ParamId),

    #[error("形状不匹配: 期望 {expected:?}, 实际 {got:?}（{message}）")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },

    #[error(transparent)]
    Tensor(#[from] TensorError),

    #[error(transparent)]
    Device(#[from] DeviceError),
}
