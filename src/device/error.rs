use crate::errors::TensorError;
use thiserror::Error;

/// 设备相关错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    /// 加速器不可用
    #[error("加速器`{0}`不可用")]
    Unavailable(String),

    /// 设备序号越界
    #[error("设备序号越界: {index} >= {count}")]
    InvalidIndex { index: usize, count: usize },

    /// 设备上的张量运算失败
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
