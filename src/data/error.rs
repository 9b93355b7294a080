//! 数据相关错误类型定义

use thiserror::Error;

/// 数据相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 格式错误（如 JSON 字段缺失）
    #[error("格式错误: {0}")]
    FormatError(#[from] serde_json::Error),

    /// 配置不合法
    #[error("配置错误: {0}")]
    InvalidConfig(String),
}
