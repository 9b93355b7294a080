//! 数据模块
//!
//! 只提供 HRM 谜题数据集的元数据与配置描述；实际的数据管线在上层项目中。
//!
//! # 主要组件
//!
//! - [`PuzzleDatasetMetadata`]: 数据集目录下`dataset.json`的内容
//! - [`PuzzleDatasetConfig`]: 数据集加载配置
//! - [`DataError`]: 数据相关错误类型

pub mod error;
pub mod puzzle_dataset;


// Re-exports
pub use error::DataError;
pub use puzzle_dataset::{PuzzleDatasetConfig, PuzzleDatasetMetadata};
