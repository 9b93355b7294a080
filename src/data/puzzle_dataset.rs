//! HRM 谜题数据集（Sudoku、ARC、Maze 等）的元数据与加载配置

use serde::{Deserialize, Serialize};

use crate::data::error::DataError;

/// 数据集元数据，对应数据集目录下每个划分中的`dataset.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDatasetMetadata {
    pub pad_id: i64,
    pub ignore_label_id: Option<i64>,
    pub blank_identifier_id: i64,

    pub vocab_size: usize,
    pub seq_len: usize,
    pub num_puzzle_identifiers: usize,

    pub total_groups: usize,
    pub mean_puzzle_examples: f64,

    pub sets: Vec<String>,
}

impl PuzzleDatasetMetadata {
    /// 从 JSON 文本解析
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let metadata: Self = serde_json::from_str(text)?;
        if metadata.sets.is_empty() {
            return Err(DataError::InvalidConfig("`sets`不能为空".to_string()));
        }
        Ok(metadata)
    }
}

/// 数据集加载配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDatasetConfig {
    pub seed: u64,
    pub dataset_path: String,
    pub global_batch_size: usize,
    pub test_set_mode: bool,

    /// 每次迭代包含的 epoch 数
    pub epochs_per_iter: usize,

    /// 分布式训练中本进程的序号与进程总数
    pub rank: usize,
    pub num_replicas: usize,
}
