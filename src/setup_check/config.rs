use serde::{Deserialize, Serialize};

/// 优化器冒烟测试的参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupCheckConfig {
    /// 模型初始化与随机数据共用的种子
    pub seed: u64,
    pub iterations: usize,
    pub batch_size: usize,
    pub in_features: usize,
    pub out_features: usize,
    pub learning_rate: f32,
}

impl Default for SetupCheckConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            iterations: 3,
            batch_size: 32,
            in_features: 10,
            out_features: 1,
            learning_rate: 0.01,
        }
    }
}
