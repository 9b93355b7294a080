/*
 * @Description  : 优化器模块：标准 Adam 以及在缺少 CUDA 扩展时顶替 AdamATan2 的回退实现
 */

mod adam;
mod adam_atan2;
mod base;
mod config;
mod error;

pub use adam::Adam;
pub use adam_atan2::{AdamAtan2, FALLBACK_NOTICE};
pub use base::{Optimizer, ParamGroup};
pub use config::AdamConfig;
pub use error::OptimizerError;
