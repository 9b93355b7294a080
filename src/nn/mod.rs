/*
 * @Description  : 负责神经网络（neural network）的最小构件：参数存储、全连接层、损失函数与优化器
 */

mod criterion;
mod error;
pub mod layer;
pub mod optimizer;
mod param_store;

pub use criterion::MseLoss;
pub use error::NnError;
pub use layer::Linear;
pub use param_store::{ParamId, ParamStore};
