use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    // 矩阵乘法
    #[error("矩阵乘法要求两个2阶张量且前者列数等于后者行数：{left:?} @ {right:?}")]
    MatMulShape { left: Vec<usize>, right: Vec<usize> },

    #[error("数据长度{len}与形状{shape:?}不匹配")]
    DataShapeMismatch { len: usize, shape: Vec<usize> },
    #[error("张量形状不兼容")]
    IncompatibleShape,
    #[error("除数为零")]
    DivByZero,
}
