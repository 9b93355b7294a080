//! 张量的逐元素乘法，两个操作数均为张量时支持 NumPy 风格的广播（broadcasting）

use crate::errors::Operator;
use crate::tensor::Tensor;

impl_binary_op!(Mul, mul, Operator::Mul);
