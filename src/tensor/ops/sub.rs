//! 张量的减法，两个操作数均为张量时支持 NumPy 风格的广播（broadcasting）

use crate::errors::Operator;
use crate::tensor::Tensor;

impl_binary_op!(Sub, sub, Operator::Sub);
