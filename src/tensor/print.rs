use std::fmt;

use super::Tensor;

impl fmt::Display for Tensor {
    /// 先打印形状，再按ndarray的布局打印元素（保留4位小数）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "形状: {:?}", self.shape())?;
        if let Some(number) = self.number() {
            return write!(f, "{number:.4}");
        }
        write!(f, "{:.4}", self.data)
    }
}
