use super::Tensor;

impl Tensor {
    /// 判断能否与`other`按 NumPy 规则广播：
    /// 从右向左对齐维度，每个维度必须相等或其中一个为 1
    pub fn can_broadcast_with(&self, other: &Self) -> bool {
        self.shape()
            .iter()
            .rev()
            .zip(other.shape().iter().rev())
            .all(|(&a, &b)| a == b || a == 1 || b == 1)
    }

    /// 张量的转置（仅交换前两维）
    pub fn transpose(&self) -> Self {
        if self.dimension() <= 1 {
            self.clone()
        } else {
            let mut axes: Vec<usize> = (0..self.dimension()).collect();
            axes.swap(0, 1);
            Self {
                data: self.data.clone().permuted_axes(axes),
            }
        }
    }
}
