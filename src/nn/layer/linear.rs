/*
 * @Description  : Linear (全连接) 层
 */

use crate::device::{Accelerator, Device, HostOnly};
use crate::nn::{NnError, ParamId, ParamStore};
use crate::tensor::Tensor;

/// Linear (全连接) 层
///
/// PyTorch 风格的全连接层：`output = x @ W + b`
///
/// # 输入/输出形状
/// - 输入：[batch_size, in_features]
/// - 输出：[batch_size, out_features]
///
/// # 使用示例
/// ```ignore
/// let mut store = ParamStore::new();
/// let fc = Linear::new_seeded(&mut store, 10, 1, true, "fc", 42);
/// let y = fc.forward(&store, &x)?;
/// // 矩阵乘法交给加速器
/// let y = fc.forward_on(&accelerator, Device::Accelerator(0), &store, &x)?;
/// ```
#[derive(Debug, Clone)]
pub struct Linear {
    /// 权重参数 [in_features, out_features]
    weights: ParamId,
    /// 偏置参数 [1, out_features]（可选）
    bias: Option<ParamId>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// 创建新的 Linear 层（带种子，确保可重复性）
    ///
    /// 权重与偏置均取自 U(-1/√in, 1/√in)，与 PyTorch 默认初始化的范围相同。
    pub fn new_seeded(
        store: &mut ParamStore,
        in_features: usize,
        out_features: usize,
        use_bias: bool,
        name: &str,
        seed: u64,
    ) -> Self {
        let bound = 1.0 / (in_features.max(1) as f32).sqrt();
        let weights = store.add(
            &format!("{name}_W"),
            Tensor::uniform_seeded(-bound, bound, &[in_features, out_features], seed),
        );
        let bias = use_bias.then(|| {
            store.add(
                &format!("{name}_b"),
                Tensor::uniform_seeded(-bound, bound, &[1, out_features], seed.wrapping_add(1)),
            )
        });

        Self {
            weights,
            bias,
            in_features,
            out_features,
        }
    }

    /// 获取所有可训练参数
    pub fn parameters(&self) -> Vec<ParamId> {
        std::iter::once(self.weights).chain(self.bias).collect()
    }

    pub const fn in_features(&self) -> usize {
        self.in_features
    }

    pub const fn out_features(&self) -> usize {
        self.out_features
    }

    /// 前向传播（在CPU上）
    pub fn forward(&self, store: &ParamStore, x: &Tensor) -> Result<Tensor, NnError> {
        self.forward_on(&HostOnly, Device::Cpu, store, x)
    }

    /// 在`device`上前向传播，矩阵乘法由`accelerator`执行
    pub fn forward_on(
        &self,
        accelerator: &dyn Accelerator,
        device: Device,
        store: &ParamStore,
        x: &Tensor,
    ) -> Result<Tensor, NnError> {
        self.check_input(x)?;
        let output = accelerator.mat_mul(device, x, store.value(self.weights)?)?;
        match self.bias {
            Some(bias) => Ok(&output + store.value(bias)?),
            None => Ok(output),
        }
    }

    /// 反向传播（在CPU上）：将 dW = xᵀ·dy、db = Σ dy 累加到参数梯度上，返回 dx = dy·Wᵀ
    pub fn backward(
        &self,
        store: &mut ParamStore,
        x: &Tensor,
        grad_output: &Tensor,
    ) -> Result<Tensor, NnError> {
        self.backward_on(&HostOnly, Device::Cpu, store, x, grad_output)
    }

    /// 在`device`上反向传播，矩阵乘法由`accelerator`执行
    pub fn backward_on(
        &self,
        accelerator: &dyn Accelerator,
        device: Device,
        store: &mut ParamStore,
        x: &Tensor,
        grad_output: &Tensor,
    ) -> Result<Tensor, NnError> {
        self.check_input(x)?;
        let expected = [x.shape()[0], self.out_features];
        if grad_output.shape() != expected {
            return Err(NnError::ShapeMismatch {
                expected: expected.to_vec(),
                got: grad_output.shape().to_vec(),
                message: "Linear层输出梯度".to_string(),
            });
        }

        let weights_t = store.value(self.weights)?.transpose();
        let grad_input = accelerator.mat_mul(device, grad_output, &weights_t)?;
        let grad_weights = accelerator.mat_mul(device, &x.transpose(), grad_output)?;
        store.accumulate_grad(self.weights, &grad_weights)?;
        if let Some(bias) = self.bias {
            store.accumulate_grad(bias, &grad_output.sum_axis0())?;
        }
        Ok(grad_input)
    }

    fn check_input(&self, x: &Tensor) -> Result<(), NnError> {
        if x.dimension() == 2 && x.shape()[1] == self.in_features {
            Ok(())
        } else {
            Err(NnError::ShapeMismatch {
                expected: vec![x.shape().first().copied().unwrap_or(0), self.in_features],
                got: x.shape().to_vec(),
                message: "Linear层输入须为[batch_size, in_features]".to_string(),
            })
        }
    }
}
