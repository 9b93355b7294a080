use ndarray::{Array, IxDyn};
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::errors::TensorError;

mod ops {
    #[macro_use]
    mod binary;
    pub mod add;
    pub mod assign;
    pub mod div;
    pub mod mat_mul;
    pub mod mul;
    pub mod others;
    pub mod sub;
}

mod print;
mod property;
mod shape;


/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：这里只承担优化器冒烟测试与设备探测所需的最小运算集合，并不追求完整。
#[derive(Debug, Clone)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        match Self::try_new(data, shape) {
            Ok(tensor) => tensor,
            Err(e) => panic!("{e}"),
        }
    }

    /// `new`的非panic版本
    pub fn try_new(data: &[f32], shape: &[usize]) -> Result<Tensor, TensorError> {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec()).map_err(|_| {
            TensorError::DataShapeMismatch {
                len: data.len(),
                shape: shape.to_vec(),
            }
        })?;
        Ok(Tensor { data })
    }

    /// 创建一个全零张量
    pub fn zeros(shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// 创建一个与`other`同形状的全零张量
    pub fn zeros_like(other: &Tensor) -> Tensor {
        Self::zeros(other.shape())
    }

    /// 创建一个服从正态分布的随机张量（带种子，确保可重复性）。
    /// 使用Box-Muller变换，每次生成两个样本。
    pub fn normal_seeded(mean: f32, std_dev: f32, shape: &[usize], seed: u64) -> Tensor {
        let mut rng = StdRng::seed_from_u64(seed);
        let unit = Uniform::new_inclusive(0.0f32, 1.0);
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);

        while data.len() < data_len {
            let u1 = unit.sample(&mut rng);
            let u2 = unit.sample(&mut rng);
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f32::consts::PI * u2;
            let z0 = mean + std_dev * r * theta.cos();
            let z1 = mean + std_dev * r * theta.sin();

            // u1为0时ln发散，丢弃
            if z0.is_finite() {
                data.push(z0);
            }
            if data.len() < data_len && z1.is_finite() {
                data.push(z1);
            }
        }

        Tensor::new(&data, shape)
    }

    /// 创建一个在[min, max]闭区间内均匀分布的随机张量（带种子）
    pub fn uniform_seeded(min: f32, max: f32, shape: &[usize], seed: u64) -> Tensor {
        let mut rng = StdRng::seed_from_u64(seed);
        let between = Uniform::new_inclusive(min, max);
        let data = (0..shape.iter().product::<usize>())
            .map(|_| between.sample(&mut rng))
            .collect::<Vec<_>>();
        Tensor::new(&data, shape)
    }
}
