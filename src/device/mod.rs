/*
 * @Description  : 计算设备抽象：通用处理器（CPU）与加速器（如 Intel Arc 的 XPU）。
 *
 * 本库自身不绑定任何加速器运行时；`Accelerator` trait 是接入点，
 * 内置的 `HostOnly` 后端总是报告“不可用”，从而让上层逻辑平滑退回到 CPU。
 */

mod error;

#[cfg(test)]
mod tests;

pub use error::DeviceError;

use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 张量运算所在的设备
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Device {
    /// 通用处理器
    #[default]
    Cpu,
    /// 第`index`号加速器
    Accelerator(usize),
}

impl Device {
    /// 加速器可用时选用其当前设备，否则退回CPU
    ///
    /// 不可用时只调用`is_available`，不会触碰任何加速器专属接口。
    pub fn select(accelerator: &dyn Accelerator) -> Result<Self, DeviceError> {
        if accelerator.is_available() {
            Ok(Self::Accelerator(accelerator.current_device()?))
        } else {
            Ok(Self::Cpu)
        }
    }

    pub const fn is_accelerator(&self) -> bool {
        matches!(self, Self::Accelerator(_))
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Accelerator(index) => write!(f, "xpu:{index}"),
        }
    }
}

/// 加速器后端接口
pub trait Accelerator {
    /// 后端名称，用于诊断输出
    fn name(&self) -> &str;

    /// 是否存在可用的加速器
    fn is_available(&self) -> bool;

    /// 可用加速器数量
    fn device_count(&self) -> Result<usize, DeviceError>;

    /// 当前选中的加速器序号
    fn current_device(&self) -> Result<usize, DeviceError>;

    /// 在`device`上执行矩阵乘法
    fn mat_mul(&self, device: Device, a: &Tensor, b: &Tensor) -> Result<Tensor, DeviceError>;
}

/// 没有任何加速器的后端：所有计算都留在CPU上
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOnly;

impl Accelerator for HostOnly {
    fn name(&self) -> &str {
        "xpu"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn device_count(&self) -> Result<usize, DeviceError> {
        Err(DeviceError::Unavailable(self.name().to_string()))
    }

    fn current_device(&self) -> Result<usize, DeviceError> {
        Err(DeviceError::Unavailable(self.name().to_string()))
    }

    fn mat_mul(&self, device: Device, a: &Tensor, b: &Tensor) -> Result<Tensor, DeviceError> {
        match device {
            Device::Cpu => Ok(a.try_mat_mul(b)?),
            Device::Accelerator(_) => Err(DeviceError::Unavailable(self.name().to_string())),
        }
    }
}
