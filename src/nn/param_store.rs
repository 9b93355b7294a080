/*
 * @Description  : 可训练参数的存储。
 *
 * 层只持有 `ParamId`，数值与梯度统一放在 `ParamStore` 中；
 * 优化器按 `ParamId` 读写，这样同一组参数可以交给任意优化器。
 */

use super::NnError;
use crate::tensor::Tensor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 参数句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParamId(usize);

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Parameter {
    name: String,
    value: Tensor,
    /// `None`表示尚未计算梯度（或已被`zero_grad`清空）
    grad: Option<Tensor>,
}

/// 参数存储
#[derive(Debug, Clone, Default)]
pub struct ParamStore {
    params: Vec<Parameter>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个新参数，返回其句柄
    pub fn add(&mut self, name: &str, value: Tensor) -> ParamId {
        self.params.push(Parameter {
            name: name.to_string(),
            value,
            grad: None,
        });
        ParamId(self.params.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// 所有参数的句柄（按注册顺序）
    pub fn ids(&self) -> Vec<ParamId> {
        (0..self.params.len()).map(ParamId).collect()
    }

    pub fn name(&self, id: ParamId) -> Result<&str, NnError> {
        Ok(&self.get(id)?.name)
    }

    pub fn value(&self, id: ParamId) -> Result<&Tensor, NnError> {
        Ok(&self.get(id)?.value)
    }

    pub fn grad(&self, id: ParamId) -> Result<Option<&Tensor>, NnError> {
        Ok(self.get(id)?.grad.as_ref())
    }

    /// 覆盖参数值，新值形状须与原值一致
    pub fn set_value(&mut self, id: ParamId, value: Tensor) -> Result<(), NnError> {
        let param = self.get_mut(id)?;
        if !param.value.is_same_shape(&value) {
            return Err(NnError::ShapeMismatch {
                expected: param.value.shape().to_vec(),
                got: value.shape().to_vec(),
                message: format!("参数`{}`赋值", param.name),
            });
        }
        param.value = value;
        Ok(())
    }

    /// 累加梯度（与PyTorch一致，多次backward的梯度相加）
    pub fn accumulate_grad(&mut self, id: ParamId, grad: &Tensor) -> Result<(), NnError> {
        let param = self.get_mut(id)?;
        if !param.value.is_same_shape(grad) {
            return Err(NnError::ShapeMismatch {
                expected: param.value.shape().to_vec(),
                got: grad.shape().to_vec(),
                message: format!("参数`{}`的梯度", param.name),
            });
        }
        match &mut param.grad {
            Some(existing) => *existing += grad,
            None => param.grad = Some(grad.clone()),
        }
        Ok(())
    }

    /// 清空指定参数的梯度
    pub fn zero_grad(&mut self, ids: &[ParamId]) -> Result<(), NnError> {
        for &id in ids {
            self.get_mut(id)?.grad = None;
        }
        Ok(())
    }

    fn get(&self, id: ParamId) -> Result<&Parameter, NnError> {
        self.params.get(id.0).ok_or(NnError::ParameterNotFound(id))
    }

    fn get_mut(&mut self, id: ParamId) -> Result<&mut Parameter, NnError> {
        self.params.get_mut(id.0).ok_or(NnError::ParameterNotFound(id))
    }
}
