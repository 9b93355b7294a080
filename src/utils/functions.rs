/*
 * @Description  : 按标识符查找模型类。
 *                 标识符格式为`模块路径@类名`，如`nn.layer@Linear`。
 */

use std::fmt;

use thiserror::Error;

use crate::nn::{Linear, ParamStore};

/// 模型构造函数：(参数存储, 输入维度, 输出维度, 种子) -> 模型
pub type ModelBuilder = fn(&mut ParamStore, usize, usize, u64) -> Linear;

/// 可按标识符查找的模型类
#[derive(Clone, Copy)]
pub struct ModelClass {
    pub module: &'static str,
    pub name: &'static str,
    pub build: ModelBuilder,
}

impl ModelClass {
    /// 完整标识符
    pub fn identifier(&self) -> String {
        format!("{}@{}", self.module, self.name)
    }
}

impl fmt::Debug for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelClass({})", self.identifier())
    }
}

fn build_linear(
    store: &mut ParamStore,
    in_features: usize,
    out_features: usize,
    seed: u64,
) -> Linear {
    Linear::new_seeded(store, in_features, out_features, true, "linear", seed)
}

/// 已知的模型类
pub const MODEL_CLASSES: &[ModelClass] = &[ModelClass {
    module: "nn.layer",
    name: "Linear",
    build: build_linear,
}];

/// 模型类查找错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("标识符`{0}`格式错误，应为`模块路径@类名`")]
    MalformedIdentifier(String),
    #[error("找不到模块`{0}`")]
    ModuleNotFound(String),
    #[error("模块`{module}`中没有`{class}`")]
    ClassNotFound { module: String, class: String },
}

/// 按`模块路径@类名`查找模型类
pub fn load_model_class(identifier: &str) -> Result<&'static ModelClass, RegistryError> {
    let (module, class) = identifier
        .split_once('@')
        .filter(|(m, c)| !m.is_empty() && !c.is_empty())
        .ok_or_else(|| RegistryError::MalformedIdentifier(identifier.to_string()))?;

    let mut in_module = MODEL_CLASSES.iter().filter(|c| c.module == module).peekable();
    if in_module.peek().is_none() {
        return Err(RegistryError::ModuleNotFound(module.to_string()));
    }
    in_module
        .find(|c| c.name == class)
        .ok_or_else(|| RegistryError::ClassNotFound {
            module: module.to_string(),
            class: class.to_string(),
        })
}
