//! # 常用接口模块
//!
//! 本模块提供模型类查找、模块注册表等常用操作接口

pub mod functions;
pub mod module_registry;

pub use module_registry::{ImportError, InitError, ModuleInit, ModuleRegistry};
