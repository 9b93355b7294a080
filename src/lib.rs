//! # HRM Compat
//!
//! `hrm_compat`为 HRM（Hierarchical Reasoning Model）在没有 CUDA 扩展的机器（如 Intel Arc）上
//! 提供兼容层：与 AdamATan2 构造接口一致、内部委托给标准 Adam 的回退优化器，
//! 以及检查加速器、优化器与项目组件是否就绪的环境自检工具（见`verify_setup`）。
//!

pub mod data;
pub mod device;
pub mod errors;
pub mod nn;
pub mod setup_check;
pub mod tensor;
pub mod utils;
