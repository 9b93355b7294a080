/*
 * @Description  : 项目模块注册表。
 *
 * 环境自检需要确认上层项目依赖的组件“可以导入”。Rust 在编译期就完成了链接，
 * 这里用一张表记录项目对外公开的模块与符号，导入即查表并运行该模块的自检钩子。
 */

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::data::PuzzleDatasetMetadata;
use crate::utils::functions::{MODEL_CLASSES, load_model_class};

/// 模块自检失败的原因
pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// 模块被导入时执行的自检
pub type ModuleInit = fn() -> Result<(), InitError>;

/// 导入错误
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No module named '{0}'")]
    ModuleNotFound(String),
    #[error("cannot import name '{symbol}' from '{module}'")]
    SymbolNotFound { module: String, symbol: String },
    #[error("模块`{module}`初始化失败: {source}")]
    InitFailed {
        module: String,
        #[source]
        source: InitError,
    },
}

#[derive(Debug, Clone)]
struct ModuleEntry {
    symbols: BTreeSet<String>,
    init: Option<ModuleInit>,
}

/// 模块注册表
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, ModuleEntry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 本项目的模块：谜题数据集与模型类查找工具
    pub fn project() -> Self {
        let mut registry = Self::new();
        registry
            .register(
                "puzzle_dataset",
                &["PuzzleDatasetMetadata", "PuzzleDatasetConfig"],
                Some(check_puzzle_dataset),
            )
            .register("utils.functions", &["load_model_class"], Some(check_model_classes));
        registry
    }

    /// 注册（或覆盖）一个模块
    pub fn register(
        &mut self,
        module: &str,
        symbols: &[&str],
        init: Option<ModuleInit>,
    ) -> &mut Self {
        self.modules.insert(
            module.to_string(),
            ModuleEntry {
                symbols: symbols.iter().map(|s| s.to_string()).collect(),
                init,
            },
        );
        self
    }

    /// 移除模块，返回其是否存在
    pub fn remove(&mut self, module: &str) -> bool {
        self.modules.remove(module).is_some()
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    /// 导入模块：模块须已注册，且其自检通过
    pub fn import(&self, module: &str) -> Result<(), ImportError> {
        let entry = self
            .modules
            .get(module)
            .ok_or_else(|| ImportError::ModuleNotFound(module.to_string()))?;
        if let Some(init) = entry.init {
            init().map_err(|source| ImportError::InitFailed {
                module: module.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// 从模块中导入符号
    pub fn import_symbol(&self, module: &str, symbol: &str) -> Result<(), ImportError> {
        self.import(module)?;
        if self.modules[module].symbols.contains(symbol) {
            Ok(())
        } else {
            Err(ImportError::SymbolNotFound {
                module: module.to_string(),
                symbol: symbol.to_string(),
            })
        }
    }
}

fn check_puzzle_dataset() -> Result<(), InitError> {
    // 元数据须能与 JSON 互转
    let metadata = PuzzleDatasetMetadata {
        pad_id: 0,
        ignore_label_id: None,
        blank_identifier_id: 0,
        vocab_size: 1,
        seq_len: 1,
        num_puzzle_identifiers: 1,
        total_groups: 1,
        mean_puzzle_examples: 1.0,
        sets: vec!["all".to_string()],
    };
    let text = serde_json::to_string(&metadata)?;
    let parsed = PuzzleDatasetMetadata::from_json(&text)?;
    if parsed != metadata {
        return Err("元数据与 JSON 互转结果不一致".into());
    }
    Ok(())
}

fn check_model_classes() -> Result<(), InitError> {
    for class in MODEL_CLASSES {
        load_model_class(&class.identifier())?;
    }
    Ok(())
}
