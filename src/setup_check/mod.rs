/*
 * @Description  : 环境自检：加速器、AdamATan2 回退优化器与项目组件导入。
 */

mod config;
mod probe;


pub use config::SetupCheckConfig;
pub use probe::{probe_accelerator, probe_imports, probe_optimizer, run_optimizer_smoke_test};

use std::io::Write;

use crate::device::Accelerator;
use crate::utils::ModuleRegistry;
use probe::report;

/// 检测项总数
pub const TOTAL_CHECKS: usize = 3;

/// 通过的检测项计数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub total: usize,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            passed: 0,
            total: TOTAL_CHECKS,
        }
    }
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, passed: bool) {
        if passed {
            self.passed += 1;
        }
    }

    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// 依次运行三项检测，每项之间互不影响
pub fn run_all(
    accelerator: &dyn Accelerator,
    registry: &ModuleRegistry,
    config: &SetupCheckConfig,
    out: &mut dyn Write,
) -> Tally {
    report(out, format_args!("HRM Setup Verification Test"));
    report(out, format_args!("{}", "=".repeat(50)));

    let mut tally = Tally::new();
    tally.record(probe_accelerator(accelerator, out));
    tally.record(probe_optimizer(accelerator, config, out));
    tally.record(probe_imports(registry, out));
    tally
}

/// 打印汇总与结论
pub fn print_summary(tally: &Tally, out: &mut dyn Write) {
    report(out, format_args!("\n=== Summary ==="));
    report(
        out,
        format_args!("Tests passed: {}/{}", tally.passed, tally.total),
    );

    if tally.all_passed() {
        report(out, format_args!("✅ Setup verification successful!"));
        report(
            out,
            format_args!("\nYour HRM environment is ready with Intel Arc GPU support."),
        );
        report(
            out,
            format_args!("You can now run the quick Sudoku demo or other experiments."),
        );
        report(
            out,
            format_args!("\nNote: FlashAttention was skipped (not compatible with Intel Arc)."),
        );
        report(
            out,
            format_args!("The model will use standard attention mechanisms instead."),
        );
    } else {
        report(
            out,
            format_args!("❌ Some tests failed. Please check the errors above."),
        );
    }
}
