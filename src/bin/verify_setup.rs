/*
 * @Description  : HRM 环境自检。无论检测结果如何都正常退出，结论见输出的汇总。
 *
 * 日志级别可通过`RUST_LOG`调整，默认为`info`。
 */

use std::io;

use env_logger::Env;
use hrm_compat::device::HostOnly;
use hrm_compat::setup_check::{SetupCheckConfig, print_summary, run_all};
use hrm_compat::utils::ModuleRegistry;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let tally = run_all(
        &HostOnly,
        &ModuleRegistry::project(),
        &SetupCheckConfig::default(),
        &mut out,
    );
    print_summary(&tally, &mut out);
}
