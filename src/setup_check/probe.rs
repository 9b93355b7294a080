/*
 * @Description  : 三项互相独立的环境检测。
 *
 * 每项检测都把报告行写入`out`，并以布尔值返回是否通过；
 * 内部错误只会被记录和打印，不会向外传播。
 */

use std::fmt;
use std::io::Write;

use anyhow::{Context, bail, ensure};

use super::SetupCheckConfig;
use crate::device::{Accelerator, Device, DeviceError, HostOnly};
use crate::nn::optimizer::{AdamAtan2, AdamConfig, Optimizer};
use crate::nn::{Linear, MseLoss, ParamStore};
use crate::tensor::Tensor;
use crate::utils::ModuleRegistry;

/// 加速器矩阵乘法检测所用随机矩阵的种子
const MAT_MUL_SEED: u64 = 0;

/// 写一行报告；写失败只记日志，不影响检测结果
pub(super) fn report(out: &mut dyn Write, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        log::error!("无法写出检测报告: {e}");
    }
}

/// 检测加速器：可用时再确认设备数、当前设备与一次5×3·3×5的矩阵乘法
pub fn probe_accelerator(accelerator: &dyn Accelerator, out: &mut dyn Write) -> bool {
    report(out, format_args!("=== XPU Test ==="));
    report(
        out,
        format_args!("{} version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    );

    let available = accelerator.is_available();
    report(out, format_args!("XPU available: {available}"));
    if !available {
        report(out, format_args!("XPU not available - falling back to CPU"));
        return false;
    }

    match check_accelerator(accelerator, out) {
        Ok(()) => true,
        Err(e) => {
            log::error!("加速器检测失败: {e:#}");
            report(out, format_args!("XPU test failed: {e:#}"));
            false
        }
    }
}

fn check_accelerator(accelerator: &dyn Accelerator, out: &mut dyn Write) -> anyhow::Result<()> {
    let count = accelerator.device_count().context("无法获取加速器数量")?;
    report(out, format_args!("XPU device count: {count}"));
    ensure!(count > 0, "加速器报告可用，但设备数为0");
    let current = accelerator.current_device().context("无法获取当前加速器")?;
    report(out, format_args!("Current XPU device: {current}"));
    if current >= count {
        return Err(DeviceError::InvalidIndex {
            index: current,
            count,
        })
        .context("当前加速器序号无效");
    }

    let x = Tensor::normal_seeded(0.0, 1.0, &[5, 3], MAT_MUL_SEED);
    let y = Tensor::normal_seeded(0.0, 1.0, &[3, 5], MAT_MUL_SEED + 1);
    let z = accelerator
        .mat_mul(Device::Accelerator(current), &x, &y)
        .context("加速器矩阵乘法失败")?;
    ensure!(
        z.shape() == [5, 5],
        "矩阵乘法结果形状应为[5, 5]，实际为{:?}",
        z.shape()
    );
    report(out, format_args!("XPU tensor operations working: {:?}", z.shape()));
    Ok(())
}

/// 检测 AdamATan2 回退优化器能否完成几步训练
pub fn probe_optimizer(
    accelerator: &dyn Accelerator,
    config: &SetupCheckConfig,
    out: &mut dyn Write,
) -> bool {
    report(out, format_args!("\n=== AdamATan2 Test ==="));
    match run_optimizer_smoke_test(accelerator, config) {
        Ok(loss) => {
            report(
                out,
                format_args!("AdamATan2 optimizer working - final loss: {loss:.4}"),
            );
            true
        }
        Err(e) => {
            log::error!("AdamATan2 检测失败: {e:#}");
            report(out, format_args!("AdamATan2 test failed: {e:#}"));
            false
        }
    }
}

/// 用 Linear 模型、MSE 损失与 [`AdamAtan2`] 在随机数据上训练若干步，返回最后一步的损失
pub fn run_optimizer_smoke_test(
    accelerator: &dyn Accelerator,
    config: &SetupCheckConfig,
) -> anyhow::Result<f32> {
    if config.iterations == 0 {
        bail!("迭代次数必须大于0");
    }

    let device = Device::select(accelerator).context("无法选择计算设备")?;
    log::info!("优化器检测运行于{device}");
    // 加速器不可用时不再触碰它，计算全部留在CPU
    let backend: &dyn Accelerator = if device.is_accelerator() {
        accelerator
    } else {
        &HostOnly
    };

    let mut store = ParamStore::new();
    let model = Linear::new_seeded(
        &mut store,
        config.in_features,
        config.out_features,
        true,
        "fc",
        config.seed,
    );
    let mut optimizer = AdamAtan2::new(
        &model.parameters(),
        AdamConfig::default().with_lr(config.learning_rate),
    )
    .context("无法创建 AdamATan2 优化器")?;

    let x = Tensor::normal_seeded(
        0.0,
        1.0,
        &[config.batch_size, config.in_features],
        config.seed.wrapping_add(2),
    );
    let y = Tensor::normal_seeded(
        0.0,
        1.0,
        &[config.batch_size, config.out_features],
        config.seed.wrapping_add(3),
    );
    let criterion = MseLoss::new();

    let mut loss = f32::NAN;
    for iteration in 1..=config.iterations {
        optimizer.zero_grad(&mut store)?;
        let output = model.forward_on(backend, device, &store, &x)?;
        loss = criterion.forward(&output, &y)?;
        let grad = criterion.backward(&output, &y)?;
        model.backward_on(backend, device, &mut store, &x, &grad)?;
        optimizer.step(&mut store)?;
        log::debug!("第{iteration}次迭代，loss={loss:.6}");
    }

    ensure!(loss.is_finite(), "损失不是有限值: {loss}");
    Ok(loss)
}

/// 检测项目组件能否导入
pub fn probe_imports(registry: &ModuleRegistry, out: &mut dyn Write) -> bool {
    report(out, format_args!("\n=== Import Test ==="));
    let result = registry
        .import("puzzle_dataset")
        .and_then(|()| registry.import_symbol("utils.functions", "load_model_class"));
    match result {
        Ok(()) => {
            report(out, format_args!("Core imports successful"));
            true
        }
        Err(e) => {
            log::error!("导入检测失败: {e}");
            report(out, format_args!("Import test failed: {e}"));
            false
        }
    }
}
