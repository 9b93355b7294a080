/*
 * @Description  : AdamATan2 回退优化器测试：构造参数原样转交、提示恰好一次、数值与 Adam 一致
 */

use crate::assert_err;
use crate::nn::optimizer::{Adam, AdamAtan2, AdamConfig, FALLBACK_NOTICE, Optimizer, OptimizerError};
use crate::nn::{Linear, MseLoss, ParamStore};
use crate::tensor::Tensor;

fn sample_configs() -> Vec<AdamConfig> {
    vec![
        AdamConfig::default(),
        AdamConfig::default().with_lr(0.01),
        AdamConfig::default()
            .with_lr(3e-4)
            .with_betas(0.8, 0.95)
            .with_eps(1e-6)
            .with_weight_decay(0.1)
            .with_amsgrad(true),
        AdamConfig::default().with_lr(0.0).with_betas(0.0, 0.0).with_eps(0.0),
    ]
}

#[test]
fn test_param_groups_match_adam() {
    let mut store = ParamStore::new();
    let fc = Linear::new_seeded(&mut store, 10, 1, true, "fc", 0);

    for config in sample_configs() {
        let fallback = AdamAtan2::with_notice(&fc.parameters(), config, |_| {}).unwrap();
        let adam = Adam::new(&fc.parameters(), config).unwrap();
        assert_eq!(fallback.param_groups(), adam.param_groups());
        assert_eq!(fallback.param_groups()[0].config, config);
        assert_eq!(fallback.learning_rate(), config.lr);
    }
}

#[test]
fn test_emits_exactly_one_notice() {
    let mut store = ParamStore::new();
    let w = store.add("w", Tensor::zeros(&[2, 2]));

    for config in sample_configs() {
        let mut notices = Vec::new();
        let _optimizer =
            AdamAtan2::with_notice(&[w], config, |notice| notices.push(notice.to_string()))
                .unwrap();
        assert_eq!(notices, vec![FALLBACK_NOTICE.to_string()]);
    }
    assert!(FALLBACK_NOTICE.contains("AdamATan2"));
}

#[test]
fn test_rejected_config_is_forwarded_unchanged() {
    let mut store = ParamStore::new();
    let w = store.add("w", Tensor::zeros(&[1]));
    let config = AdamConfig::default().with_betas(0.9, 1.5);

    let mut notices = 0;
    let result = AdamAtan2::with_notice(&[w], config, |_| notices += 1);
    assert_eq!(result.err(), Adam::new(&[w], config).err());
    assert_eq!(notices, 0);

    assert_err!(
        AdamAtan2::new(&[], AdamConfig::default()),
        OptimizerError::EmptyParameterList
    );
}

#[test]
fn test_new_logs_and_delegates() {
    let mut store = ParamStore::new();
    let w = store.add("w", Tensor::zeros(&[1]));
    let optimizer = AdamAtan2::new(&[w], AdamConfig::default().with_lr(0.01)).unwrap();
    assert_eq!(optimizer.inner().param_groups(), optimizer.param_groups());
    assert_eq!(optimizer.learning_rate(), 0.01);
}

#[test]
fn test_updates_identical_to_adam() {
    // 同样的初始参数、数据与超参数下，回退优化器与标准 Adam 的轨迹逐位一致
    let run = |use_fallback: bool| -> Vec<f32> {
        let mut store = ParamStore::new();
        let fc = Linear::new_seeded(&mut store, 4, 2, true, "fc", 11);
        let config = AdamConfig::default().with_lr(0.05).with_weight_decay(0.01);
        let mut optimizer: Box<dyn Optimizer> = if use_fallback {
            Box::new(AdamAtan2::with_notice(&fc.parameters(), config, |_| {}).unwrap())
        } else {
            Box::new(Adam::new(&fc.parameters(), config).unwrap())
        };

        let criterion = MseLoss::new();
        let x = Tensor::normal_seeded(0.0, 1.0, &[8, 4], 1);
        let y = Tensor::normal_seeded(0.0, 1.0, &[8, 2], 2);
        for _ in 0..5 {
            optimizer.zero_grad(&mut store).unwrap();
            let pred = fc.forward(&store, &x).unwrap();
            let grad = criterion.backward(&pred, &y).unwrap();
            fc.backward(&mut store, &x, &grad).unwrap();
            optimizer.step(&mut store).unwrap();
        }
        fc.parameters()
            .into_iter()
            .flat_map(|id| store.value(id).unwrap().to_vec())
            .collect()
    };

    assert_eq!(run(true), run(false));
}

#[test]
fn test_fallback_reduces_loss() {
    // 拟合 y = 2x + 1
    let mut store = ParamStore::new();
    let fc = Linear::new_seeded(&mut store, 1, 1, true, "fc", 3);
    let mut optimizer =
        AdamAtan2::with_notice(&fc.parameters(), AdamConfig::default().with_lr(0.05), |_| {})
            .unwrap();
    let criterion = MseLoss::new();
    let x = Tensor::new(&[-1.0, -0.5, 0.0, 0.5, 1.0], &[5, 1]);
    let y = &x * 2.0 + 1.0;

    let initial_loss = criterion
        .forward(&fc.forward(&store, &x).unwrap(), &y)
        .unwrap();
    for _ in 0..200 {
        optimizer.zero_grad(&mut store).unwrap();
        let pred = fc.forward(&store, &x).unwrap();
        let grad = criterion.backward(&pred, &y).unwrap();
        fc.backward(&mut store, &x, &grad).unwrap();
        optimizer.step(&mut store).unwrap();
    }
    let final_loss = criterion
        .forward(&fc.forward(&store, &x).unwrap(), &y)
        .unwrap();

    assert!(final_loss.is_finite());
    assert!(final_loss < initial_loss * 0.1, "{initial_loss} -> {final_loss}");
}
