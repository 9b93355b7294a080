/*
 * @Description  : Adam 优化器测试
 */

use approx::assert_abs_diff_eq;

use super::{scalar_of, single_param};
use crate::assert_err;
use crate::nn::optimizer::{Adam, AdamConfig, Optimizer, OptimizerError, ParamGroup};
use crate::nn::ParamStore;
use crate::tensor::Tensor;

#[test]
fn test_adam_creation() {
    let (_, w) = single_param(1.0, 0.0);
    let adam = Adam::new(&[w], AdamConfig::default().with_lr(0.001)).unwrap();
    assert_eq!(adam.learning_rate(), 0.001);
    assert_eq!(adam.param_groups().len(), 1);
    assert_eq!(adam.param_groups()[0].params, vec![w]);

    let adam_default = Adam::new_default(&[w], 0.01).unwrap();
    assert_eq!(adam_default.param_groups()[0].config, AdamConfig::default().with_lr(0.01));
}

#[test]
fn test_adam_learning_rate_modification() {
    let (_, w) = single_param(1.0, 0.0);
    let mut adam = Adam::new_default(&[w], 0.001).unwrap();
    adam.set_learning_rate(0.0001);
    assert_eq!(adam.learning_rate(), 0.0001);
    assert_eq!(adam.param_groups()[0].config.lr, 0.0001);
}

#[test]
fn test_adam_update() {
    // 初始值: w=2, grad=3
    // Adam更新 (beta1=0.9, beta2=0.999, eps=1e-8, lr=0.1):
    //   m_1 = 0.1 * 3 = 0.3
    //   v_1 = 0.001 * 9 = 0.009
    //   m_hat = 0.3 / (1-0.9) = 3.0
    //   v_hat = 0.009 / (1-0.999) = 9.0
    //   update = 0.1 * 3.0 / (sqrt(9.0) + 1e-8) ≈ 0.1
    //   w_new = 2.0 - 0.1 ≈ 1.9
    // PyTorch验证: w_new = 1.899999976158142
    let (mut store, w) = single_param(2.0, 3.0);
    let mut adam = Adam::new_default(&[w], 0.1).unwrap();
    adam.step(&mut store).unwrap();

    assert_abs_diff_eq!(scalar_of(&store, w), 1.9, epsilon = 1e-5);
    assert_eq!(adam.step_count(w), 1);
}

#[test]
fn test_adam_two_steps_match_closed_form() {
    // 梯度保持为3：第二步 m̂ = 3, v̂ = 9，更新量同样约为 lr
    let (mut store, w) = single_param(2.0, 3.0);
    let mut adam = Adam::new_default(&[w], 0.1).unwrap();
    adam.step(&mut store).unwrap();
    adam.step(&mut store).unwrap();

    assert_abs_diff_eq!(scalar_of(&store, w), 1.8, epsilon = 1e-5);
    assert_eq!(adam.step_count(w), 2);
}

#[test]
fn test_adam_skips_parameters_without_grad() {
    let mut store = ParamStore::new();
    let w = store.add("w", Tensor::new(&[1.0], &[1, 1]));
    let mut adam = Adam::new_default(&[w], 0.1).unwrap();

    adam.step(&mut store).unwrap();
    assert_eq!(scalar_of(&store, w), 1.0);
    assert_eq!(adam.step_count(w), 0);
}

#[test]
fn test_adam_zero_grad() {
    let (mut store, w) = single_param(1.0, 5.0);
    let mut adam = Adam::new_default(&[w], 0.1).unwrap();
    adam.zero_grad(&mut store).unwrap();
    assert_eq!(store.grad(w).unwrap(), None);
}

#[test]
fn test_adam_reset() {
    let (mut store, w) = single_param(1.0, 2.0);
    let mut adam = Adam::new_default(&[w], 0.01).unwrap();
    adam.step(&mut store).unwrap();
    assert_eq!(adam.step_count(w), 1);

    // 重置（清除矩估计和时间步）
    adam.reset();
    assert_eq!(adam.step_count(w), 0);

    // 重置后再更新，相当于从第一步开始：更新量约为lr
    let before = scalar_of(&store, w);
    adam.step(&mut store).unwrap();
    assert_abs_diff_eq!(before - scalar_of(&store, w), 0.01, epsilon = 1e-6);
}

#[test]
fn test_adam_weight_decay() {
    // 梯度为0时，只有L2惩罚项 λθ 推动参数：g = 0.1 * 2 = 0.2，首步更新量约为lr
    let (mut store, w) = single_param(2.0, 0.0);
    let config = AdamConfig::default().with_lr(0.1).with_weight_decay(0.1);
    let mut adam = Adam::new(&[w], config).unwrap();
    adam.step(&mut store).unwrap();
    assert_abs_diff_eq!(scalar_of(&store, w), 1.9, epsilon = 1e-5);

    // 对照：无权重衰减时参数不动
    let (mut store, w) = single_param(2.0, 0.0);
    let mut adam = Adam::new_default(&[w], 0.1).unwrap();
    adam.step(&mut store).unwrap();
    assert_eq!(scalar_of(&store, w), 2.0);
}

#[test]
fn test_adam_amsgrad_uses_max_second_moment() {
    // 先大梯度后小梯度：AMSGrad 的分母保留历史最大值，第二步更新量更小
    let second_step_delta = |amsgrad: bool| {
        let (mut store, w) = single_param(0.0, 10.0);
        let config = AdamConfig::default().with_lr(0.1).with_amsgrad(amsgrad);
        let mut adam = Adam::new(&[w], config).unwrap();
        adam.step(&mut store).unwrap();

        adam.zero_grad(&mut store).unwrap();
        store.accumulate_grad(w, &Tensor::new(&[0.1], &[1, 1])).unwrap();
        let before = scalar_of(&store, w);
        adam.step(&mut store).unwrap();
        (before - scalar_of(&store, w)).abs()
    };

    let plain = second_step_delta(false);
    let amsgrad = second_step_delta(true);
    assert!(amsgrad < plain, "amsgrad={amsgrad}, plain={plain}");
}

#[test]
fn test_adam_param_groups() {
    let mut store = ParamStore::new();
    let a = store.add("a", Tensor::new(&[1.0], &[1, 1]));
    let b = store.add("b", Tensor::new(&[1.0], &[1, 1]));
    store.accumulate_grad(a, &Tensor::new(&[1.0], &[1, 1])).unwrap();
    store.accumulate_grad(b, &Tensor::new(&[1.0], &[1, 1])).unwrap();

    // 分层学习率
    let mut adam = Adam::with_groups(vec![
        ParamGroup::new(&[a], AdamConfig::default().with_lr(0.1)),
        ParamGroup::new(&[b], AdamConfig::default().with_lr(0.01)),
    ])
    .unwrap();
    adam.step(&mut store).unwrap();

    assert_abs_diff_eq!(scalar_of(&store, a), 0.9, epsilon = 1e-5);
    assert_abs_diff_eq!(scalar_of(&store, b), 0.99, epsilon = 1e-5);
    assert_eq!(adam.learning_rate(), 0.1);
}

#[test]
fn test_adam_construction_errors() {
    let mut store = ParamStore::new();
    let a = store.add("a", Tensor::zeros(&[1]));

    assert_err!(Adam::new(&[], AdamConfig::default()), OptimizerError::EmptyParameterList);
    assert_err!(
        Adam::new(&[a], AdamConfig::default().with_lr(-1.0)),
        OptimizerError::InvalidLearningRate(_)
    );
    assert_err!(
        Adam::with_groups(vec![
            ParamGroup::new(&[a], AdamConfig::default()),
            ParamGroup::new(&[a], AdamConfig::default()),
        ]),
        OptimizerError::DuplicateParameter(id) if *id == a
    );

    let mut adam = Adam::new(&[a], AdamConfig::default()).unwrap();
    assert_err!(
        adam.add_param_group(ParamGroup::new(&[a], AdamConfig::default())),
        OptimizerError::DuplicateParameter(_)
    );
    assert_eq!(adam.param_groups().len(), 1);
}

#[test]
fn test_adam_unknown_parameter() {
    let mut other = ParamStore::new();
    other.add("x", Tensor::zeros(&[1]));
    let foreign = other.add("y", Tensor::zeros(&[1]));

    let mut store = ParamStore::new();
    let mut adam = Adam::new_default(&[foreign], 0.1).unwrap();
    assert_err!(adam.step(&mut store), OptimizerError::Nn(_));
}
