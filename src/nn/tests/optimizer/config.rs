use crate::assert_err;
use crate::nn::optimizer::{AdamConfig, OptimizerError};

#[test]
fn test_default_config() {
    let config = AdamConfig::default();
    assert_eq!(config.lr, 1e-3);
    assert_eq!(config.betas, (0.9, 0.999));
    assert_eq!(config.eps, 1e-8);
    assert_eq!(config.weight_decay, 0.0);
    assert!(!config.amsgrad);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_setters() {
    let config = AdamConfig::default()
        .with_lr(0.01)
        .with_betas(0.8, 0.99)
        .with_eps(1e-6)
        .with_weight_decay(0.1)
        .with_amsgrad(true);
    assert_eq!(
        config,
        AdamConfig {
            lr: 0.01,
            betas: (0.8, 0.99),
            eps: 1e-6,
            weight_decay: 0.1,
            amsgrad: true,
        }
    );
}

#[test]
fn test_validate_rejects_invalid_values() {
    let base = AdamConfig::default();
    assert_err!(
        base.with_lr(-0.1).validate(),
        OptimizerError::InvalidLearningRate(lr) if *lr == -0.1
    );
    assert_err!(
        base.with_lr(f32::NAN).validate(),
        OptimizerError::InvalidLearningRate(_)
    );
    assert_err!(base.with_eps(-1.0).validate(), OptimizerError::InvalidEpsilon(_));
    assert_err!(
        base.with_betas(1.0, 0.999).validate(),
        OptimizerError::InvalidBeta { index: 0, .. }
    );
    assert_err!(
        base.with_betas(0.9, -0.1).validate(),
        OptimizerError::InvalidBeta { index: 1, .. }
    );
    assert_err!(
        base.with_weight_decay(-0.01).validate(),
        OptimizerError::InvalidWeightDecay(_)
    );
}

#[test]
fn test_validate_accepts_boundary_values() {
    let config = AdamConfig::default()
        .with_lr(0.0)
        .with_eps(0.0)
        .with_betas(0.0, 0.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serde_with_defaults() {
    let config: AdamConfig = serde_json::from_str(r#"{"lr": 0.01}"#).unwrap();
    assert_eq!(config, AdamConfig::default().with_lr(0.01));

    let json = serde_json::to_string(&config).unwrap();
    let back: AdamConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
