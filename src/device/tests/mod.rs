use crate::device::{Accelerator, Device, DeviceError, HostOnly};
use crate::tensor::Tensor;

#[test]
fn test_host_only_is_never_available() {
    let host = HostOnly;
    assert!(!host.is_available());
    assert_eq!(
        host.device_count(),
        Err(DeviceError::Unavailable("xpu".to_string()))
    );
    assert!(host.current_device().is_err());
}

#[test]
fn test_select_falls_back_to_cpu() {
    assert_eq!(Device::select(&HostOnly), Ok(Device::Cpu));
    assert!(!Device::Cpu.is_accelerator());
}

#[test]
fn test_host_only_mat_mul_on_cpu() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let b = Tensor::new(&[1., 0., 0., 1.], &[2, 2]);
    assert_eq!(HostOnly.mat_mul(Device::Cpu, &a, &b), Ok(a.clone()));
    assert_eq!(
        HostOnly.mat_mul(Device::Accelerator(0), &a, &b),
        Err(DeviceError::Unavailable("xpu".to_string()))
    );
}

#[test]
fn test_host_only_mat_mul_shape_error() {
    let a = Tensor::zeros(&[2, 3]);
    let result = HostOnly.mat_mul(Device::Cpu, &a, &a);
    assert!(matches!(result, Err(DeviceError::Tensor(_))));
}

#[test]
fn test_device_display() {
    assert_eq!(Device::Cpu.to_string(), "cpu");
    assert_eq!(Device::Accelerator(1).to_string(), "xpu:1");
}
