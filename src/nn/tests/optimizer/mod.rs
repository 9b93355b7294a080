mod adam;
mod adam_atan2;
mod config;

use crate::nn::{ParamId, ParamStore};
use crate::tensor::Tensor;

/// 创建只含一个[1, 1]参数的存储，并预先写入梯度
fn single_param(value: f32, grad: f32) -> (ParamStore, ParamId) {
    let mut store = ParamStore::new();
    let w = store.add("w", Tensor::new(&[value], &[1, 1]));
    store.accumulate_grad(w, &Tensor::new(&[grad], &[1, 1])).unwrap();
    (store, w)
}

fn scalar_of(store: &ParamStore, id: ParamId) -> f32 {
    store.value(id).unwrap().number().unwrap()
}
