use burn::{
    backend::NdArray,
    tensor::{backend::Backend, Tensor},
};

pub type TestBackend = NdArray<f64>;

pub fn device() -> <TestBackend as Backend>::Device {
    Default::default()
}

pub fn to_vec(tensor: Tensor<TestBackend, 1>) -> Vec<f64> {
    tensor.into_data().value
}

/// Asserts that two floats are within `tol` of each other
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
