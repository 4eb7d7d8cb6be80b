use burn::tensor::{backend::Backend, Data, Element, Tensor};

/// A trait for per-arm value vectors that can be turned into a 1D float tensor
///
/// Lets observation batches be passed as plain vectors, slices, arrays, or tensors that already
/// live on a device.
pub trait ToTensor<B: Backend> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1>;
}

fn from_vec<B: Backend, E: Element>(values: Vec<E>, device: &B::Device) -> Tensor<B, 1> {
    let len = values.len();
    Tensor::from_data(
        Data::new(values, [len].into()).convert::<B::FloatElem>(),
        device,
    )
}

impl<B: Backend> ToTensor<B> for Tensor<B, 1> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        self.to_device(device)
    }
}

impl<B: Backend> ToTensor<B> for Vec<f64> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self, device)
    }
}

impl<B: Backend> ToTensor<B> for Vec<f32> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self, device)
    }
}

impl<B: Backend> ToTensor<B> for &[f64] {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self.to_vec(), device)
    }
}

impl<B: Backend> ToTensor<B> for &[f32] {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self.to_vec(), device)
    }
}

impl<B: Backend> ToTensor<B> for &Vec<f64> {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self.clone(), device)
    }
}

impl<B: Backend, const N: usize> ToTensor<B> for [f64; N] {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self.to_vec(), device)
    }
}

impl<B: Backend, const N: usize> ToTensor<B> for [f32; N] {
    fn to_tensor(self, device: &B::Device) -> Tensor<B, 1> {
        from_vec(self.to_vec(), device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn conversions_keep_values() {
        let device = device();
        let from_array: Tensor<TestBackend, 1> = [1.0f64, 2.5, -3.0].to_tensor(&device);
        let from_f32: Tensor<TestBackend, 1> = vec![1.0f32, 2.5, -3.0].to_tensor(&device);
        let from_slice: Tensor<TestBackend, 1> = [1.0f64, 2.5, -3.0][..].to_tensor(&device);
        for t in [from_array, from_f32, from_slice] {
            assert_eq!(to_vec(t), vec![1.0, 2.5, -3.0]);
        }
    }

    #[test]
    fn f64_precision_preserved() {
        let x = 0.1f64 + 1e-12;
        let t: Tensor<TestBackend, 1> = vec![x].to_tensor(&device());
        assert_eq!(to_vec(t), vec![x]);
    }
}
