use burn::tensor::{backend::Backend, Data, Int, Shape, Tensor};

use crate::error::{check_len, BanditError, Result};

/// Scatter `values` into a zero tensor of length `total_len` at the positions `idxs`
///
/// `values[k]` lands at `idxs[k]`; positions not named in `idxs` stay zero. Indices are expected
/// to be unique; on a repeated index the placed value is unspecified.
pub fn place_values_at_indices<B: Backend>(
    values: Tensor<B, 1>,
    idxs: &[usize],
    total_len: usize,
) -> Result<Tensor<B, 1>> {
    let [len] = values.dims();
    check_len("idxs", len, idxs.len())?;
    if let Some(&index) = idxs.iter().find(|&&i| i >= total_len) {
        return Err(BanditError::IndexOutOfRange {
            index,
            len: total_len,
        });
    }

    let device = values.device();
    let placed = Tensor::<B, 1>::zeros([total_len], &device);
    if idxs.is_empty() {
        return Ok(placed);
    }

    let idxs = Data::new(
        idxs.iter().map(|&i| i as i64).collect::<Vec<_>>(),
        Shape::new([len]),
    )
    .convert::<B::IntElem>();
    let idxs = Tensor::<B, 1, Int>::from_data(idxs, &device);

    // `select_assign` sums into the target, which is a plain write on a zero tensor
    Ok(placed.select_assign(0, idxs, values))
}
