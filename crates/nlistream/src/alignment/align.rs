//! # Companion Alignment

use ndarray::{Array, Axis, Dimension, Slice};
use num_traits::Zero;

use crate::errors::{NSResult, NliStreamError};

/// Where padding goes on the sequence axis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PadSide {
    /// Pad after the values.
    #[default]
    Right,

    /// Pad before the values.
    Left,
}

/// Zero-pad axis 1 of `x` to `target`; longer arrays are returned unchanged.
///
/// ## Returns
/// The padded array; or [`NliStreamError::UnsupportedRank`] for rank < 2.
pub fn pad_axis<A: Clone + Zero, D: Dimension>(
    x: Array<A, D>,
    target: usize,
    side: PadSide,
    field: &'static str,
) -> NSResult<Array<A, D>> {
    if x.ndim() < 2 {
        return Err(NliStreamError::UnsupportedRank {
            field,
            rank: x.ndim(),
        });
    }

    let len = x.len_of(Axis(1));
    if len >= target {
        return Ok(x);
    }

    let mut shape = x.raw_dim();
    shape[1] = target;
    let mut out = Array::zeros(shape);

    let offset = match side {
        PadSide::Right => 0,
        PadSide::Left => target - len,
    };
    out.slice_axis_mut(Axis(1), Slice::from(offset..offset + len))
        .assign(&x);
    Ok(out)
}

/// Pad the shorter of two companion fields on axis 1 to the longer's length.
///
/// After alignment both arrays have the same axis-1 length; values are
/// unchanged apart from the added zeros.
pub fn align_pair<A: Clone + Zero, D: Dimension>(
    x: Array<A, D>,
    y: Array<A, D>,
    side: PadSide,
    field: &'static str,
) -> NSResult<(Array<A, D>, Array<A, D>)> {
    if x.ndim() < 2 {
        return Err(NliStreamError::UnsupportedRank {
            field,
            rank: x.ndim(),
        });
    }
    let target = x.len_of(Axis(1)).max(y.len_of(Axis(1)));
    Ok((
        pad_axis(x, target, side, field)?,
        pad_axis(y, target, side, field)?,
    ))
}
