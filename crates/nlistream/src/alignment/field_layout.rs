//! # Field Layout

use ndarray::{Array, Axis, Dimension, Slice};

use crate::{
    errors::{NSResult, NliStreamError},
    types::SentenceSide,
};

/// The output fields of an [`NliBatch`](crate::NliBatch), in tuple order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Field {
    /// Premise word ids.
    Premise,
    /// Hypothesis word ids.
    Hypothesis,
    /// Gold label.
    Label,
    /// Premise antonym indicators.
    Antonym1,
    /// Hypothesis antonym indicators.
    Antonym2,
    /// Premise exact-match indicators.
    Exact1to2,
    /// Hypothesis exact-match indicators.
    Exact2to1,
    /// Premise synonym indicators.
    Synonym1,
    /// Hypothesis synonym indicators.
    Synonym2,
    /// Premise char ids.
    PremiseChars,
    /// Hypothesis char ids.
    HypothesisChars,
    /// Premise POS ids.
    PremisePos,
    /// Hypothesis POS ids.
    HypothesisPos,
}

impl Field {
    /// The field's name.
    pub fn name(self) -> &'static str {
        use Field::*;
        match self {
            Premise => "premise",
            Hypothesis => "hypothesis",
            Label => "label",
            Antonym1 => "antonym1",
            Antonym2 => "antonym2",
            Exact1to2 => "exact1to2",
            Exact2to1 => "exact2to1",
            Synonym1 => "synonym1",
            Synonym2 => "synonym2",
            PremiseChars => "premise_chars",
            HypothesisChars => "hypothesis_chars",
            PremisePos => "premise_pos",
            HypothesisPos => "hypothesis_pos",
        }
    }

    /// The rank of the batched field.
    pub fn rank(self) -> usize {
        match self {
            Self::Label => 1,
            Self::PremiseChars | Self::HypothesisChars => 3,
            _ => 2,
        }
    }

    /// The sentence a sequence field belongs to; `None` for [`Field::Label`].
    pub fn side(self) -> Option<SentenceSide> {
        use Field::*;
        match self {
            Label => None,
            Premise | Antonym1 | Exact1to2 | Synonym1 | PremiseChars | PremisePos => {
                Some(SentenceSide::Premise)
            }
            Hypothesis | Antonym2 | Exact2to1 | Synonym2 | HypothesisChars | HypothesisPos => {
                Some(SentenceSide::Hypothesis)
            }
        }
    }

    /// The same field of the other sentence.
    pub fn companion(self) -> Option<Self> {
        use Field::*;
        Some(match self {
            Label => return None,
            Premise => Hypothesis,
            Hypothesis => Premise,
            Antonym1 => Antonym2,
            Antonym2 => Antonym1,
            Exact1to2 => Exact2to1,
            Exact2to1 => Exact1to2,
            Synonym1 => Synonym2,
            Synonym2 => Synonym1,
            PremiseChars => HypothesisChars,
            HypothesisChars => PremiseChars,
            PremisePos => HypothesisPos,
            HypothesisPos => PremisePos,
        })
    }
}

/// One entry of a [`FieldLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name.
    pub name: &'static str,

    /// The batched rank.
    pub rank: usize,

    /// Is the sequence axis cropped?
    pub cropped: bool,
}

/// The rank and cropping of every output field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    fields: Vec<FieldSpec>,
}

impl FieldLayout {
    /// Build a layout from explicit entries.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The [`NliBatch`](crate::NliBatch) layout; every sequence field is cropped.
    pub fn nli() -> Self {
        use strum::IntoEnumIterator;
        Self::new(
            Field::iter()
                .map(|f| FieldSpec {
                    name: f.name(),
                    rank: f.rank(),
                    cropped: f.side().is_some(),
                })
                .collect(),
        )
    }

    /// The entries.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Optional truncation of the sequence axis (axis 1).
///
/// Validated against a [`FieldLayout`] at construction: every cropped field
/// must have rank 2 or 3, and the crop length may not be below the
/// character padding width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropPlan {
    max_len: Option<usize>,
}

impl CropPlan {
    /// Create a plan.
    ///
    /// ## Returns
    /// The plan; or [`NliStreamError::InvalidConfig`] for a `max_len` of `0`
    /// or below `char_pad`, or [`NliStreamError::UnsupportedRank`] for a
    /// cropped field of another rank.
    pub fn new(
        max_len: Option<usize>,
        char_pad: usize,
        layout: &FieldLayout,
    ) -> NSResult<Self> {
        if let Some(max_len) = max_len {
            check_crop_len(max_len, char_pad)?;
            for spec in layout.fields().iter().filter(|s| s.cropped) {
                check_crop_rank(spec.name, spec.rank)?;
            }
        }
        Ok(Self { max_len })
    }

    /// The crop length, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Crop one field.
    pub fn apply<A: Clone, D: Dimension>(
        &self,
        x: Array<A, D>,
        field: &'static str,
    ) -> NSResult<Array<A, D>> {
        match self.max_len {
            Some(max_len) => crop(x, max_len, field),
            None => Ok(x),
        }
    }
}

/// Reject a crop length of `0`, or one below the char padding width.
pub(crate) fn check_crop_len(
    max_len: usize,
    char_pad: usize,
) -> NSResult<()> {
    if max_len == 0 {
        return Err(NliStreamError::InvalidConfig(
            "max_len must be > 0".to_string(),
        ));
    }
    if max_len < char_pad {
        return Err(NliStreamError::InvalidConfig(format!(
            "max_len ({max_len}) must be >= char_pad ({char_pad})"
        )));
    }
    Ok(())
}

fn check_crop_rank(
    field: &'static str,
    rank: usize,
) -> NSResult<()> {
    match rank {
        2 | 3 => Ok(()),
        rank => Err(NliStreamError::UnsupportedRank { field, rank }),
    }
}

/// Truncate axis 1 to at most `max_len`.
///
/// ## Returns
/// The cropped array; or [`NliStreamError::UnsupportedRank`] unless the
/// rank is 2 or 3.
pub fn crop<A: Clone, D: Dimension>(
    x: Array<A, D>,
    max_len: usize,
    field: &'static str,
) -> NSResult<Array<A, D>> {
    check_crop_rank(field, x.ndim())?;
    if x.len_of(Axis(1)) <= max_len {
        return Ok(x);
    }
    Ok(x.slice_axis(Axis(1), Slice::from(..max_len)).to_owned())
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array3, Array4, array};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_field_table() {
        let fields: Vec<Field> = Field::iter().collect();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[2], Field::Label);

        for field in Field::iter() {
            match field.companion() {
                None => assert_eq!(field, Field::Label),
                Some(other) => {
                    assert_eq!(other.companion(), Some(field));
                    assert_eq!(other.rank(), field.rank());
                    assert_eq!(other.side().map(SentenceSide::other), field.side());
                }
            }
        }
        assert_eq!(Field::HypothesisChars.name(), "hypothesis_chars");
        assert_eq!(Field::PremiseChars.rank(), 3);
    }

    #[test]
    fn test_crop() {
        let x = array![[1, 2, 3, 4], [5, 6, 0, 0]];
        assert_eq!(crop(x.clone(), 2, "x").unwrap(), array![[1, 2], [5, 6]]);
        assert_eq!(crop(x.clone(), 10, "x").unwrap(), x);

        let chars = Array3::<i64>::ones((2, 5, 3));
        assert_eq!(crop(chars, 4, "c").unwrap().shape(), &[2, 4, 3]);
    }

    #[test]
    fn test_crop_unsupported_rank() {
        assert!(matches!(
            crop(Array1::<i64>::zeros(3), 2, "label"),
            Err(NliStreamError::UnsupportedRank { field: "label", rank: 1 })
        ));
        assert!(matches!(
            crop(Array4::<i64>::zeros((1, 2, 3, 4)), 2, "deep"),
            Err(NliStreamError::UnsupportedRank { rank: 4, .. })
        ));
    }

    #[test]
    fn test_crop_plan() {
        let layout = FieldLayout::nli();
        assert_eq!(layout.fields().iter().filter(|s| s.cropped).count(), 12);

        assert!(CropPlan::new(None, 16, &layout).unwrap().max_len().is_none());
        assert_eq!(CropPlan::new(Some(3), 3, &layout).unwrap().max_len(), Some(3));
        for (max_len, char_pad) in [(0, 0), (0, 1), (2, 3), (4, 16)] {
            assert!(matches!(
                CropPlan::new(Some(max_len), char_pad, &layout),
                Err(NliStreamError::InvalidConfig(_))
            ));
        }

        let bad = FieldLayout::new(vec![FieldSpec {
            name: "volume",
            rank: 4,
            cropped: true,
        }]);
        assert!(matches!(
            CropPlan::new(Some(3), 1, &bad),
            Err(NliStreamError::UnsupportedRank { field: "volume", rank: 4 })
        ));

        let plan = CropPlan::new(Some(1), 1, &layout).unwrap();
        assert_eq!(plan.apply(array![[1, 2]], "x").unwrap(), array![[1]]);
    }
}
