//! # Alignment Engine

use ndarray::{Array, Dimension};
use num_traits::Zero;

use crate::{
    alignment::{CropPlan, Field, FieldLayout, JointStream, PadSide, align_pair},
    batch::NliBatch,
    errors::NSResult,
};

/// Companion alignment and optional cropping of whole batches.
///
/// Every sequence field is padded against its other-sentence companion
/// (see [`Field::companion`]) to their common maximum length; then, if a
/// crop length is set, every sequence field is truncated to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentEngine {
    pad_side: PadSide,
    crop: CropPlan,
}

impl AlignmentEngine {
    /// Create an engine over the [`FieldLayout::nli`] layout.
    ///
    /// `char_pad` is the width of the char fields; see [`CropPlan::new`].
    pub fn new(
        pad_side: PadSide,
        max_len: Option<usize>,
        char_pad: usize,
    ) -> NSResult<Self> {
        Ok(Self {
            pad_side,
            crop: CropPlan::new(max_len, char_pad, &FieldLayout::nli())?,
        })
    }

    /// The padding side.
    pub fn pad_side(&self) -> PadSide {
        self.pad_side
    }

    /// The crop length, if any.
    pub fn max_len(&self) -> Option<usize> {
        self.crop.max_len()
    }

    fn pair<A: Clone + Zero, D: Dimension>(
        &self,
        x: Array<A, D>,
        y: Array<A, D>,
        field: Field,
    ) -> NSResult<(Array<A, D>, Array<A, D>)> {
        let companion = field.companion().unwrap_or(field);
        let (x, y) = align_pair(x, y, self.pad_side, field.name())?;
        Ok((
            self.crop.apply(x, field.name())?,
            self.crop.apply(y, companion.name())?,
        ))
    }

    /// Align, then crop, every sequence field of a batch.
    pub fn apply(
        &self,
        batch: NliBatch,
    ) -> NSResult<NliBatch> {
        let NliBatch {
            premise,
            hypothesis,
            label,
            antonym1,
            antonym2,
            exact1to2,
            exact2to1,
            synonym1,
            synonym2,
            premise_chars,
            hypothesis_chars,
            premise_pos,
            hypothesis_pos,
        } = batch;

        let (premise, hypothesis) = self.pair(premise, hypothesis, Field::Premise)?;
        let (antonym1, antonym2) = self.pair(antonym1, antonym2, Field::Antonym1)?;
        let (exact1to2, exact2to1) = self.pair(exact1to2, exact2to1, Field::Exact1to2)?;
        let (synonym1, synonym2) = self.pair(synonym1, synonym2, Field::Synonym1)?;
        let (premise_chars, hypothesis_chars) =
            self.pair(premise_chars, hypothesis_chars, Field::PremiseChars)?;
        let (premise_pos, hypothesis_pos) =
            self.pair(premise_pos, hypothesis_pos, Field::PremisePos)?;

        Ok(NliBatch {
            premise,
            hypothesis,
            label,
            antonym1,
            antonym2,
            exact1to2,
            exact2to1,
            synonym1,
            synonym2,
            premise_chars,
            hypothesis_chars,
            premise_pos,
            hypothesis_pos,
        })
    }
}

/// A [`JointStream`] passed through an [`AlignmentEngine`].
pub struct AlignedStream {
    joint: JointStream,
    engine: AlignmentEngine,
    done: bool,
}

impl AlignedStream {
    /// Wrap a joint stream.
    pub fn new(
        joint: JointStream,
        engine: AlignmentEngine,
    ) -> Self {
        Self {
            joint,
            engine,
            done: false,
        }
    }
}

impl Iterator for AlignedStream {
    type Item = NSResult<NliBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.joint.next()?.and_then(|batch| self.engine.apply(batch));
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{
        batch::tests::sample_batch,
        errors::NliStreamError,
        streams::FieldStreamBuilder,
        test_fixtures,
    };

    fn assert_companions_aligned(batch: &NliBatch) {
        let l = batch.premise_len();
        assert_eq!(batch.hypothesis_len(), l);
        for len in [
            batch.antonym1.ncols(),
            batch.antonym2.ncols(),
            batch.exact1to2.ncols(),
            batch.exact2to1.ncols(),
            batch.synonym1.ncols(),
            batch.synonym2.ncols(),
            batch.premise_chars.shape()[1],
            batch.hypothesis_chars.shape()[1],
            batch.premise_pos.ncols(),
            batch.hypothesis_pos.ncols(),
        ] {
            assert_eq!(len, l);
        }
    }

    #[test]
    fn test_apply_pads_companions() {
        let engine = AlignmentEngine::new(PadSide::Right, None, 2).unwrap();
        let batch = engine.apply(sample_batch()).unwrap();
        assert_companions_aligned(&batch);
        assert_eq!(batch.premise_len(), 3);
        assert_eq!(batch.hypothesis, array![[8, 1, 0], [9, 0, 0]]);
        assert_eq!(batch.label, array![0, 2]);
        assert_eq!(batch.hypothesis_chars.shape(), &[2, 3, 2]);
    }

    #[test]
    fn test_apply_left_pad_and_crop() {
        let engine = AlignmentEngine::new(PadSide::Left, Some(2), 2).unwrap();
        assert_eq!(engine.max_len(), Some(2));
        assert_eq!(engine.pad_side(), PadSide::Left);

        let batch = engine.apply(sample_batch()).unwrap();
        assert_companions_aligned(&batch);
        assert_eq!(batch.premise, array![[4, 5], [7, 0]]);
        assert_eq!(batch.hypothesis, array![[0, 8], [0, 9]]);
        assert_eq!(batch.premise_chars.shape(), &[2, 2, 2]);
    }

    #[test]
    fn test_invalid_max_len() {
        assert!(matches!(
            AlignmentEngine::new(PadSide::Right, Some(0), 2),
            Err(NliStreamError::InvalidConfig(_))
        ));
        assert!(matches!(
            AlignmentEngine::new(PadSide::Right, Some(4), 16),
            Err(NliStreamError::InvalidConfig(_))
        ));
        assert!(AlignmentEngine::new(PadSide::Right, Some(16), 16).is_ok());
        assert!(AlignmentEngine::new(PadSide::Right, None, 16).is_ok());
    }

    #[test]
    fn test_aligned_stream() {
        let builder = FieldStreamBuilder::new(test_fixtures::corpus(), 2, 3, 3, 5).unwrap();
        let joint =
            JointStream::open(&builder, &test_fixtures::tables(), &test_fixtures::store());
        let char_pad = test_fixtures::CHAR_PAD;
        let engine = AlignmentEngine::new(PadSide::Right, Some(char_pad), char_pad).unwrap();

        let mut examples = 0;
        for batch in AlignedStream::new(joint, engine) {
            let batch = batch.unwrap();
            assert_companions_aligned(&batch);
            assert!(batch.premise_len() <= char_pad);
            for (row, &label) in batch.label.iter().enumerate() {
                assert_eq!(batch.premise_pos[[row, 0]], test_fixtures::UH_INDEX);
                assert_eq!(batch.exact2to1[[row, 0]], 1.0);
                assert_eq!(
                    batch.premise[[row, 0]],
                    test_fixtures::label_word_id(label)
                );
            }
            examples += batch.len();
        }
        assert_eq!(examples, 8);
    }

    #[test]
    fn test_fixture_pos_tags() {
        let builder = FieldStreamBuilder::new(test_fixtures::corpus(), 1, 1, 0, 0).unwrap();
        let joint =
            JointStream::open(&builder, &test_fixtures::tables(), &test_fixtures::store());
        let engine = AlignmentEngine::new(PadSide::Right, None, test_fixtures::CHAR_PAD).unwrap();
        let first = AlignedStream::new(joint, engine).next().unwrap().unwrap();
        assert_eq!(
            first.premise_pos,
            array![[test_fixtures::UH_INDEX, test_fixtures::NN_INDEX, test_fixtures::NN_INDEX]]
        );
        // "maybe cat sat" / "maybe dog"
        assert_eq!(first.premise, array![[2, 5, 7]]);
        assert_eq!(first.hypothesis, array![[2, 6, 0]]);
    }
}
