//! # Joint Stream

use std::sync::Arc;

use ndarray::{Array1, Array2, Array3};

use crate::{
    alignment::Field,
    batch::NliBatch,
    errors::{NSResult, NliStreamError},
    lexical::{LexicalFeatureStore, LexicalKind},
    streams::{BoxedFieldStream, FieldStreamBuilder, field_transforms},
    types::{FeatureType, IndexType, SentenceSide},
    vocab::IndexTables,
};

/// The 13 field streams of one source, zipped batch-for-batch.
///
/// Every pull takes one batch from each field stream and checks that all
/// of them cover the same examples. Any divergence, including one stream
/// ending before the others, is [`NliStreamError::StreamMisaligned`].
/// The first error ends the stream.
pub struct JointStream {
    premise: BoxedFieldStream<Array2<IndexType>>,
    hypothesis: BoxedFieldStream<Array2<IndexType>>,
    label: BoxedFieldStream<Array1<IndexType>>,
    antonym1: BoxedFieldStream<Array2<FeatureType>>,
    antonym2: BoxedFieldStream<Array2<FeatureType>>,
    exact1to2: BoxedFieldStream<Array2<FeatureType>>,
    exact2to1: BoxedFieldStream<Array2<FeatureType>>,
    synonym1: BoxedFieldStream<Array2<FeatureType>>,
    synonym2: BoxedFieldStream<Array2<FeatureType>>,
    premise_chars: BoxedFieldStream<Array3<IndexType>>,
    hypothesis_chars: BoxedFieldStream<Array3<IndexType>>,
    premise_pos: BoxedFieldStream<Array2<IndexType>>,
    hypothesis_pos: BoxedFieldStream<Array2<IndexType>>,
    done: bool,
}

impl JointStream {
    /// Build every field stream of one source.
    pub fn open(
        builder: &FieldStreamBuilder,
        tables: &Arc<IndexTables>,
        store: &Arc<LexicalFeatureStore>,
    ) -> Self {
        use LexicalKind::*;
        use SentenceSide::*;
        use field_transforms::*;

        let lexical = |kind, side| builder.build(lexical_feature(store.clone(), kind, side));

        Self {
            premise: builder.build(word_ids(tables.clone(), Premise)),
            hypothesis: builder.build(word_ids(tables.clone(), Hypothesis)),
            label: builder.build(label_id(tables.clone())),
            antonym1: lexical(Antonym, Premise),
            antonym2: lexical(Antonym, Hypothesis),
            exact1to2: lexical(ExactMatch, Premise),
            exact2to1: lexical(ExactMatch, Hypothesis),
            synonym1: lexical(Synonym, Premise),
            synonym2: lexical(Synonym, Hypothesis),
            premise_chars: builder.build(char_ids(tables.clone(), Premise)),
            hypothesis_chars: builder.build(char_ids(tables.clone(), Hypothesis)),
            premise_pos: builder.build(pos_ids(tables.clone(), Premise)),
            hypothesis_pos: builder.build(pos_ids(tables.clone(), Hypothesis)),
            done: false,
        }
    }

    fn next_joint(&mut self) -> NSResult<Option<NliBatch>> {
        let (ordinals, premise) = match self.premise.next() {
            None => {
                self.check_all_ended()?;
                return Ok(None);
            }
            Some(batch) => {
                let batch = batch?;
                (batch.ordinals, batch.values)
            }
        };

        Ok(Some(NliBatch {
            premise,
            hypothesis: pull(&mut self.hypothesis, Field::Hypothesis, &ordinals)?,
            label: pull(&mut self.label, Field::Label, &ordinals)?,
            antonym1: pull(&mut self.antonym1, Field::Antonym1, &ordinals)?,
            antonym2: pull(&mut self.antonym2, Field::Antonym2, &ordinals)?,
            exact1to2: pull(&mut self.exact1to2, Field::Exact1to2, &ordinals)?,
            exact2to1: pull(&mut self.exact2to1, Field::Exact2to1, &ordinals)?,
            synonym1: pull(&mut self.synonym1, Field::Synonym1, &ordinals)?,
            synonym2: pull(&mut self.synonym2, Field::Synonym2, &ordinals)?,
            premise_chars: pull(&mut self.premise_chars, Field::PremiseChars, &ordinals)?,
            hypothesis_chars: pull(&mut self.hypothesis_chars, Field::HypothesisChars, &ordinals)?,
            premise_pos: pull(&mut self.premise_pos, Field::PremisePos, &ordinals)?,
            hypothesis_pos: pull(&mut self.hypothesis_pos, Field::HypothesisPos, &ordinals)?,
        }))
    }

    fn check_all_ended(&mut self) -> NSResult<()> {
        ended(&mut self.hypothesis, Field::Hypothesis)?;
        ended(&mut self.label, Field::Label)?;
        ended(&mut self.antonym1, Field::Antonym1)?;
        ended(&mut self.antonym2, Field::Antonym2)?;
        ended(&mut self.exact1to2, Field::Exact1to2)?;
        ended(&mut self.exact2to1, Field::Exact2to1)?;
        ended(&mut self.synonym1, Field::Synonym1)?;
        ended(&mut self.synonym2, Field::Synonym2)?;
        ended(&mut self.premise_chars, Field::PremiseChars)?;
        ended(&mut self.hypothesis_chars, Field::HypothesisChars)?;
        ended(&mut self.premise_pos, Field::PremisePos)?;
        ended(&mut self.hypothesis_pos, Field::HypothesisPos)
    }
}

fn pull<B>(
    stream: &mut BoxedFieldStream<B>,
    field: Field,
    ordinals: &[usize],
) -> NSResult<B> {
    match stream.next() {
        None => Err(NliStreamError::StreamMisaligned {
            field: field.name(),
            reason: "ended before the premise stream".to_string(),
        }),
        Some(batch) => {
            let batch = batch?;
            if batch.ordinals != ordinals {
                return Err(NliStreamError::StreamMisaligned {
                    field: field.name(),
                    reason: format!(
                        "batch covers examples {:?}, expected {:?}",
                        batch.ordinals, ordinals
                    ),
                });
            }
            Ok(batch.values)
        }
    }
}

fn ended<B>(
    stream: &mut BoxedFieldStream<B>,
    field: Field,
) -> NSResult<()> {
    match stream.next() {
        None => Ok(()),
        Some(Err(e)) => Err(e),
        Some(Ok(_)) => Err(NliStreamError::StreamMisaligned {
            field: field.name(),
            reason: "has batches past the end of the premise stream".to_string(),
        }),
    }
}

impl Iterator for JointStream {
    type Item = NSResult<NliBatch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_joint();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result.transpose()
    }
}
