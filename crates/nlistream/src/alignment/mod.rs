//! # Alignment & Cropping
//!
//! Joins the 13 field streams of one source into [`NliBatch`] values, then
//! forces every premise field and its hypothesis companion to one
//! sequence length, and optionally crops that length.
//!
//! * [`JointStream`] zips the field streams, checking example ordinals.
//! * [`align_pair`] pads companions; [`crop`] truncates the sequence axis.
//! * [`AlignmentEngine`] applies both to whole batches; the set of cropped
//!   fields and their ranks comes from a [`FieldLayout`], checked up front
//!   by [`CropPlan::new`].
//!
//! [`NliBatch`]: crate::NliBatch
pub mod align;
pub mod engine;
pub mod field_layout;
pub mod joint_stream;

#[doc(inline)]
pub use align::{PadSide, align_pair, pad_axis};
#[doc(inline)]
pub use engine::{AlignedStream, AlignmentEngine};
#[doc(inline)]
pub use field_layout::{CropPlan, Field, FieldLayout, FieldSpec, crop};
#[doc(inline)]
pub use joint_stream::JointStream;
