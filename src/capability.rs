use derive_more::derive::IsVariant;

use crate::{entrypoint::Entrypoint, vendor::VendorCategory};

/// Per-profile transcoding capability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Verdict {
	TranscodingSupported,
	NoTranscoding,
	DecodeOnly,
}

impl Verdict {
	/// A full decode→encode pipeline needs at least one decode-class and one
	/// encode-class entrypoint, hence the score threshold of 2. NVIDIA VAAPI
	/// never exposes functioning encode through this interface even when the
	/// driver nominally advertises an encode entrypoint, so NVIDIA-like
	/// vendors classify as decode-only regardless of the score.
	pub fn evaluate(vendor: VendorCategory, entrypoints: &[Entrypoint]) -> Self {
		if vendor.is_nvidia_like() {
			return Self::DecodeOnly;
		}
		let transcode_score = entrypoints
			.iter()
			.filter(|entrypoint| entrypoint.counts_toward_transcode())
			.count();
		match transcode_score {
			0..=1 => Self::NoTranscoding,
			_ => Self::TranscodingSupported,
		}
	}
}
