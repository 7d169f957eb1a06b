use getset::CopyGetters;

/// Classification of a raw VA-API entrypoint identifier. Only decode and the
/// two encode-slice variants count toward the transcode score; video
/// processing and anything unrecognized do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrypointKind {
	Decode,
	EncodeSlice,
	EncodeSliceLowPower,
	VideoProcessing,
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Entrypoint {
	id: i32,
	kind: EntrypointKind,
}

impl Entrypoint {
	pub fn from_id(id: i32) -> Self {
		use EntrypointKind::*;
		let kind = match id {
			1 => Decode,
			6 => EncodeSlice,
			8 => EncodeSliceLowPower,
			10 => VideoProcessing,
			_ => Unknown,
		};
		Self { id, kind }
	}

	pub fn name(&self) -> &'static str {
		use EntrypointKind::*;
		match self.kind {
			Decode => "Decoding (VLD)",
			EncodeSlice => "Encoding (Slice)",
			EncodeSliceLowPower => "Encoding (Slice, Low Power)",
			VideoProcessing => "Video Processing",
			Unknown => "Unknown Entrypoint",
		}
	}

	pub fn counts_toward_transcode(&self) -> bool {
		use EntrypointKind::*;
		matches!(self.kind, Decode | EncodeSlice | EncodeSliceLowPower)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_and_encode_count_toward_transcode() {
		assert!(Entrypoint::from_id(1).counts_toward_transcode());
		assert!(Entrypoint::from_id(6).counts_toward_transcode());
		assert!(Entrypoint::from_id(8).counts_toward_transcode());
	}

	#[test]
	fn video_processing_and_unknown_do_not_count() {
		assert!(!Entrypoint::from_id(10).counts_toward_transcode());
		// 7 is EncPicture, outside the closed set
		assert!(!Entrypoint::from_id(7).counts_toward_transcode());
		assert_eq!(Entrypoint::from_id(7).name(), "Unknown Entrypoint");
	}

	#[test]
	fn display_names() {
		assert_eq!(Entrypoint::from_id(1).name(), "Decoding (VLD)");
		assert_eq!(Entrypoint::from_id(6).name(), "Encoding (Slice)");
		assert_eq!(Entrypoint::from_id(8).name(), "Encoding (Slice, Low Power)");
		assert_eq!(Entrypoint::from_id(10).name(), "Video Processing");
	}
}
