use std::borrow::Borrow;

use strum::EnumIter;

use crate::profile::{Profile, ProfileKind};

/// Codec families the transcode summary reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::derive::Display, EnumIter)]
pub enum Codec {
	AV1,
	H264,
	H265,
	VP8,
	VP9,
}

impl Codec {
	/// Whether `profile` belongs to this codec family
	pub fn includes(&self, profile: impl Borrow<Profile>) -> bool {
		use ProfileKind::*;
		matches!(
			(*self, profile.borrow().kind()),
			(Self::AV1, Av1Profile0 | Av1Profile1)
				| (
					Self::H264,
					H264Extended
						| H264Main | H264High
						| H264ConstrainedBaseline
						| H264MultiviewHigh
						| H264StereoHigh
				)
				| (Self::H265, HevcMain | HevcMain10 | HevcMain12)
				| (Self::VP8, Vp8)
				| (Self::VP9, Vp9Profile0 | Vp9Profile1 | Vp9Profile2 | Vp9Profile3)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_family_membership() {
		assert!(Codec::H264.includes(Profile::from_id(7)));
		assert!(Codec::H265.includes(Profile::from_id(18)));
		assert!(Codec::VP9.includes(Profile::from_id(21)));
		assert!(!Codec::H264.includes(Profile::from_id(17)));
		assert!(!Codec::AV1.includes(Profile::from_id(42)));
	}
}
