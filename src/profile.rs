use getset::CopyGetters;

/// `VAProfileNone`: the driver reports post-processing support without any
/// codec attached. Filtered out before capability classification.
pub const PROFILE_NONE_ID: i32 = -1;

/// Closed set of codec profiles known to this tool, mirroring the VA-API
/// profile identifiers. Identifiers outside the set classify as [`Unknown`]
/// instead of failing.
///
/// [`Unknown`]: ProfileKind::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
	Mpeg2Simple,
	Mpeg2Main,
	Mpeg4Simple,
	Mpeg4AdvancedSimple,
	Mpeg4Main,
	H264Extended,
	H264Main,
	H264High,
	Vc1Simple,
	Vc1Main,
	Vc1Advanced,
	H263Baseline,
	JpegBaseline,
	H264ConstrainedBaseline,
	Vp8,
	H264MultiviewHigh,
	H264StereoHigh,
	HevcMain,
	HevcMain10,
	Vp9Profile0,
	Vp9Profile1,
	Vp9Profile2,
	Vp9Profile3,
	HevcMain12,
	Av1Profile0,
	Av1Profile1,
	PostProcessing,
	Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Profile {
	id: i32,
	kind: ProfileKind,
}

impl Profile {
	/// Total over all identifiers. Identifier 5 is the historical H.264
	/// Extended slot whose symbol was dropped from later libva headers.
	pub fn from_id(id: i32) -> Self {
		use ProfileKind::*;
		let kind = match id {
			PROFILE_NONE_ID => PostProcessing,
			0 => Mpeg2Simple,
			1 => Mpeg2Main,
			2 => Mpeg4Simple,
			3 => Mpeg4AdvancedSimple,
			4 => Mpeg4Main,
			5 => H264Extended,
			6 => H264Main,
			7 => H264High,
			8 => Vc1Simple,
			9 => Vc1Main,
			10 => Vc1Advanced,
			11 => H263Baseline,
			12 => JpegBaseline,
			13 => H264ConstrainedBaseline,
			14 => Vp8,
			15 => H264MultiviewHigh,
			16 => H264StereoHigh,
			17 => HevcMain,
			18 => HevcMain10,
			19 => Vp9Profile0,
			20 => Vp9Profile1,
			21 => Vp9Profile2,
			22 => Vp9Profile3,
			23 => HevcMain12,
			32 => Av1Profile0,
			33 => Av1Profile1,
			_ => Unknown,
		};
		Self { id, kind }
	}

	pub fn is_post_processing(&self) -> bool {
		self.kind == ProfileKind::PostProcessing
	}

	pub fn name(&self) -> &'static str {
		use ProfileKind::*;
		match self.kind {
			Mpeg2Simple => "MPEG-2 Simple",
			Mpeg2Main => "MPEG-2 Main",
			Mpeg4Simple => "MPEG-4 Simple",
			Mpeg4AdvancedSimple => "MPEG-4 Advanced Simple",
			Mpeg4Main => "MPEG-4 Main",
			H264Extended => "H.264 Extended (Possibly Deprecated)",
			H264Main => "H.264 Main",
			H264High => "H.264 High",
			Vc1Simple => "VC-1 Simple",
			Vc1Main => "VC-1 Main",
			Vc1Advanced => "VC-1 Advanced",
			H263Baseline => "H.263 Baseline",
			JpegBaseline => "JPEG Baseline",
			H264ConstrainedBaseline => "H.264 Constrained Baseline",
			Vp8 => "VP8",
			H264MultiviewHigh => "H.264 Multiview High",
			H264StereoHigh => "H.264 Stereo High",
			HevcMain => "HEVC Main",
			HevcMain10 => "HEVC Main 10-bit",
			Vp9Profile0 => "VP9 Profile 0",
			Vp9Profile1 => "VP9 Profile 1",
			Vp9Profile2 => "VP9 Profile 2",
			Vp9Profile3 => "VP9 Profile 3",
			HevcMain12 => "HEVC Main 12-bit",
			Av1Profile0 => "AV1 Profile 0",
			Av1Profile1 => "AV1 Profile 1",
			PostProcessing => "Video Processing (Post-Processing)",
			Unknown => "Unknown Profile",
		}
	}
}
