use getset::CopyGetters;
use strum::IntoEnumIterator;

use crate::{codec::Codec, entrypoint::EntrypointKind, scan::DeviceCapabilities};

#[derive(Debug, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct CodecSupport {
	codec: Codec,
	decode: bool,
	encode: bool,
	transcode: bool,
}

/// Rolls the scan up per codec family: whether any profile of the family
/// exposes a decode entrypoint, whether any exposes an encode entrypoint,
/// and whether the two combine into a usable transcode path. The transcode
/// flag honors the NVIDIA decode-only override so the summary never
/// contradicts the per-profile verdicts.
pub fn summarize(capabilities: &DeviceCapabilities) -> Vec<CodecSupport> {
	Codec::iter()
		.map(|codec| {
			let mut decode = false;
			let mut encode = false;
			for profile_capabilities in capabilities.profiles() {
				if !codec.includes(profile_capabilities.profile()) {
					continue;
				}
				for entrypoint in profile_capabilities.entrypoints() {
					match entrypoint.kind() {
						EntrypointKind::Decode => decode = true,
						EntrypointKind::EncodeSlice | EntrypointKind::EncodeSliceLowPower => encode = true,
						_ => (),
					}
				}
			}
			let transcode = decode && encode && !capabilities.vendor_category().is_nvidia_like();
			CodecSupport {
				codec,
				decode,
				encode,
				transcode,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{driver::testing::StubDriver, scan::scan};

	fn support_for(summary: &[CodecSupport], codec: Codec) -> CodecSupport {
		*summary
			.iter()
			.find(|codec_support| codec_support.codec() == codec)
			.unwrap()
	}

	#[test]
	fn decode_and_encode_roll_up_across_profiles_of_a_family() {
		// decode on H.264 Main, encode on H.264 High
		let driver = StubDriver::new("Intel iHD")
			.with_profile(6, &[1])
			.with_profile(7, &[6]);
		let summary = summarize(&scan(&driver));

		let h264 = support_for(&summary, Codec::H264);
		assert!(h264.decode() && h264.encode() && h264.transcode());
	}

	#[test]
	fn decode_only_family() {
		let driver = StubDriver::new("Intel iHD").with_profile(17, &[1]);
		let summary = summarize(&scan(&driver));

		let h265 = support_for(&summary, Codec::H265);
		assert!(h265.decode());
		assert!(!h265.encode());
		assert!(!h265.transcode());
	}

	#[test]
	fn unrelated_families_stay_unsupported() {
		let driver = StubDriver::new("Intel iHD").with_profile(7, &[1, 6]);
		let summary = summarize(&scan(&driver));

		let vp9 = support_for(&summary, Codec::VP9);
		assert!(!vp9.decode() && !vp9.encode() && !vp9.transcode());
	}

	#[test]
	fn nvidia_override_clears_the_transcode_flag() {
		let driver = StubDriver::new("NVIDIA Corporation").with_profile(7, &[1, 6]);
		let summary = summarize(&scan(&driver));

		let h264 = support_for(&summary, Codec::H264);
		assert!(h264.decode() && h264.encode());
		assert!(!h264.transcode());
	}
}
