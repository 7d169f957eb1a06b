use derive_more::derive::IsVariant;

/// Vendor family of the VA-API driver, derived from the vendor string by
/// case-sensitive substring containment. The category only adjusts advisory
/// messaging and the NVIDIA decode-only override, never the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, IsVariant)]
pub enum VendorCategory {
	Generic,
	NvidiaLike,
	IntelLike,
}

impl VendorCategory {
	/// NVIDIA patterns are checked first: a vendor string matching both
	/// families classifies as NVIDIA-like.
	pub fn from_vendor_string(vendor: Option<&str>) -> Self {
		match vendor {
			Some(vendor) if vendor.contains("NVIDIA") || vendor.contains("NVDEC") => Self::NvidiaLike,
			Some(vendor) if vendor.contains("Intel") || vendor.contains("iHD") => Self::IntelLike,
			_ => Self::Generic,
		}
	}

	/// One-time acceleration guidance for non-generic vendors. Presentation
	/// only, does not feed back into verdict computation.
	pub fn log_advisory(&self) {
		match self {
			Self::NvidiaLike => {
				log::warn!("detected NVIDIA GPU: VAAPI only supports decoding on NVIDIA");
				log::warn!(
					"use FFmpeg with NVENC for encoding: ffmpeg -hwaccel cuda -i input.mp4 -c:v h264_nvenc -preset fast output.mp4"
				);
			},
			Self::IntelLike => {
				log::info!("detected Intel GPU (Quick Sync Video supported)");
				log::info!(
					"use FFmpeg with QSV for best performance: ffmpeg -hwaccel qsv -i input.mp4 -c:v h264_qsv -preset fast output.mp4"
				);
			},
			Self::Generic => (),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nvidia_patterns_win_over_intel_patterns() {
		let category = VendorCategory::from_vendor_string(Some("NVIDIA Corporation - NVDEC backend (Intel bridge)"));
		assert_eq!(category, VendorCategory::NvidiaLike);
	}

	#[test]
	fn intel_patterns() {
		assert!(VendorCategory::from_vendor_string(Some("Intel Open Source Technology Center")).is_intel_like());
		assert!(VendorCategory::from_vendor_string(Some("Mesa Gallium driver iHD")).is_intel_like());
	}

	#[test]
	fn matching_is_case_sensitive() {
		assert!(VendorCategory::from_vendor_string(Some("nvidia corporation")).is_generic());
		assert!(VendorCategory::from_vendor_string(Some("INTEL")).is_generic());
	}

	#[test]
	fn absent_vendor_string_is_generic() {
		assert!(VendorCategory::from_vendor_string(None).is_generic());
	}
}
