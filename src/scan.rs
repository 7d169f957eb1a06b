use getset::{CopyGetters, Getters};

use crate::{
	capability::Verdict,
	driver::{Driver, DriverInfo, MAX_ENTRYPOINTS, MAX_PROFILES},
	entrypoint::Entrypoint,
	profile::Profile,
	vendor::VendorCategory,
};

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct ProfileCapabilities {
	#[getset(get_copy = "pub")]
	profile: Profile,
	#[getset(get = "pub")]
	entrypoints: Vec<Entrypoint>,
	#[getset(get_copy = "pub")]
	verdict: Verdict,
}

/// Everything one run learns about a device, in driver enumeration order
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct DeviceCapabilities {
	#[getset(get = "pub")]
	info: DriverInfo,
	#[getset(get_copy = "pub")]
	vendor_category: VendorCategory,
	#[getset(get = "pub")]
	profiles: Vec<ProfileCapabilities>,
}

/// Enumerates every profile and entrypoint the driver reports and classifies
/// each profile's transcoding capability.
///
/// Enumeration failures are logged and treated as empty results so a single
/// failing query never aborts the scan. The `VAProfileNone` sentinel is
/// filtered out before classification.
pub fn scan(driver: &impl Driver) -> DeviceCapabilities {
	let info = driver.info().clone();
	let vendor_category = VendorCategory::from_vendor_string(info.vendor());

	let profile_ids = driver.profiles().unwrap_or_else(|error| {
		log::warn!("{error}");
		Vec::new()
	});

	let profiles = profile_ids
		.into_iter()
		.take(MAX_PROFILES)
		.map(Profile::from_id)
		.filter(|profile| !profile.is_post_processing())
		.map(|profile| {
			let entrypoint_ids = driver.entrypoints(profile.id()).unwrap_or_else(|error| {
				log::warn!("{error}");
				Vec::new()
			});
			let entrypoints = entrypoint_ids
				.into_iter()
				.take(MAX_ENTRYPOINTS)
				.map(Entrypoint::from_id)
				.collect::<Vec<_>>();
			let verdict = Verdict::evaluate(vendor_category, &entrypoints);
			ProfileCapabilities {
				profile,
				entrypoints,
				verdict,
			}
		})
		.collect::<Vec<_>>();

	if profiles.is_empty() {
		log::warn!("no usable profiles reported by the driver");
	}

	DeviceCapabilities {
		info,
		vendor_category,
		profiles,
	}
}
