use std::{env, path::Path, rc::Rc};

use cros_libva::Display;

use super::{Driver, DriverError, DriverInfo};

/// [`Driver`] backed by cros-libva over a DRM render node. Dropping it drops
/// the display, which terminates the VA-API session.
pub struct LibvaDriver {
	display: Rc<Display>,
	info: DriverInfo,
}

impl LibvaDriver {
	/// `device` is the path to a DRM device that supports VAAPI,
	/// e.g. `/dev/dri/renderD128`
	pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, DriverError> {
		let device = device.as_ref();
		std::fs::metadata(device).map_err(|error| DriverError::DeviceOpen {
			path: device.to_path_buf(),
			error: error.to_string(),
		})?;
		env::set_var("LIBVA_MESSAGING_LEVEL", "0");
		let display = Display::open_drm_display(device)
			.map_err(|error| DriverError::DisplayAcquisition(error.to_string()))?;
		let vendor = display.query_vendor_string().ok();
		// cros-libva initializes the display internally and does not surface
		// the version pair reported by vaInitialize
		let info = DriverInfo::new(None, vendor);
		Ok(Self { display, info })
	}
}

impl Driver for LibvaDriver {
	fn info(&self) -> &DriverInfo {
		&self.info
	}

	fn profiles(&self) -> Result<Vec<i32>, DriverError> {
		let profiles = self
			.display
			.query_config_profiles()
			.map_err(|error| DriverError::Enumeration {
				subject: "profiles".to_owned(),
				error: error.to_string(),
			})?;
		Ok(profiles.into_iter().map(|profile| profile as i32).collect())
	}

	fn entrypoints(&self, profile_id: i32) -> Result<Vec<i32>, DriverError> {
		let entrypoints = self
			.display
			.query_config_entrypoints(profile_id as _)
			.map_err(|error| DriverError::Enumeration {
				subject: format!("entrypoints for profile {profile_id}"),
				error: error.to_string(),
			})?;
		Ok(entrypoints.into_iter().map(|entrypoint| entrypoint as i32).collect())
	}
}
