use std::path::PathBuf;

use getset::CopyGetters;
use thiserror::Error;

#[cfg(feature = "libva")]
pub mod libva;

/// Enumeration bound of the VA-API profile query
pub const MAX_PROFILES: usize = 32;

/// Enumeration bound of the VA-API per-profile entrypoint query
pub const MAX_ENTRYPOINTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, CopyGetters)]
#[display("{major}.{minor}")]
#[getset(get_copy = "pub")]
pub struct ApiVersion {
	major: u32,
	minor: u32,
}

impl ApiVersion {
	pub fn new(major: u32, minor: u32) -> Self {
		Self { major, minor }
	}
}

/// Version and vendor information reported by the driver when the session
/// was opened. The version is optional: not every backend surfaces the pair
/// reported by display initialization.
#[derive(Debug, Clone, CopyGetters)]
pub struct DriverInfo {
	#[getset(get_copy = "pub")]
	api_version: Option<ApiVersion>,
	vendor: Option<String>,
}

impl DriverInfo {
	pub fn new(api_version: Option<ApiVersion>, vendor: Option<String>) -> Self {
		Self { api_version, vendor }
	}

	pub fn vendor(&self) -> Option<&str> {
		self.vendor.as_deref()
	}
}

#[derive(Debug, Error)]
pub enum DriverError {
	#[error("failed to open VAAPI device {path}: {error}")]
	DeviceOpen { path: PathBuf, error: String },
	#[error("failed to get VAAPI display: {0}")]
	DisplayAcquisition(String),
	#[error("failed to initialize VAAPI: {0}")]
	VersionInit(String),
	#[error("failed to query VAAPI {subject}: {error}")]
	Enumeration { subject: String, error: String },
}

/// Enumeration surface supplied by the host's hardware acceleration stack.
///
/// The session behind an implementation is released when the value is
/// dropped, on every exit path.
pub trait Driver {
	fn info(&self) -> &DriverInfo;

	/// Supported profile identifiers, in driver enumeration order
	fn profiles(&self) -> Result<Vec<i32>, DriverError>;

	/// Entrypoint identifiers supported by `profile_id`, in driver
	/// enumeration order
	fn entrypoints(&self, profile_id: i32) -> Result<Vec<i32>, DriverError>;
}
