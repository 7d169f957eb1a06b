pub use crate::{
	capability::Verdict,
	codec::Codec,
	driver::{ApiVersion, Driver, DriverError, DriverInfo},
	entrypoint::{Entrypoint, EntrypointKind},
	log_level::LogLevel,
	profile::{Profile, ProfileKind},
	report::{render_json, render_text, JsonReport},
	scan::{scan, DeviceCapabilities},
	summary::{summarize, CodecSupport},
	vendor::VendorCategory,
};
