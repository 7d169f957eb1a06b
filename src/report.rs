use std::io::{self, Write};

use serde::Serialize;

use crate::{
	capability::Verdict,
	scan::{DeviceCapabilities, ProfileCapabilities},
	summary::{summarize, CodecSupport},
};

const UNKNOWN: &str = "Unknown";

fn mark(value: bool) -> &'static str {
	if value {
		"✅"
	} else {
		"❌"
	}
}

fn verdict_line(verdict: Verdict) -> &'static str {
	match verdict {
		Verdict::TranscodingSupported => "✅ TRANSCODING SUPPORTED",
		Verdict::NoTranscoding => "❌ NO TRANSCODING",
		Verdict::DecodeOnly => "⚠️  NVIDIA VAAPI supports only decoding.",
	}
}

/// Text target. Written once per run, in driver enumeration order, to any
/// writer so tests can capture it.
pub fn render_text(capabilities: &DeviceCapabilities, out: &mut impl Write) -> io::Result<()> {
	let api_version = capabilities
		.info()
		.api_version()
		.map(|api_version| api_version.to_string())
		.unwrap_or_else(|| UNKNOWN.to_owned());
	writeln!(out, "VA-API Version: {api_version}")?;
	writeln!(out, "Driver Version: {}", capabilities.info().vendor().unwrap_or(UNKNOWN))?;
	writeln!(out)?;
	writeln!(out, "VAAPI Supported Profiles and Entrypoints:")?;

	for profile_capabilities in capabilities.profiles() {
		let profile = profile_capabilities.profile();
		writeln!(out, "  - {} (Profile ID: {})", profile.name(), profile.id())?;
		for entrypoint in profile_capabilities.entrypoints() {
			writeln!(out, "      -> {}", entrypoint.name())?;
		}
		writeln!(out, "      {}", verdict_line(profile_capabilities.verdict()))?;
	}

	render_summary(&summarize(capabilities), out)
}

fn render_summary(summary: &[CodecSupport], out: &mut impl Write) -> io::Result<()> {
	writeln!(out)?;
	writeln!(out, "Transcode summary:")?;
	for codec_support in summary {
		writeln!(
			out,
			"  {}: decode {}  encode {}  transcode {}",
			codec_support.codec(),
			mark(codec_support.decode()),
			mark(codec_support.encode()),
			mark(codec_support.transcode()),
		)?;
	}
	Ok(())
}

/// JSON target. Field order is the document's key order. Verdicts are a
/// text-only presentation detail and never appear here.
#[derive(Debug, Serialize)]
pub struct JsonReport {
	#[serde(rename = "VAAPI Version")]
	vaapi_version: String,
	#[serde(rename = "Driver Version")]
	driver_version: String,
	#[serde(rename = "Profiles")]
	profiles: Vec<JsonProfile>,
}

#[derive(Debug, Serialize)]
pub struct JsonProfile {
	profile: String,
	id: i32,
	entrypoints: Vec<String>,
}

impl From<&DeviceCapabilities> for JsonReport {
	fn from(capabilities: &DeviceCapabilities) -> Self {
		Self {
			vaapi_version: capabilities
				.info()
				.api_version()
				.map(|api_version| api_version.to_string())
				.unwrap_or_else(|| UNKNOWN.to_owned()),
			driver_version: capabilities.info().vendor().unwrap_or(UNKNOWN).to_owned(),
			profiles: capabilities.profiles().iter().map(JsonProfile::from).collect(),
		}
	}
}

impl From<&ProfileCapabilities> for JsonProfile {
	fn from(profile_capabilities: &ProfileCapabilities) -> Self {
		Self {
			profile: profile_capabilities.profile().name().to_owned(),
			id: profile_capabilities.profile().id(),
			entrypoints: profile_capabilities
				.entrypoints()
				.iter()
				.map(|entrypoint| entrypoint.name().to_owned())
				.collect(),
		}
	}
}

pub fn render_json(capabilities: &DeviceCapabilities, out: impl Write) -> serde_json::Result<()> {
	serde_json::to_writer_pretty(out, &JsonReport::from(capabilities))
}
