use std::path::PathBuf;

use clap::Parser;
use getset::{CopyGetters, Getters};
use vaapi_probe::prelude::*;

/// Probe a VA-API device: list every supported codec profile and its
/// entrypoints, classify per-profile transcoding capability and optionally
/// write the enumeration to a JSON file.
#[derive(Parser, Getters, CopyGetters)]
#[clap(version, about, long_about)]
pub struct Cli {
	#[clap(short, long, value_parser, default_value_t = LogLevel::Info)]
	#[arg(value_enum)]
	#[getset(get_copy = "pub")]
	log_level: LogLevel,

	/// path to a DRM render node, e.g. /dev/dri/renderD128
	#[getset(get = "pub")]
	device: PathBuf,

	/// `--json <output.json>` to write the enumeration as a JSON document,
	/// overwriting the file if it exists; any other trailing arguments
	/// disable JSON output
	#[clap(trailing_var_arg = true, allow_hyphen_values = true, value_name = "JSON ARGS")]
	json_args: Vec<String>,
}

impl Cli {
	/// JSON output path. JSON mode is only enabled when the trailing
	/// arguments are exactly `--json <path>`; any other combination
	/// degrades to text-only output instead of erroring.
	pub fn json(&self) -> Option<PathBuf> {
		match self.json_args.as_slice() {
			[flag, path] if flag == "--json" => Some(PathBuf::from(path)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_arguments_is_a_parse_error() {
		assert!(Cli::try_parse_from(["vaapi_probe"]).is_err());
	}

	#[test]
	fn device_alone_runs_text_only() {
		let cli = Cli::try_parse_from(["vaapi_probe", "/dev/dri/renderD128"]).unwrap();
		assert_eq!(cli.device(), &PathBuf::from("/dev/dri/renderD128"));
		assert_eq!(cli.json(), None);
	}

	#[test]
	fn json_flag_and_path_enable_json_mode() {
		let cli = Cli::try_parse_from(["vaapi_probe", "/dev/dri/renderD128", "--json", "out.json"]).unwrap();
		assert_eq!(cli.json(), Some(PathBuf::from("out.json")));
	}

	#[test]
	fn mismatched_third_argument_silently_disables_json_mode() {
		let cli = Cli::try_parse_from(["vaapi_probe", "/dev/dri/renderD128", "notjson", "out.json"]).unwrap();
		assert_eq!(cli.json(), None);
	}

	#[test]
	fn json_flag_without_a_path_disables_json_mode() {
		let cli = Cli::try_parse_from(["vaapi_probe", "/dev/dri/renderD128", "--json"]).unwrap();
		assert_eq!(cli.json(), None);
	}

	#[test]
	fn json_flag_in_the_wrong_position_disables_json_mode() {
		let cli = Cli::try_parse_from(["vaapi_probe", "/dev/dri/renderD128", "out.json", "--json"]).unwrap();
		assert_eq!(cli.json(), None);
	}

	#[test]
	fn log_level_option_parses_before_the_device() {
		let cli = Cli::try_parse_from(["vaapi_probe", "--log-level", "debug", "/dev/dri/renderD128"]).unwrap();
		assert_eq!(cli.log_level(), LogLevel::Debug);
		assert_eq!(cli.json(), None);
	}
}
