#![forbid(unsafe_code)]

use std::{io::Write, process::exit};

use anyhow::anyhow;
use clap::{error::ErrorKind, Parser};
use env_logger::fmt::Color;

mod cli;

use cli::Cli;

#[cfg(feature = "libva")]
fn run(cli: &Cli) -> anyhow::Result<()> {
	use std::{fs::File, io::stdout};

	use vaapi_probe::{driver::libva::LibvaDriver, prelude::*};

	let driver = LibvaDriver::open(cli.device())?;
	let capabilities = scan(&driver);
	capabilities.vendor_category().log_advisory();

	// the JSON file is created before anything is printed so an unwritable
	// path fails the run before any output is produced
	let json_path = cli.json();
	let json_file = match &json_path {
		Some(path) => Some(File::create(path).map_err(|error| {
			anyhow!("failed to open JSON output file {}: {error}", path.display())
		})?),
		None => None,
	};

	render_text(&capabilities, &mut stdout().lock())?;

	if let (Some(file), Some(path)) = (json_file, &json_path) {
		render_json(&capabilities, file)?;
		println!();
		println!("📄 JSON output saved to {}", path.display());
	}

	Ok(())
}

#[cfg(not(feature = "libva"))]
fn run(cli: &Cli) -> anyhow::Result<()> {
	let _ = (cli.device(), cli.json());
	Err(anyhow!(
		"this binary was built without VA-API support, rebuild with the `libva` feature enabled"
	))
}

fn parse_cli() -> Cli {
	Cli::try_parse().unwrap_or_else(|error| {
		// goes to stderr for parse failures, stdout for --help/--version
		let _ = error.print();
		match error.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit(0),
			_ => exit(1),
		}
	})
}

fn main() {
	let cli = parse_cli();

	env_logger::builder()
		.format(|buf, record| {
			let level_style = buf.default_level_style(record.level());
			write!(buf, "{:<5}", level_style.value(record.level()))?;
			let mut style = buf.style();
			style.set_color(Color::White).set_bold(true);
			write!(buf, "{}", style.value(" > "))?;
			writeln!(buf, "{}", record.args())
		})
		.parse_filters(cli.log_level().to_string().as_str())
		.init();

	if let Err(error) = run(&cli) {
		log::error!("{}", error);
		exit(1);
	}
}
