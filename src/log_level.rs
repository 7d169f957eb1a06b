use clap::ValueEnum;
use strum::Display;

/// Log level selectable from the command line
#[derive(Copy, Clone, Display, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}
