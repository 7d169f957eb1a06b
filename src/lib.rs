pub mod capability;
pub mod codec;
pub mod driver;
pub mod entrypoint;
pub mod log_level;
pub mod prelude;
pub mod profile;
pub mod report;
pub mod scan;
pub mod summary;
pub mod vendor;
