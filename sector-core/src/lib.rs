#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod decomposition;
pub mod error;
pub mod geometry;
pub mod params;
pub mod sector;
pub mod view;

pub use geometry::bounds;
pub use geometry::polygon;
pub use geometry::r2;
pub use geometry::sample;
pub use geometry::transform;

pub use decomposition::Decomposition;
pub use error::{Error, ParamsError};
pub use params::Params;
pub use polygon::Polygon;
pub use r2::R2;
pub use sector::{
    build_original_sector, build_rearranged_sector, limits, Arrangement, Limits,
    DEFAULT_SAMPLES,
};

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, Error> {
    match level {
        Some("off") => Ok(log::LevelFilter::Off),
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(Error::LogLevel(level.to_string())),
    }
}
