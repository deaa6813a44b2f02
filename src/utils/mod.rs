//! Utility Functions
//!
//! User-friendly error formatting for the command line.
//!
//! ```rust,no_run
//! use lamco_videowall::utils::format_user_error;
//!
//! fn run() -> anyhow::Result<()> {
//!     anyhow::bail!("Failed to read config file: wall.toml")
//! }
//!
//! if let Err(e) = run() {
//!     eprintln!("{}", format_user_error(&e));
//! }
//! ```
//!
//! Wall configuration rejections get fix hints (allowed grid sizes,
//! supported resolutions); configuration file problems get syntax hints.

pub mod errors;

pub use errors::format_user_error;
