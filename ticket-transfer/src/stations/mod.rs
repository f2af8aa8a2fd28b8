//! Station telecode → name lookup.
//!
//! Built from the ticketing site's static station table at startup and
//! passed by reference wherever names are displayed.

mod directory;
mod error;

pub use directory::StationDirectory;
pub use error::StationError;
