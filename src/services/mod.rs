//! Business logic and upstream integrations.
//!
//! The weather provider and the location service sit behind traits so the
//! handler can be exercised with substitutes.

pub mod error;
pub mod geolocation;
pub mod normalizer;
pub mod openweather;
pub mod upstream;

pub use error::*;
pub use geolocation::*;
pub use normalizer::*;
pub use openweather::*;
