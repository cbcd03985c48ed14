//! HTTP request handlers and the app factory.

pub mod current;
pub mod openapi;

pub use current::*;
pub use openapi::*;
