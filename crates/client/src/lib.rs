//! Morsel client: REST service wrappers, per-resource stores and the
//! application context that ties them together.

pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod services;
pub mod stores;

#[cfg(test)]
mod test;
