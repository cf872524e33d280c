//! Types and pure logic shared by every TrainHub front end

#![warn(unused_crate_dependencies)]

pub mod accounts;
pub mod const_config;
pub mod coursework;
pub mod errors;
pub mod fixtures;
pub mod reports;
pub mod req_args;
pub mod roster;
pub mod routes;
pub mod session;
pub mod table;
pub mod talent_search;
pub mod token;
pub mod uac;

pub use routes::resolve_dashboard_route;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
