//! Route discovery and registration-file generation.
//!
//! Scans a directory of Swift page files, finds the request handlers each
//! file declares, derives a route from the file's location and renders one
//! registration file for all of them.
//!
//! # Module Organization
//!
//! - [`walker`] - page file discovery
//! - [`route_path`] - file path to route path conversion
//! - [`handlers`] - handler declarations in a parsed file
//! - [`manifest`] - ordered route manifest
//! - [`routes_file`] - the generated registration file
//! - [`pipeline`] - phase runner tying the above together
//! - [`builder`] - indented code building

pub mod builder;
mod generator;
pub mod handlers;
pub mod manifest;
pub mod pipeline;
pub mod route_path;
pub mod routes_file;
pub mod walker;

pub use generator::{GenerateResult, Generator, Outcome};
pub use handlers::{Capability, HandlerDeclaration, find_handlers};
pub use manifest::{RouteEntry, RouteFile, RouteManifest, collect_routes};
pub use routes_file::RoutesFile;
pub use route_path::route_path;
pub use walker::{SourceUnit, find_source_files};
