//! guestbind-lib: remap shared folders inside a guest machine with bindfs.
//!
//! This crate provides:
//! - `options`: the bindfs option catalog, layered merge and argument rendering
//! - `bind`: folder bindings and the orchestrator that binds them over a remote channel
//! - `remote`: the remote execution seam and its SSH implementation
//! - `config`: the YAML configuration file

pub mod bind;
pub mod config;
pub mod consts;
pub mod messages;
pub mod options;
pub mod platform;
pub mod remote;
pub mod report;
pub mod util;
