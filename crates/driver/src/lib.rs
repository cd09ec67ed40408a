//! CSI node plugin for LVM backed volumes.
//!
//! Serves the `csi.v1.Identity` and `csi.v1.Node` services over a unix or tcp
//! endpoint. Volume operations are delegated to a [`backend::VolumeBackend`];
//! without one, publish and unpublish answer `Unimplemented`.

pub mod backend;
pub mod config;
pub mod endpoint;
pub mod identity;
pub mod locks;
pub mod node;
pub mod server;
pub mod status;
pub mod version;

mod driver;

pub use driver::{LvmDriver, LvmDriverOptions};
