macro_rules! unsupported {
  ($name:expr) => {{
    return Err(
      ::tonic::Status::new(
        ::tonic::Code::Unimplemented,
        format!("{} is not yet implemented", $name),
      )
      .into(),
    );
  }};
}

pub mod identity;
pub mod logging;
pub mod node;
pub mod volume;

#[allow(clippy::all, missing_docs)]
pub mod proto;

mod plugin;
mod secrets;
mod utils;

use std::collections::HashMap;

use async_trait::async_trait;
use lazy_static::lazy_static;
use thiserror::Error;

pub use identity::identity_server;
pub use node::{node_server, NodeService};
pub use plugin::{PluginCapabilities, PluginCapability, VolumeExpansion};
pub use secrets::{is_sensitive_key, STRIPPED};

#[async_trait]
pub trait IdentityService: Send + Sync + 'static {
  /// The name MUST follow domain name notation format
  /// (<https://tools.ietf.org/html/rfc1035#section-2.3.1>). It SHOULD
  /// include the plugin's host company name and the plugin name,
  /// to minimize the possibility of collisions. It MUST be 63
  /// characters or less, beginning and ending with an alphanumeric
  /// character ([a-z0-9A-Z]) with dashes (-), dots (.), and
  /// alphanumerics between.
  ///
  /// An empty name is reported to the CO as `UNAVAILABLE`.
  fn name(&self) -> &str;

  /// Plugin version. Value of this field is opaque to the CO.
  ///
  /// An empty version is reported to the CO as `UNAVAILABLE`.
  fn version(&self) -> &str;

  /// Capabilities advertised verbatim on every `GetPluginCapabilities`.
  fn capabilities(&self) -> &PluginCapabilities;

  #[inline]
  fn manifest(&self) -> &HashMap<String, String> {
    lazy_static! {
      static ref EMPTY_MANIFEST: HashMap<String, String> = HashMap::new();
    }

    &EMPTY_MANIFEST
  }

  /// Evaluated on every `Probe`, never cached.
  ///
  /// `Ok(false)` means the plugin is healthy but still initializing.
  /// An error means the plugin is unhealthy and is reported as
  /// `FAILED_PRECONDITION`.
  async fn ready(&self) -> Result<bool, ProbeError> {
    Ok(true)
  }
}

#[derive(Debug, Error)]
pub enum ProbeError {
  #[error("{0}")]
  Unhealthy(String),

  #[error(transparent)]
  #[doc(hidden)]
  Other(#[from] tonic::Status),
}

impl From<ProbeError> for tonic::Status {
  fn from(value: ProbeError) -> Self {
    match value {
      ProbeError::Other(v) => v,
      ProbeError::Unhealthy(message) => tonic::Status::failed_precondition(message),
    }
  }
}
