//! Request logger wrapped around every RPC.
//!
//! Each call logs its method, the request with secrets stripped and then
//! either the response or the error. Chatty read-only calls log at `TRACE`,
//! everything else at `DEBUG`. Failures are always logged: `Unimplemented`
//! as a warning, anything else as an error.

use crate::{proto, secrets};
use std::{fmt, future::Future};
use tracing::{error, warn};

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash)]
pub enum Verbosity {
  /// High frequency, low value calls.
  Quiet,
  Normal,
}

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash)]
pub enum Method {
  GetPluginInfo,
  GetPluginCapabilities,
  Probe,
  NodeStageVolume,
  NodeUnstageVolume,
  NodePublishVolume,
  NodeUnpublishVolume,
  NodeGetVolumeStats,
  NodeExpandVolume,
  NodeGetCapabilities,
  NodeGetInfo,
}

impl Method {
  pub fn full_name(self) -> &'static str {
    match self {
      Method::GetPluginInfo => "/csi.v1.Identity/GetPluginInfo",
      Method::GetPluginCapabilities => "/csi.v1.Identity/GetPluginCapabilities",
      Method::Probe => "/csi.v1.Identity/Probe",
      Method::NodeStageVolume => "/csi.v1.Node/NodeStageVolume",
      Method::NodeUnstageVolume => "/csi.v1.Node/NodeUnstageVolume",
      Method::NodePublishVolume => "/csi.v1.Node/NodePublishVolume",
      Method::NodeUnpublishVolume => "/csi.v1.Node/NodeUnpublishVolume",
      Method::NodeGetVolumeStats => "/csi.v1.Node/NodeGetVolumeStats",
      Method::NodeExpandVolume => "/csi.v1.Node/NodeExpandVolume",
      Method::NodeGetCapabilities => "/csi.v1.Node/NodeGetCapabilities",
      Method::NodeGetInfo => "/csi.v1.Node/NodeGetInfo",
    }
  }

  /// The bare RPC name, e.g. `NodePublishVolume`.
  pub fn name(self) -> &'static str {
    let full = self.full_name();
    match full.rfind('/') {
      Some(idx) => &full[idx + 1..],
      None => full,
    }
  }

  #[inline]
  pub fn verbosity(self) -> Verbosity {
    verbosity(self.full_name())
  }
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.full_name())
  }
}

/// Log tier for a fully qualified gRPC method name.
pub fn verbosity(full_method: &str) -> Verbosity {
  match full_method {
    "/csi.v1.Identity/Probe"
    | "/csi.v1.Node/NodeGetCapabilities"
    | "/csi.v1.Node/NodeGetVolumeStats" => Verbosity::Quiet,
    _ => Verbosity::Normal,
  }
}

macro_rules! log_at {
  ($verbosity:expr, $($arg:tt)+) => {
    match $verbosity {
      Verbosity::Quiet => ::tracing::trace!($($arg)+),
      Verbosity::Normal => ::tracing::debug!($($arg)+),
    }
  };
}

/// Requests that may carry credentials and must be scrubbed before logging.
pub trait StripSecrets: Clone + fmt::Debug {
  #[inline]
  fn strip_secrets(self) -> Self {
    self
  }
}

/// `Debug` view of a request with its secrets stripped. The request is only
/// cloned when the log event is actually emitted.
pub struct Stripped<'a, T>(pub &'a T);

impl<T: StripSecrets> fmt::Debug for Stripped<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.0.clone().strip_secrets(), f)
  }
}

impl StripSecrets for proto::GetPluginInfoRequest {}
impl StripSecrets for proto::GetPluginCapabilitiesRequest {}
impl StripSecrets for proto::ProbeRequest {}
impl StripSecrets for proto::NodeUnstageVolumeRequest {}
impl StripSecrets for proto::NodeUnpublishVolumeRequest {}
impl StripSecrets for proto::NodeGetVolumeStatsRequest {}
impl StripSecrets for proto::NodeGetCapabilitiesRequest {}
impl StripSecrets for proto::NodeGetInfoRequest {}

/// Mount flags may carry credentials too.
fn strip_mount_flags(capability: Option<&mut proto::VolumeCapability>) {
  if let Some(proto::volume_capability::AccessType::Mount(mount)) =
    capability.and_then(|c| c.access_type.as_mut())
  {
    for flag in &mut mount.mount_flags {
      *flag = secrets::STRIPPED.into();
    }
  }
}

impl StripSecrets for proto::NodeStageVolumeRequest {
  fn strip_secrets(mut self) -> Self {
    secrets::strip_all(&mut self.secrets);
    secrets::strip_sensitive(&mut self.volume_context);
    strip_mount_flags(self.volume_capability.as_mut());
    self
  }
}

impl StripSecrets for proto::NodePublishVolumeRequest {
  fn strip_secrets(mut self) -> Self {
    secrets::strip_all(&mut self.secrets);
    secrets::strip_sensitive(&mut self.volume_context);
    strip_mount_flags(self.volume_capability.as_mut());
    self
  }
}

impl StripSecrets for proto::NodeExpandVolumeRequest {
  fn strip_secrets(mut self) -> Self {
    secrets::strip_all(&mut self.secrets);
    self
  }
}

/// Runs `handler` for `method`, logging the call around it.
pub async fn intercept<Req, Resp, F, Fut>(
  method: Method,
  request: Req,
  handler: F,
) -> Result<tonic::Response<Resp>, tonic::Status>
where
  Req: StripSecrets,
  Resp: fmt::Debug,
  F: FnOnce(Req) -> Fut,
  Fut: Future<Output = Result<Resp, tonic::Status>>,
{
  let verbosity = method.verbosity();
  log_at!(verbosity, "GRPC call: {}", method);
  log_at!(verbosity, "GRPC request: {:?}", Stripped(&request));

  match handler(request).await {
    Ok(response) => {
      log_at!(verbosity, "GRPC response: {:?}", response);
      Ok(tonic::Response::new(response))
    }
    Err(status) if status.code() == tonic::Code::Unimplemented => {
      warn!(%method, "GRPC error: {}", status.message());
      Err(status)
    }
    Err(status) => {
      error!(%method, code = ?status.code(), "GRPC error: {}", status.message());
      Err(status)
    }
  }
}
