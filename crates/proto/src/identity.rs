use crate::{
  logging::{intercept, Method},
  plugin, proto,
  utils::Record,
  IdentityService,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

/// Binds an [`IdentityService`] to the generated `csi.v1.Identity` server.
pub fn identity_server<T: IdentityService>(
  service: Arc<T>,
) -> proto::identity_server::IdentityServer<impl proto::identity_server::Identity> {
  proto::identity_server::IdentityServer::new(Identity(service))
}

struct Identity<T: IdentityService>(Arc<T>);

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GetPluginInfoError {
  #[error("Driver name not configured")]
  NameNotConfigured,

  #[error("Driver is missing version")]
  VersionNotConfigured,
}

impl From<GetPluginInfoError> for tonic::Status {
  fn from(value: GetPluginInfoError) -> Self {
    tonic::Status::unavailable(value.to_string())
  }
}

pub(crate) fn get_plugin_info(
  s: &impl IdentityService,
) -> Result<proto::GetPluginInfoResponse, GetPluginInfoError> {
  let name = s.name();
  if name.is_empty() {
    return Err(GetPluginInfoError::NameNotConfigured);
  }

  let vendor_version = s.version();
  if vendor_version.is_empty() {
    return Err(GetPluginInfoError::VersionNotConfigured);
  }

  Ok(proto::GetPluginInfoResponse {
    name: name.record_field("name").into(),
    vendor_version: vendor_version.record_field("vendor_version").into(),
    manifest: s.manifest().clone(),
  })
}

#[async_trait]
impl<T: IdentityService> proto::identity_server::Identity for Identity<T> {
  #[instrument(
    name = "identity.get_plugin_info",
    skip(self, request),
    fields(name, vendor_version)
  )]
  async fn get_plugin_info(
    &self,
    request: tonic::Request<proto::GetPluginInfoRequest>,
  ) -> Result<tonic::Response<proto::GetPluginInfoResponse>, tonic::Status> {
    intercept(Method::GetPluginInfo, request.into_inner(), |_| async move {
      let response = get_plugin_info(&*self.0)?;
      Ok::<_, tonic::Status>(response)
    })
    .await
  }

  #[instrument(name = "identity.get_plugin_capabilities", skip(self, request))]
  async fn get_plugin_capabilities(
    &self,
    request: tonic::Request<proto::GetPluginCapabilitiesRequest>,
  ) -> Result<tonic::Response<proto::GetPluginCapabilitiesResponse>, tonic::Status> {
    intercept(
      Method::GetPluginCapabilities,
      request.into_inner(),
      |_| async move {
        Ok::<_, tonic::Status>(plugin::get_capabilities(self.0.capabilities()))
      },
    )
    .await
  }

  #[instrument(name = "identity.probe", skip(self, request), fields(ready))]
  async fn probe(
    &self,
    request: tonic::Request<proto::ProbeRequest>,
  ) -> Result<tonic::Response<proto::ProbeResponse>, tonic::Status> {
    intercept(Method::Probe, request.into_inner(), |_| async move {
      let ready = self.0.ready().await?.record_field("ready");
      Ok::<_, tonic::Status>(proto::ProbeResponse { ready: Some(ready) })
    })
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{PluginCapabilities, PluginCapability, ProbeError};
  use proto::identity_server::Identity as _;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct Plugin {
    name: &'static str,
    version: &'static str,
    capabilities: PluginCapabilities,
    probes: AtomicUsize,
    fail: bool,
  }

  impl Plugin {
    fn new(name: &'static str, version: &'static str) -> Self {
      Plugin {
        name,
        version,
        capabilities: vec![PluginCapability::Unknown].into_iter().collect(),
        probes: AtomicUsize::new(0),
        fail: false,
      }
    }
  }

  #[async_trait]
  impl IdentityService for Plugin {
    fn name(&self) -> &str {
      self.name
    }

    fn version(&self) -> &str {
      self.version
    }

    fn capabilities(&self) -> &PluginCapabilities {
      &self.capabilities
    }

    async fn ready(&self) -> Result<bool, ProbeError> {
      let n = self.probes.fetch_add(1, Ordering::SeqCst);
      if self.fail {
        return Err(ProbeError::Unhealthy("volume group missing".into()));
      }

      // alternate so that caching would be observable
      Ok(n % 2 == 0)
    }
  }

  #[tokio::test]
  async fn plugin_info_requires_name_and_version() {
    let svc = Identity(Arc::new(Plugin::new("lvm.redhat.com", "0.1.0")));
    let response = svc
      .get_plugin_info(tonic::Request::new(proto::GetPluginInfoRequest {}))
      .await
      .unwrap()
      .into_inner();
    assert_eq!(response.name, "lvm.redhat.com");
    assert_eq!(response.vendor_version, "0.1.0");
    assert!(response.manifest.is_empty());

    for (name, version) in &[("", "0.1.0"), ("lvm.redhat.com", ""), ("", "")] {
      let svc = Identity(Arc::new(Plugin::new(*name, *version)));
      let status = svc
        .get_plugin_info(tonic::Request::new(proto::GetPluginInfoRequest {}))
        .await
        .unwrap_err();
      assert_eq!(status.code(), tonic::Code::Unavailable);
    }
  }

  #[tokio::test]
  async fn probe_is_never_cached() {
    let svc = Identity(Arc::new(Plugin::new("foo", "bar")));
    let mut seen = Vec::new();
    for _ in 0..3 {
      let response = svc
        .probe(tonic::Request::new(proto::ProbeRequest {}))
        .await
        .unwrap();
      seen.push(response.into_inner().ready);
    }

    assert_eq!(seen, vec![Some(true), Some(false), Some(true)]);
    assert_eq!(svc.0.probes.load(Ordering::SeqCst), 3);
  }

  #[tokio::test]
  async fn probe_failure_is_failed_precondition() {
    let mut plugin = Plugin::new("foo", "bar");
    plugin.fail = true;
    let svc = Identity(Arc::new(plugin));

    let status = svc
      .probe(tonic::Request::new(proto::ProbeRequest {}))
      .await
      .unwrap_err();
    assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    assert_eq!(status.message(), "volume group missing");
  }
}
