use crate::status::Readiness;
use async_trait::async_trait;
use csi_proto::{IdentityService, PluginCapabilities, PluginCapability, ProbeError};
use std::{fmt, sync::Arc, time::Duration};

/// Upper bound on a single readiness check.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct LvmIdentity {
  name: String,
  version: String,
  capabilities: PluginCapabilities,
  readiness: Arc<dyn Readiness>,
}

impl LvmIdentity {
  pub fn new(
    name: impl Into<String>,
    version: impl Into<String>,
    readiness: Arc<dyn Readiness>,
  ) -> Self {
    LvmIdentity {
      name: name.into(),
      version: version.into(),
      capabilities: vec![PluginCapability::Unknown].into_iter().collect(),
      readiness,
    }
  }
}

impl fmt::Debug for LvmIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LvmIdentity")
      .field("name", &self.name)
      .field("version", &self.version)
      .field("capabilities", &self.capabilities)
      .finish()
  }
}

#[async_trait]
impl IdentityService for LvmIdentity {
  fn name(&self) -> &str {
    &self.name
  }

  fn version(&self) -> &str {
    &self.version
  }

  fn capabilities(&self) -> &PluginCapabilities {
    &self.capabilities
  }

  async fn ready(&self) -> Result<bool, ProbeError> {
    match tokio::time::timeout(PROBE_TIMEOUT, self.readiness.ready()).await {
      Ok(Ok(ready)) => Ok(ready),
      Ok(Err(e)) => Err(ProbeError::Unhealthy(e.to_string())),
      Err(_) => Err(ProbeError::Unhealthy(format!(
        "readiness check did not finish within {:?}",
        PROBE_TIMEOUT
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::status::{StatusError, StatusService};
  use std::sync::atomic::{AtomicBool, Ordering};

  #[test]
  fn advertises_configuration() {
    let identity = LvmIdentity::new("lvm.redhat.com", "0.1.0", Arc::new(StatusService::new()));

    assert_eq!(identity.name(), "lvm.redhat.com");
    assert_eq!(identity.version(), "0.1.0");
    assert_eq!(
      identity.capabilities().iter().copied().collect::<Vec<_>>(),
      vec![PluginCapability::Unknown]
    );
  }

  #[tokio::test]
  async fn ready_follows_the_readiness_check() {
    let flag = Arc::new(AtomicBool::new(false));
    let check = {
      let flag = flag.clone();
      move || -> Result<bool, StatusError> { Ok(flag.load(Ordering::SeqCst)) }
    };
    let identity = LvmIdentity::new("foo", "bar", Arc::new(check));

    assert_eq!(identity.ready().await.unwrap(), false);
    flag.store(true, Ordering::SeqCst);
    assert_eq!(identity.ready().await.unwrap(), true);
  }

  #[tokio::test]
  async fn failed_check_is_unhealthy() {
    let check =
      || -> Result<bool, StatusError> { Err(StatusError("volume group vg0 missing".into())) };
    let identity = LvmIdentity::new("foo", "bar", Arc::new(check));

    let status = tonic::Status::from(identity.ready().await.unwrap_err());
    assert_eq!(status.code(), tonic::Code::FailedPrecondition);
    assert_eq!(status.message(), "volume group vg0 missing");
  }

  struct Hanging;

  #[async_trait]
  impl Readiness for Hanging {
    async fn ready(&self) -> Result<bool, StatusError> {
      futures::future::pending().await
    }
  }

  #[tokio::test(start_paused = true)]
  async fn hanging_check_times_out() {
    let identity = LvmIdentity::new("foo", "bar", Arc::new(Hanging));

    let status = tonic::Status::from(identity.ready().await.unwrap_err());
    assert_eq!(status.code(), tonic::Code::FailedPrecondition);
  }
}
