use async_trait::async_trait;
use csi_proto::{
  is_sensitive_key,
  node::{NodePublishVolumeError, NodeUnpublishVolumeError, VolumeCapability},
  STRIPPED,
};
use std::{collections::HashMap, fmt, io, path::Path};
use thiserror::Error;

/// What a backend needs to know to publish a volume, borrowed from the request.
///
/// `Debug` never renders secret values, nor volume context values whose key
/// names a credential.
#[derive(Clone, Copy)]
pub struct MountContext<'a> {
  pub volume_capability: &'a VolumeCapability,
  pub readonly: bool,
  pub staging_target_path: Option<&'a Path>,
  pub publish_context: &'a HashMap<String, String>,
  pub volume_context: &'a HashMap<String, String>,
  pub secrets: &'a HashMap<String, String>,
}

struct Redacted<'a> {
  map: &'a HashMap<String, String>,
  all: bool,
}

impl fmt::Debug for Redacted<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut m = f.debug_map();
    for (k, v) in self.map {
      if self.all || is_sensitive_key(k) {
        m.entry(k, &STRIPPED);
      } else {
        m.entry(k, v);
      }
    }

    m.finish()
  }
}

impl fmt::Debug for MountContext<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MountContext")
      .field("volume_capability", self.volume_capability)
      .field("readonly", &self.readonly)
      .field("staging_target_path", &self.staging_target_path)
      .field("publish_context", self.publish_context)
      .field(
        "volume_context",
        &Redacted {
          map: self.volume_context,
          all: false,
        },
      )
      .field(
        "secrets",
        &Redacted {
          map: self.secrets,
          all: true,
        },
      )
      .finish()
  }
}

#[derive(Debug, Error)]
pub enum BackendError {
  #[error("volume {0} not found")]
  VolumeNotFound(String),

  #[error("volume {0} is already published with incompatible options")]
  Incompatible(String),

  #[error(transparent)]
  Io(#[from] io::Error),

  #[error("{0}")]
  Other(String),
}

impl From<BackendError> for NodePublishVolumeError {
  fn from(value: BackendError) -> Self {
    match value {
      BackendError::VolumeNotFound(v) => NodePublishVolumeError::VolumeNotFound(v),
      BackendError::Incompatible(v) => NodePublishVolumeError::IncompatibleVolumePublished(v),
      value => NodePublishVolumeError::Internal(value.to_string()),
    }
  }
}

impl From<BackendError> for NodeUnpublishVolumeError {
  fn from(value: BackendError) -> Self {
    match value {
      BackendError::VolumeNotFound(v) => NodeUnpublishVolumeError::VolumeNotFound(v),
      value => NodeUnpublishVolumeError::Internal(value.to_string()),
    }
  }
}

/// Node-local volume management, mount and unmount of logical volumes.
///
/// `unmount` must succeed when nothing is mounted at `target_path`.
#[async_trait]
pub trait VolumeBackend: Send + Sync + 'static {
  async fn mount(
    &self,
    volume_id: &str,
    target_path: &Path,
    context: MountContext<'_>,
  ) -> Result<(), BackendError>;

  async fn unmount(&self, volume_id: &str, target_path: &Path) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
  use super::*;
  use csi_proto::{node::NodePublishVolumeRequest, proto};
  use std::convert::TryFrom;
  use tonic::{Code, Status};

  #[test]
  fn mount_context_hides_credentials() {
    let mut raw = proto::NodePublishVolumeRequest {
      volume_id: "vol-1".into(),
      target_path: "/mnt/vol-1".into(),
      volume_capability: Some(proto::VolumeCapability {
        access_mode: Some(proto::volume_capability::AccessMode {
          mode: proto::volume_capability::access_mode::Mode::SingleNodeWriter as i32,
        }),
        access_type: Some(proto::volume_capability::AccessType::Block(
          proto::volume_capability::BlockVolume {},
        )),
      }),
      ..Default::default()
    };
    raw.secrets.insert("password".into(), "hunter2".into());
    raw
      .volume_context
      .insert("authToken".into(), "abc123".into());
    raw
      .volume_context
      .insert("csi.storage.k8s.io/pod.name".into(), "web-0".into());
    let request = NodePublishVolumeRequest::try_from(raw).unwrap();

    let context = MountContext {
      volume_capability: request.volume_capability(),
      readonly: request.readonly(),
      staging_target_path: request.staging_target_path(),
      publish_context: request.publish_context(),
      volume_context: request.volume_context(),
      secrets: request.secrets(),
    };
    let rendered = format!("{:?}", context);

    assert!(rendered.contains("password"));
    assert!(rendered.contains("web-0"));
    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("abc123"));
  }

  #[test]
  fn backend_errors_keep_their_cause() {
    let status = Status::from(NodePublishVolumeError::from(BackendError::Other(
      "lvchange failed: exit status 5".into(),
    )));
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("lvchange failed: exit status 5"));

    let status = Status::from(NodePublishVolumeError::from(BackendError::VolumeNotFound(
      "vol-1".into(),
    )));
    assert_eq!(status.code(), Code::NotFound);

    let status = Status::from(NodeUnpublishVolumeError::from(BackendError::Io(
      io::Error::new(io::ErrorKind::PermissionDenied, "umount: permission denied"),
    )));
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("permission denied"));
  }
}
