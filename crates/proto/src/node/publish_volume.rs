use crate::{
  proto,
  secrets::{Secrets, VolumeContext},
  volume::VolumeCapability,
};
use std::{
  collections::HashMap,
  convert::TryFrom,
  path::{Path, PathBuf},
  time::Instant,
};
use thiserror::Error;
use tonic::{Code, Status};

/// A validated `NodePublishVolume` call.
///
/// The volume id is non-empty, the target path (and staging path, when
/// given) is absolute and the capability carries both an access mode and an
/// access type.
#[derive(Debug)]
pub struct NodePublishVolumeRequest {
  volume_id: String,
  target_path: PathBuf,
  staging_target_path: Option<PathBuf>,
  capability: VolumeCapability,
  readonly: bool,
  publish_context: HashMap<String, String>,
  context: VolumeContext,
  secrets: Secrets,
  deadline: Option<Instant>,
}

impl NodePublishVolumeRequest {
  #[inline]
  pub fn volume_id(&self) -> &str {
    &self.volume_id
  }

  /// Where the volume must show up. Block volumes are placed there as a
  /// device file, mount volumes as a mounted directory.
  #[inline]
  pub fn target_path(&self) -> &Path {
    &self.target_path
  }

  /// Set when the volume was staged first.
  #[inline]
  pub fn staging_target_path(&self) -> Option<&Path> {
    self.staging_target_path.as_deref()
  }

  #[inline]
  pub fn volume_capability(&self) -> &VolumeCapability {
    &self.capability
  }

  #[inline]
  pub fn readonly(&self) -> bool {
    self.readonly
  }

  #[inline]
  pub fn publish_context(&self) -> &HashMap<String, String> {
    &self.publish_context
  }

  #[inline]
  pub fn volume_context(&self) -> &HashMap<String, String> {
    self.context.as_ref()
  }

  #[inline]
  pub fn secrets(&self) -> &HashMap<String, String> {
    self.secrets.as_ref()
  }

  /// Point in time after which the caller no longer waits for an answer.
  #[inline]
  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  #[inline]
  pub fn with_deadline(mut self, deadline: Instant) -> Self {
    self.deadline = Some(deadline);
    self
  }
}

pub(crate) fn required(value: String, field: &'static str) -> Result<String, Status> {
  if value.is_empty() {
    Err(Status::invalid_argument(format!("{} is empty", field)))
  } else {
    Ok(value)
  }
}

pub(crate) fn absolute_path(value: String, field: &'static str) -> Result<PathBuf, Status> {
  let path = PathBuf::from(required(value, field)?);
  if path.is_absolute() {
    Ok(path)
  } else {
    Err(Status::invalid_argument(format!("{} is not absolute", field)))
  }
}

impl TryFrom<proto::NodePublishVolumeRequest> for NodePublishVolumeRequest {
  type Error = Status;

  fn try_from(value: proto::NodePublishVolumeRequest) -> Result<Self, Self::Error> {
    let staging_target_path = if value.staging_target_path.is_empty() {
      None
    } else {
      Some(absolute_path(
        value.staging_target_path,
        "NodePublishVolumeRequest.staging_target_path",
      )?)
    };

    Ok(NodePublishVolumeRequest {
      volume_id: required(value.volume_id, "NodePublishVolumeRequest.volume_id")?,
      target_path: absolute_path(value.target_path, "NodePublishVolumeRequest.target_path")?,
      staging_target_path,
      capability: VolumeCapability::from_request(
        value.volume_capability,
        "NodePublishVolumeRequest.volume_capability",
      )?,
      readonly: value.readonly,
      publish_context: value.publish_context,
      context: value.volume_context.into(),
      secrets: value.secrets.into(),
      deadline: None,
    })
  }
}

#[derive(Debug, Error)]
pub enum NodePublishVolumeError {
  #[error("Volume does not exist: {0}")]
  VolumeNotFound(String),

  /// Already published at the target path with another capability or
  /// readonly flag.
  #[error("Volume published but is incompatible: {0}")]
  IncompatibleVolumePublished(String),

  /// The caller gave up while the request waited for another operation on the
  /// same volume.
  #[error("Cancelled: {0}")]
  Cancelled(String),

  #[error("Internal error: {0}")]
  Internal(String),

  #[error(transparent)]
  #[doc(hidden)]
  Other(#[from] Status),
}

impl NodePublishVolumeError {
  pub fn code(&self) -> Code {
    match self {
      NodePublishVolumeError::VolumeNotFound(_) => Code::NotFound,
      NodePublishVolumeError::IncompatibleVolumePublished(_) => Code::AlreadyExists,
      NodePublishVolumeError::Cancelled(_) => Code::Cancelled,
      NodePublishVolumeError::Internal(_) => Code::Internal,
      NodePublishVolumeError::Other(status) => status.code(),
    }
  }
}

impl From<NodePublishVolumeError> for Status {
  fn from(value: NodePublishVolumeError) -> Self {
    match value {
      NodePublishVolumeError::Other(status) => status,
      value => Status::new(value.code(), value.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request() -> proto::NodePublishVolumeRequest {
    proto::NodePublishVolumeRequest {
      volume_id: "vol-1".into(),
      target_path: "/var/lib/kubelet/pods/p/volumes/vol-1/mount".into(),
      volume_capability: Some(proto::VolumeCapability {
        access_mode: Some(proto::volume_capability::AccessMode {
          mode: proto::volume_capability::access_mode::Mode::SingleNodeWriter as i32,
        }),
        access_type: Some(proto::volume_capability::AccessType::Block(
          proto::volume_capability::BlockVolume {},
        )),
      }),
      ..Default::default()
    }
  }

  #[test]
  fn valid_request() {
    let mut raw = request();
    raw.secrets.insert("password".into(), "hunter2".into());
    let request = NodePublishVolumeRequest::try_from(raw).unwrap();

    assert_eq!(request.volume_id(), "vol-1");
    assert_eq!(request.staging_target_path(), None);
    assert_eq!(request.secrets()["password"], "hunter2");
    assert!(!format!("{:?}", request).contains("hunter2"));
  }

  #[test]
  fn rejects_invalid_requests() {
    let mut missing_id = request();
    missing_id.volume_id.clear();
    let mut relative = request();
    relative.target_path = "mnt/vol".into();
    let mut no_capability = request();
    no_capability.volume_capability = None;
    let mut relative_staging = request();
    relative_staging.staging_target_path = "staging".into();

    let cases = vec![
      (missing_id, "NodePublishVolumeRequest.volume_id is empty"),
      (relative, "NodePublishVolumeRequest.target_path is not absolute"),
      (no_capability, "NodePublishVolumeRequest.volume_capability is missing"),
      (
        relative_staging,
        "NodePublishVolumeRequest.staging_target_path is not absolute",
      ),
    ];

    for (raw, message) in cases {
      let status = NodePublishVolumeRequest::try_from(raw).unwrap_err();
      assert_eq!(status.code(), Code::InvalidArgument);
      assert_eq!(status.message(), message);
    }
  }

  #[test]
  fn error_codes() {
    let cases = vec![
      (NodePublishVolumeError::VolumeNotFound("v".into()), Code::NotFound),
      (
        NodePublishVolumeError::IncompatibleVolumePublished("v".into()),
        Code::AlreadyExists,
      ),
      (NodePublishVolumeError::Cancelled("v".into()), Code::Cancelled),
      (NodePublishVolumeError::Internal("disk gone".into()), Code::Internal),
      (
        NodePublishVolumeError::Other(Status::unimplemented("x")),
        Code::Unimplemented,
      ),
    ];

    for (error, code) in cases {
      assert_eq!(error.code(), code);
      assert_eq!(Status::from(error).code(), code);
    }
  }
}
