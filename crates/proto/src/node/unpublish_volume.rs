use super::publish_volume::{absolute_path, required};
use crate::proto;
use std::{
  convert::TryFrom,
  path::{Path, PathBuf},
  time::Instant,
};
use thiserror::Error;
use tonic::{Code, Status};

/// A validated `NodeUnpublishVolume` call.
#[derive(Debug)]
pub struct NodeUnpublishVolumeRequest {
  volume_id: String,
  target_path: PathBuf,
  deadline: Option<Instant>,
}

impl NodeUnpublishVolumeRequest {
  #[inline]
  pub fn volume_id(&self) -> &str {
    &self.volume_id
  }

  /// The path the volume was published at. Whatever was created there on
  /// publish is removed.
  #[inline]
  pub fn target_path(&self) -> &Path {
    &self.target_path
  }

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

impl TryFrom<proto::NodeUnpublishVolumeRequest> for NodeUnpublishVolumeRequest {
  type Error = Status;

  fn try_from(value: proto::NodeUnpublishVolumeRequest) -> Result<Self, Self::Error> {
    Ok(NodeUnpublishVolumeRequest {
      volume_id: required(value.volume_id, "NodeUnpublishVolumeRequest.volume_id")?,
      target_path: absolute_path(value.target_path, "NodeUnpublishVolumeRequest.target_path")?,
      deadline: None,
    })
  }
}

#[derive(Debug, Error)]
pub enum NodeUnpublishVolumeError {
  #[error("Volume does not exist: {0}")]
  VolumeNotFound(String),

  #[error("Cancelled: {0}")]
  Cancelled(String),

  #[error("Internal error: {0}")]
  Internal(String),

  #[error(transparent)]
  #[doc(hidden)]
  Other(#[from] Status),
}

impl NodeUnpublishVolumeError {
  pub fn code(&self) -> Code {
    match self {
      NodeUnpublishVolumeError::VolumeNotFound(_) => Code::NotFound,
      NodeUnpublishVolumeError::Cancelled(_) => Code::Cancelled,
      NodeUnpublishVolumeError::Internal(_) => Code::Internal,
      NodeUnpublishVolumeError::Other(status) => status.code(),
    }
  }
}

impl From<NodeUnpublishVolumeError> for Status {
  fn from(value: NodeUnpublishVolumeError) -> Self {
    match value {
      NodeUnpublishVolumeError::Other(status) => status,
      value => Status::new(value.code(), value.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validates_fields() {
    let ok = NodeUnpublishVolumeRequest::try_from(proto::NodeUnpublishVolumeRequest {
      volume_id: "vol-1".into(),
      target_path: "/mnt/vol-1".into(),
    })
    .unwrap();
    assert_eq!(ok.target_path(), Path::new("/mnt/vol-1"));
    assert_eq!(ok.deadline(), None);

    let empty = NodeUnpublishVolumeRequest::try_from(proto::NodeUnpublishVolumeRequest::default())
      .unwrap_err();
    assert_eq!(empty.code(), Code::InvalidArgument);
    assert_eq!(empty.message(), "NodeUnpublishVolumeRequest.volume_id is empty");

    let no_target = NodeUnpublishVolumeRequest::try_from(proto::NodeUnpublishVolumeRequest {
      volume_id: "vol-1".into(),
      target_path: String::new(),
    })
    .unwrap_err();
    assert_eq!(no_target.message(), "NodeUnpublishVolumeRequest.target_path is empty");
  }

  #[test]
  fn cancelled_keeps_its_message() {
    let status = Status::from(NodeUnpublishVolumeError::Cancelled("vol-1 at /mnt/vol-1".into()));
    assert_eq!(status.code(), Code::Cancelled);
    assert_eq!(status.message(), "Cancelled: vol-1 at /mnt/vol-1");
  }
}
