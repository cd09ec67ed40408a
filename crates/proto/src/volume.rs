use std::{
  collections::HashMap,
  convert::{TryFrom, TryInto},
  fmt,
};

use crate::proto;

pub type Topology = HashMap<String, String>;

#[derive(Debug)]
pub struct VolumeCapability {
  access_mode: AccessMode,
  access_type: AccessType,
}

impl VolumeCapability {
  #[inline]
  pub fn access_mode(&self) -> AccessMode {
    self.access_mode
  }

  #[inline]
  pub fn access_type(&self) -> &AccessType {
    &self.access_type
  }
}

/// How many nodes, and workloads on a node, may use the volume at once
/// and whether they may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessMode {
  Unknown,
  SingleNodeWriter,
  SingleNodeReaderOnly,
  MultiNodeReaderOnly,
  /// One node read/write, the rest readonly.
  MultiNodeSingleWriter,
  MultiNodeMultiWriter,
  /// One workload on one node.
  SingleNodeSingleWriter,
  /// Any number of workloads on one node.
  SingleNodeMultiWriter,
}

impl AccessMode {
  /// Whether a publish in this mode must be readonly.
  pub fn is_readonly(self) -> bool {
    matches!(
      self,
      AccessMode::SingleNodeReaderOnly | AccessMode::MultiNodeReaderOnly
    )
  }
}

impl From<proto::volume_capability::AccessMode> for AccessMode {
  fn from(value: proto::volume_capability::AccessMode) -> Self {
    use proto::volume_capability::access_mode::Mode;

    match Mode::try_from(value.mode) {
      Ok(Mode::SingleNodeWriter) => AccessMode::SingleNodeWriter,
      Ok(Mode::SingleNodeReaderOnly) => AccessMode::SingleNodeReaderOnly,
      Ok(Mode::MultiNodeReaderOnly) => AccessMode::MultiNodeReaderOnly,
      Ok(Mode::MultiNodeSingleWriter) => AccessMode::MultiNodeSingleWriter,
      Ok(Mode::MultiNodeMultiWriter) => AccessMode::MultiNodeMultiWriter,
      Ok(Mode::SingleNodeSingleWriter) => AccessMode::SingleNodeSingleWriter,
      Ok(Mode::SingleNodeMultiWriter) => AccessMode::SingleNodeMultiWriter,
      Ok(Mode::Unknown) | Err(_) => AccessMode::Unknown,
    }
  }
}

#[derive(Debug)]
pub enum AccessType {
  /// Raw block device.
  Block,
  /// Mounted filesystem.
  Mount(MountVolume),
}

impl From<proto::volume_capability::AccessType> for AccessType {
  fn from(value: proto::volume_capability::AccessType) -> Self {
    match value {
      proto::volume_capability::AccessType::Block(_) => AccessType::Block,
      proto::volume_capability::AccessType::Mount(v) => AccessType::Mount(v.into()),
    }
  }
}

pub struct MountVolume {
  fs_type: Option<String>,
  mount_flags: Vec<String>,
  volume_mount_group: Option<String>,
}

impl MountVolume {
  #[inline]
  pub fn fs_type(&self) -> Option<&str> {
    self.fs_type.as_deref()
  }

  /// Mount options. These may hold credentials and are never logged.
  pub fn mount_flags(&self) -> impl Iterator<Item = &str> + ExactSizeIterator {
    self.mount_flags.iter().map(|v| &**v)
  }

  /// Group ownership to apply to the mounted volume, when the node
  /// advertises `VOLUME_MOUNT_GROUP`.
  #[inline]
  pub fn volume_mount_group(&self) -> Option<&str> {
    self.volume_mount_group.as_deref()
  }
}

impl From<proto::volume_capability::MountVolume> for MountVolume {
  fn from(value: proto::volume_capability::MountVolume) -> Self {
    #[inline]
    fn non_empty(v: String) -> Option<String> {
      if v.is_empty() {
        None
      } else {
        Some(v)
      }
    }

    MountVolume {
      fs_type: non_empty(value.fs_type),
      mount_flags: value.mount_flags,
      volume_mount_group: non_empty(value.volume_mount_group),
    }
  }
}

impl fmt::Debug for MountVolume {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MountVolume")
      .field("fs_type", &self.fs_type)
      .field(
        "mount_flags",
        &format!("REDACTED ({} items)", self.mount_flags.len()),
      )
      .field("volume_mount_group", &self.volume_mount_group)
      .finish()
  }
}

impl TryFrom<proto::VolumeCapability> for VolumeCapability {
  type Error = tonic::Status;

  fn try_from(value: proto::VolumeCapability) -> Result<Self, Self::Error> {
    let access_mode = value
      .access_mode
      .ok_or_else(|| tonic::Status::invalid_argument("Missing access_mode for VolumeCapability"))?
      .into();

    let access_type = value
      .access_type
      .ok_or_else(|| tonic::Status::invalid_argument("Missing access_type for VolumeCapability"))?
      .into();

    Ok(VolumeCapability {
      access_mode,
      access_type,
    })
  }
}

impl VolumeCapability {
  pub(crate) fn from_request(
    value: Option<proto::VolumeCapability>,
    field: &'static str,
  ) -> Result<Self, tonic::Status> {
    match value {
      None => Err(tonic::Status::invalid_argument(format!("{} is missing", field))),
      Some(v) => v.try_into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mount_flags_are_redacted() {
    let capability = VolumeCapability::try_from(proto::VolumeCapability {
      access_mode: Some(proto::volume_capability::AccessMode {
        mode: proto::volume_capability::access_mode::Mode::SingleNodeWriter as i32,
      }),
      access_type: Some(proto::volume_capability::AccessType::Mount(
        proto::volume_capability::MountVolume {
          fs_type: "xfs".into(),
          mount_flags: vec!["context=secret".into()],
          volume_mount_group: String::new(),
        },
      )),
    })
    .unwrap();

    assert_eq!(capability.access_mode(), AccessMode::SingleNodeWriter);
    assert!(!capability.access_mode().is_readonly());
    let rendered = format!("{:?}", capability);
    assert!(rendered.contains("xfs"));
    assert!(!rendered.contains("context=secret"));
    match capability.access_type() {
      AccessType::Mount(m) => {
        assert_eq!(m.mount_flags().len(), 1);
        assert_eq!(m.volume_mount_group(), None);
      }
      AccessType::Block => panic!("expected mount access type"),
    }
  }

  #[test]
  fn missing_access_mode_is_rejected() {
    let status = VolumeCapability::try_from(proto::VolumeCapability {
      access_mode: None,
      access_type: Some(proto::volume_capability::AccessType::Block(
        proto::volume_capability::BlockVolume {},
      )),
    })
    .unwrap_err();

    assert_eq!(status.code(), tonic::Code::InvalidArgument);
  }

  #[test]
  fn unknown_mode_maps_to_unknown() {
    let mode = AccessMode::from(proto::volume_capability::AccessMode { mode: 42 });
    assert_eq!(mode, AccessMode::Unknown);
  }
}
