use std::collections::BTreeSet;

use crate::proto;

pub type NodeCapabilities = BTreeSet<NodeCapability>;

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum NodeCapability {
  /// Placeholder advertised by node plugins that have no RPC capability yet.
  Unknown,
  StageUnstageVolume,
  GetVolumeStats,
  ExpandVolume,
  VolumeCondition,
  SingleNodeMultiWriter,
  VolumeMountGroup,
}

use proto::node_service_capability::rpc::Type;
impl From<NodeCapability> for Type {
  fn from(value: NodeCapability) -> Self {
    match value {
      NodeCapability::Unknown => Type::Unknown,
      NodeCapability::StageUnstageVolume => Type::StageUnstageVolume,
      NodeCapability::GetVolumeStats => Type::GetVolumeStats,
      NodeCapability::ExpandVolume => Type::ExpandVolume,
      NodeCapability::VolumeCondition => Type::VolumeCondition,
      NodeCapability::SingleNodeMultiWriter => Type::SingleNodeMultiWriter,
      NodeCapability::VolumeMountGroup => Type::VolumeMountGroup,
    }
  }
}

impl From<NodeCapability> for proto::NodeServiceCapability {
  fn from(value: NodeCapability) -> Self {
    proto::NodeServiceCapability {
      r#type: Some(proto::node_service_capability::Type::Rpc(
        proto::node_service_capability::Rpc {
          r#type: Type::from(value) as i32,
        },
      )),
    }
  }
}

pub(crate) fn get_capabilities(value: &NodeCapabilities) -> proto::NodeGetCapabilitiesResponse {
  let capabilities = value.iter().copied().map(Into::into).collect();

  proto::NodeGetCapabilitiesResponse { capabilities }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rpc_types(response: &proto::NodeGetCapabilitiesResponse) -> Vec<i32> {
    response
      .capabilities
      .iter()
      .map(|c| match &c.r#type {
        Some(proto::node_service_capability::Type::Rpc(rpc)) => rpc.r#type,
        None => panic!("capability without type"),
      })
      .collect()
  }

  #[test]
  fn advertises_exactly_the_configured_set() {
    let caps: NodeCapabilities = vec![
      NodeCapability::ExpandVolume,
      NodeCapability::StageUnstageVolume,
      NodeCapability::ExpandVolume,
    ]
    .into_iter()
    .collect();

    let response = get_capabilities(&caps);
    assert_eq!(
      rpc_types(&response),
      vec![Type::StageUnstageVolume as i32, Type::ExpandVolume as i32]
    );
  }

  #[test]
  fn empty_set_advertises_nothing() {
    let response = get_capabilities(&NodeCapabilities::new());
    assert!(response.capabilities.is_empty());
  }
}
