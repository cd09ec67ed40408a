use crate::proto;
use std::collections::BTreeSet;

pub type PluginCapabilities = BTreeSet<PluginCapability>;

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash, PartialOrd, Ord)]
pub enum VolumeExpansion {
  Online,
  Offline,
}

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum PluginCapability {
  /// Placeholder advertised by plugins that have no service capability yet.
  Unknown,
  ControllerService,
  VolumeAccessibilityConstraints,
  GroupControllerService,
  VolumeExpansion(VolumeExpansion),
}

impl From<PluginCapability> for proto::PluginCapability {
  fn from(value: PluginCapability) -> Self {
    use proto::plugin_capability::{service, volume_expansion, Service, Type};

    #[inline]
    fn service(ty: service::Type) -> Type {
      Type::Service(Service { r#type: ty as i32 })
    }

    let ty = match value {
      PluginCapability::Unknown => service(service::Type::Unknown),
      PluginCapability::ControllerService => service(service::Type::ControllerService),
      PluginCapability::VolumeAccessibilityConstraints => {
        service(service::Type::VolumeAccessibilityConstraints)
      }
      PluginCapability::GroupControllerService => service(service::Type::GroupControllerService),
      PluginCapability::VolumeExpansion(expansion) => {
        let ty = match expansion {
          VolumeExpansion::Online => volume_expansion::Type::Online,
          VolumeExpansion::Offline => volume_expansion::Type::Offline,
        };

        Type::VolumeExpansion(proto::plugin_capability::VolumeExpansion { r#type: ty as i32 })
      }
    };

    proto::PluginCapability { r#type: Some(ty) }
  }
}

pub(crate) fn get_capabilities(
  capabilities: &PluginCapabilities,
) -> proto::GetPluginCapabilitiesResponse {
  proto::GetPluginCapabilitiesResponse {
    capabilities: capabilities.iter().copied().map(Into::into).collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proto::plugin_capability::{service, volume_expansion, Type};

  #[test]
  fn unknown_is_advertised_as_service() {
    let caps: PluginCapabilities = vec![PluginCapability::Unknown].into_iter().collect();
    let response = get_capabilities(&caps);

    assert_eq!(response.capabilities.len(), 1);
    match &response.capabilities[0].r#type {
      Some(Type::Service(s)) => assert_eq!(s.r#type, service::Type::Unknown as i32),
      other => panic!("unexpected capability {:?}", other),
    }
  }

  #[test]
  fn duplicates_collapse() {
    let caps: PluginCapabilities = vec![
      PluginCapability::VolumeExpansion(VolumeExpansion::Online),
      PluginCapability::ControllerService,
      PluginCapability::VolumeExpansion(VolumeExpansion::Online),
    ]
    .into_iter()
    .collect();

    let response = get_capabilities(&caps);
    assert_eq!(response.capabilities.len(), 2);
    assert!(response.capabilities.iter().any(|c| matches!(
      &c.r#type,
      Some(Type::VolumeExpansion(e)) if e.r#type == volume_expansion::Type::Online as i32
    )));
  }
}
