mod capabilities;
mod publish_volume;
mod unpublish_volume;

use crate::{
  logging::{intercept, Method},
  proto,
  utils::{grpc_timeout, Record},
};
use async_trait::async_trait;
use std::{
  convert::TryFrom,
  num::NonZeroU64,
  sync::Arc,
  time::{Duration, Instant},
};
use tracing::instrument;

pub use crate::volume::*;
pub use capabilities::*;
pub use publish_volume::*;
pub use unpublish_volume::*;

#[async_trait]
pub trait NodeService: Send + Sync + 'static {
  /// The identifier of the node as understood by the SP.
  /// This field MUST contain enough information to uniquely identify
  /// this specific node vs all other nodes supported by this plugin.
  fn node_id(&self) -> &str;

  /// Specifies where (regions, zones, racks, etc.) the node is
  /// accessible from.
  #[inline]
  fn accessible_topology(&self) -> Option<&Topology> {
    None
  }

  /// Maximum number of volumes that controller can publish to the node.
  #[inline]
  fn max_volumes_per_node(&self) -> Option<NonZeroU64> {
    None
  }

  /// Capabilities advertised verbatim on every `NodeGetCapabilities`.
  fn capabilities(&self) -> &NodeCapabilities;

  /// Make the volume available at `target_path`.
  ///
  /// This operation MUST be idempotent. If the volume corresponding to
  /// the `volume_id` has already been published at the specified
  /// `target_path`, and is compatible with the specified
  /// `volume_capability` and `readonly` flag, the Plugin MUST reply 0 OK.
  #[allow(unused_variables)]
  async fn node_publish_volume(
    &self,
    request: NodePublishVolumeRequest,
  ) -> Result<(), NodePublishVolumeError> {
    unsupported!("NodePublishVolume")
  }

  /// Undo the work by the corresponding `NodePublishVolume`.
  ///
  /// This operation MUST be idempotent. If this RPC failed, or the CO
  /// does not know if it failed or not, it can choose to call
  /// `NodeUnpublishVolume` again.
  #[allow(unused_variables)]
  async fn node_unpublish_volume(
    &self,
    request: NodeUnpublishVolumeRequest,
  ) -> Result<(), NodeUnpublishVolumeError> {
    unsupported!("NodeUnpublishVolume")
  }
}

/// Binds a [`NodeService`] to the generated `csi.v1.Node` server.
pub fn node_server<T: NodeService>(
  service: Arc<T>,
) -> proto::node_server::NodeServer<impl proto::node_server::Node> {
  proto::node_server::NodeServer::new(Node(service))
}

struct Node<T: NodeService>(Arc<T>);

pub(crate) fn get_info(s: &impl NodeService) -> proto::NodeGetInfoResponse {
  let node_id = s.node_id().record_field("node_id").into();
  let max_volumes_per_node = s
    .max_volumes_per_node()
    .map(|v| v.get() as i64)
    .unwrap_or_default();
  let accessible_topology = s.accessible_topology().map(|segments| proto::Topology {
    segments: segments.clone(),
  });

  proto::NodeGetInfoResponse {
    node_id,
    max_volumes_per_node,
    accessible_topology,
  }
}

#[inline]
fn deadline_after(timeout: Option<Duration>) -> Option<Instant> {
  timeout.and_then(|t| Instant::now().checked_add(t))
}

async fn not_implemented<R>(method: Method) -> Result<R, tonic::Status> {
  unsupported!(method.name())
}

#[async_trait]
impl<T: NodeService> proto::node_server::Node for Node<T> {
  #[instrument(name = "node.node_stage_volume", skip(self, request))]
  async fn node_stage_volume(
    &self,
    request: tonic::Request<proto::NodeStageVolumeRequest>,
  ) -> Result<tonic::Response<proto::NodeStageVolumeResponse>, tonic::Status> {
    intercept(Method::NodeStageVolume, request.into_inner(), |_| {
      not_implemented(Method::NodeStageVolume)
    })
    .await
  }

  #[instrument(name = "node.node_unstage_volume", skip(self, request))]
  async fn node_unstage_volume(
    &self,
    request: tonic::Request<proto::NodeUnstageVolumeRequest>,
  ) -> Result<tonic::Response<proto::NodeUnstageVolumeResponse>, tonic::Status> {
    intercept(Method::NodeUnstageVolume, request.into_inner(), |_| {
      not_implemented(Method::NodeUnstageVolume)
    })
    .await
  }

  #[instrument(
    name = "node.node_publish_volume",
    skip(self, request),
    fields(volume_id, target_path)
  )]
  async fn node_publish_volume(
    &self,
    request: tonic::Request<proto::NodePublishVolumeRequest>,
  ) -> Result<tonic::Response<proto::NodePublishVolumeResponse>, tonic::Status> {
    let deadline = deadline_after(grpc_timeout(request.metadata()));
    intercept(
      Method::NodePublishVolume,
      request.into_inner(),
      |request| async move {
        let mut request = NodePublishVolumeRequest::try_from(request)?;
        if let Some(deadline) = deadline {
          request = request.with_deadline(deadline);
        }

        request.volume_id().record_field("volume_id");
        request.target_path().record_field("target_path");
        self.0.node_publish_volume(request).await?;
        Ok::<_, tonic::Status>(proto::NodePublishVolumeResponse {})
      },
    )
    .await
  }

  #[instrument(
    name = "node.node_unpublish_volume",
    skip(self, request),
    fields(volume_id, target_path)
  )]
  async fn node_unpublish_volume(
    &self,
    request: tonic::Request<proto::NodeUnpublishVolumeRequest>,
  ) -> Result<tonic::Response<proto::NodeUnpublishVolumeResponse>, tonic::Status> {
    let deadline = deadline_after(grpc_timeout(request.metadata()));
    intercept(
      Method::NodeUnpublishVolume,
      request.into_inner(),
      |request| async move {
        let mut request = NodeUnpublishVolumeRequest::try_from(request)?;
        if let Some(deadline) = deadline {
          request = request.with_deadline(deadline);
        }

        request.volume_id().record_field("volume_id");
        request.target_path().record_field("target_path");
        self.0.node_unpublish_volume(request).await?;
        Ok::<_, tonic::Status>(proto::NodeUnpublishVolumeResponse {})
      },
    )
    .await
  }

  #[instrument(name = "node.node_get_volume_stats", skip(self, request))]
  async fn node_get_volume_stats(
    &self,
    request: tonic::Request<proto::NodeGetVolumeStatsRequest>,
  ) -> Result<tonic::Response<proto::NodeGetVolumeStatsResponse>, tonic::Status> {
    intercept(Method::NodeGetVolumeStats, request.into_inner(), |_| {
      not_implemented(Method::NodeGetVolumeStats)
    })
    .await
  }

  #[instrument(name = "node.node_expand_volume", skip(self, request))]
  async fn node_expand_volume(
    &self,
    request: tonic::Request<proto::NodeExpandVolumeRequest>,
  ) -> Result<tonic::Response<proto::NodeExpandVolumeResponse>, tonic::Status> {
    intercept(Method::NodeExpandVolume, request.into_inner(), |_| {
      not_implemented(Method::NodeExpandVolume)
    })
    .await
  }

  #[instrument(name = "node.node_get_capabilities", skip(self, request))]
  async fn node_get_capabilities(
    &self,
    request: tonic::Request<proto::NodeGetCapabilitiesRequest>,
  ) -> Result<tonic::Response<proto::NodeGetCapabilitiesResponse>, tonic::Status> {
    intercept(
      Method::NodeGetCapabilities,
      request.into_inner(),
      |_| async move {
        Ok::<_, tonic::Status>(capabilities::get_capabilities(self.0.capabilities()))
      },
    )
    .await
  }

  #[instrument(name = "node.node_get_info", skip(self, request), fields(node_id))]
  async fn node_get_info(
    &self,
    request: tonic::Request<proto::NodeGetInfoRequest>,
  ) -> Result<tonic::Response<proto::NodeGetInfoResponse>, tonic::Status> {
    intercept(Method::NodeGetInfo, request.into_inner(), |_| async move {
      Ok::<_, tonic::Status>(get_info(&*self.0))
    })
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proto::node_server::Node as _;

  struct Bare {
    capabilities: NodeCapabilities,
  }

  impl NodeService for Bare {
    fn node_id(&self) -> &str {
      "node-1"
    }

    fn capabilities(&self) -> &NodeCapabilities {
      &self.capabilities
    }
  }

  fn node() -> Node<Bare> {
    Node(Arc::new(Bare {
      capabilities: vec![NodeCapability::Unknown].into_iter().collect(),
    }))
  }

  #[tokio::test]
  async fn defaults_are_unimplemented() {
    let node = node();
    let status = node
      .node_publish_volume(tonic::Request::new(proto::NodePublishVolumeRequest {
        volume_id: "vol-1".into(),
        target_path: "/mnt/vol-1".into(),
        volume_capability: Some(proto::VolumeCapability {
          access_mode: Some(proto::volume_capability::AccessMode { mode: 1 }),
          access_type: Some(proto::volume_capability::AccessType::Block(
            proto::volume_capability::BlockVolume {},
          )),
        }),
        ..Default::default()
      }))
      .await
      .unwrap_err();
    assert_eq!(status.code(), tonic::Code::Unimplemented);
    assert_eq!(status.message(), "NodePublishVolume is not yet implemented");

    let status = node
      .node_stage_volume(tonic::Request::new(proto::NodeStageVolumeRequest::default()))
      .await
      .unwrap_err();
    assert_eq!(status.code(), tonic::Code::Unimplemented);

    let status = node
      .node_expand_volume(tonic::Request::new(proto::NodeExpandVolumeRequest::default()))
      .await
      .unwrap_err();
    assert_eq!(status.code(), tonic::Code::Unimplemented);
  }

  #[tokio::test]
  async fn invalid_requests_fail_before_the_service() {
    let status = node()
      .node_unpublish_volume(tonic::Request::new(
        proto::NodeUnpublishVolumeRequest::default(),
      ))
      .await
      .unwrap_err();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
  }

  #[tokio::test]
  async fn get_info_without_topology() {
    let response = node()
      .node_get_info(tonic::Request::new(proto::NodeGetInfoRequest {}))
      .await
      .unwrap()
      .into_inner();

    assert_eq!(response.node_id, "node-1");
    assert_eq!(response.max_volumes_per_node, 0);
    assert!(response.accessible_topology.is_none());
  }
}
