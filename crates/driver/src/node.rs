use crate::{
  backend::{MountContext, VolumeBackend},
  locks::{LockError, VolumeKey, VolumeLocks},
};
use async_trait::async_trait;
use csi_proto::{
  logging::Method,
  node::{
    NodeCapabilities, NodeCapability, NodePublishVolumeError, NodePublishVolumeRequest,
    NodeUnpublishVolumeError, NodeUnpublishVolumeRequest, Topology,
  },
  NodeService,
};
use std::{
  collections::HashMap,
  fmt,
  path::Path,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};

/// Node-local state of one volume at one target path.
#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash)]
pub enum VolumeState {
  Idle,
  Publishing,
  Published,
  Unpublishing,
}

impl Default for VolumeState {
  fn default() -> Self {
    VolumeState::Idle
  }
}

type Volumes = Mutex<HashMap<VolumeKey, VolumeState>>;

fn lock_volumes(volumes: &Volumes) -> MutexGuard<'_, HashMap<VolumeKey, VolumeState>> {
  volumes.lock().unwrap_or_else(PoisonError::into_inner)
}

fn set_state(volumes: &Volumes, key: &VolumeKey, state: VolumeState) {
  let mut volumes = lock_volumes(volumes);
  match state {
    VolumeState::Idle => {
      volumes.remove(key);
    }
    state => {
      volumes.insert(key.clone(), state);
    }
  }
}

/// An in-flight state change. Rolls back to the previous state unless
/// committed.
struct Transition<'a> {
  volumes: &'a Volumes,
  key: &'a VolumeKey,
  previous: VolumeState,
  committed: bool,
}

impl<'a> Transition<'a> {
  fn begin(volumes: &'a Volumes, key: &'a VolumeKey, pending: VolumeState) -> Self {
    let previous = {
      let mut volumes = lock_volumes(volumes);
      let previous = volumes.get(key).copied().unwrap_or_default();
      volumes.insert(key.clone(), pending);
      previous
    };

    Transition {
      volumes,
      key,
      previous,
      committed: false,
    }
  }

  fn commit(mut self, state: VolumeState) {
    self.committed = true;
    set_state(self.volumes, self.key, state);
  }
}

impl Drop for Transition<'_> {
  fn drop(&mut self) {
    if !self.committed {
      set_state(self.volumes, self.key, self.previous);
    }
  }
}

/// The `csi.v1.Node` service of the LVM driver.
///
/// Publish and unpublish are serialized per volume and target path. Without a
/// [`VolumeBackend`] both answer `Unimplemented`.
pub struct LvmNode {
  node_id: String,
  topology: Topology,
  capabilities: NodeCapabilities,
  backend: Option<Arc<dyn VolumeBackend>>,
  locks: VolumeLocks,
  volumes: Volumes,
}

impl LvmNode {
  pub fn new(driver_name: &str, node_id: impl Into<String>) -> Self {
    let node_id = node_id.into();
    let mut topology = Topology::new();
    topology.insert(format!("topology.{}/node", driver_name), node_id.clone());

    LvmNode {
      node_id,
      topology,
      capabilities: vec![NodeCapability::Unknown].into_iter().collect(),
      backend: None,
      locks: VolumeLocks::new(),
      volumes: Mutex::new(HashMap::new()),
    }
  }

  pub fn with_backend(mut self, backend: Arc<dyn VolumeBackend>) -> Self {
    self.backend = Some(backend);
    self
  }

  pub fn volume_state(&self, volume_id: &str, target_path: impl AsRef<Path>) -> VolumeState {
    let key = VolumeKey::new(volume_id, target_path.as_ref());
    lock_volumes(&self.volumes)
      .get(&key)
      .copied()
      .unwrap_or_default()
  }
}

impl fmt::Debug for LvmNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LvmNode")
      .field("node_id", &self.node_id)
      .field("topology", &self.topology)
      .field("capabilities", &self.capabilities)
      .field("backend", &self.backend.is_some())
      .field("locks", &self.locks)
      .finish()
  }
}

fn no_backend(method: Method) -> tonic::Status {
  tonic::Status::unimplemented(format!("{} is not yet implemented", method.name()))
}

#[async_trait]
impl NodeService for LvmNode {
  fn node_id(&self) -> &str {
    &self.node_id
  }

  fn accessible_topology(&self) -> Option<&Topology> {
    Some(&self.topology)
  }

  fn capabilities(&self) -> &NodeCapabilities {
    &self.capabilities
  }

  async fn node_publish_volume(
    &self,
    request: NodePublishVolumeRequest,
  ) -> Result<(), NodePublishVolumeError> {
    let backend = match &self.backend {
      Some(backend) => backend,
      None => return Err(no_backend(Method::NodePublishVolume).into()),
    };

    let key = VolumeKey::new(request.volume_id(), request.target_path());
    let _lock = self
      .locks
      .acquire(key.clone(), request.deadline())
      .await
      .map_err(|LockError::Cancelled(key)| NodePublishVolumeError::Cancelled(key.to_string()))?;

    let transition = Transition::begin(&self.volumes, &key, VolumeState::Publishing);
    debug!(previous = ?transition.previous, "publishing volume");

    let capability = request.volume_capability();
    let context = MountContext {
      volume_capability: capability,
      // Reader-only access modes imply a readonly publish.
      readonly: request.readonly() || capability.access_mode().is_readonly(),
      staging_target_path: request.staging_target_path(),
      publish_context: request.publish_context(),
      volume_context: request.volume_context(),
      secrets: request.secrets(),
    };
    backend
      .mount(request.volume_id(), request.target_path(), context)
      .await?;

    transition.commit(VolumeState::Published);
    info!("volume published");
    Ok(())
  }

  async fn node_unpublish_volume(
    &self,
    request: NodeUnpublishVolumeRequest,
  ) -> Result<(), NodeUnpublishVolumeError> {
    let backend = match &self.backend {
      Some(backend) => backend,
      None => return Err(no_backend(Method::NodeUnpublishVolume).into()),
    };

    let key = VolumeKey::new(request.volume_id(), request.target_path());
    let _lock = self
      .locks
      .acquire(key.clone(), request.deadline())
      .await
      .map_err(|LockError::Cancelled(key)| NodeUnpublishVolumeError::Cancelled(key.to_string()))?;

    // The backend is asked even when nothing is recorded here; the mount may
    // predate this process.
    let transition = Transition::begin(&self.volumes, &key, VolumeState::Unpublishing);
    debug!(previous = ?transition.previous, "unpublishing volume");

    backend
      .unmount(request.volume_id(), request.target_path())
      .await?;

    transition.commit(VolumeState::Idle);
    info!("volume unpublished");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::backend::BackendError;
  use csi_proto::proto;
  use std::{
    convert::TryFrom,
    time::{Duration, Instant},
  };
  use tokio::sync::{Barrier, Notify};
  use tonic::Code;

  #[derive(Default)]
  struct Recorder {
    events: Mutex<Vec<String>>,
    delay: Option<Duration>,
    barrier: Option<Barrier>,
    gate: Option<Notify>,
    entered: Notify,
    fail_mount: bool,
    fail_unmount: bool,
  }

  impl Recorder {
    fn record(&self, event: String) {
      self.events.lock().unwrap().push(event);
    }

    fn events(&self) -> Vec<String> {
      self.events.lock().unwrap().clone()
    }

    async fn hold(&self) {
      self.entered.notify_one();
      if let Some(barrier) = &self.barrier {
        barrier.wait().await;
      }
      if let Some(gate) = &self.gate {
        gate.notified().await;
      }
      if let Some(delay) = self.delay {
        tokio::time::sleep(delay).await;
      }
    }
  }

  #[async_trait]
  impl VolumeBackend for Recorder {
    async fn mount(
      &self,
      volume_id: &str,
      _target_path: &Path,
      _context: MountContext<'_>,
    ) -> Result<(), BackendError> {
      self.record(format!("enter {}", volume_id));
      self.hold().await;
      self.record(format!("exit {}", volume_id));

      if self.fail_mount {
        return Err(BackendError::Other("mkfs.xfs failed".into()));
      }
      Ok(())
    }

    async fn unmount(&self, volume_id: &str, _target_path: &Path) -> Result<(), BackendError> {
      self.record(format!("unmount {}", volume_id));
      if self.fail_unmount {
        return Err(BackendError::Other("target is busy".into()));
      }
      Ok(())
    }
  }

  fn publish(volume_id: &str) -> NodePublishVolumeRequest {
    NodePublishVolumeRequest::try_from(proto::NodePublishVolumeRequest {
      volume_id: volume_id.into(),
      target_path: format!("/mnt/{}", volume_id),
      volume_capability: Some(proto::VolumeCapability {
        access_mode: Some(proto::volume_capability::AccessMode {
          mode: proto::volume_capability::access_mode::Mode::SingleNodeWriter as i32,
        }),
        access_type: Some(proto::volume_capability::AccessType::Mount(
          proto::volume_capability::MountVolume {
            fs_type: "xfs".into(),
            ..Default::default()
          },
        )),
      }),
      ..Default::default()
    })
    .unwrap()
  }

  fn unpublish(volume_id: &str) -> NodeUnpublishVolumeRequest {
    NodeUnpublishVolumeRequest::try_from(proto::NodeUnpublishVolumeRequest {
      volume_id: volume_id.into(),
      target_path: format!("/mnt/{}", volume_id),
    })
    .unwrap()
  }

  fn node(backend: Recorder) -> (Arc<LvmNode>, Arc<Recorder>) {
    let backend = Arc::new(backend);
    let node = LvmNode::new("lvm.redhat.com", "node-1").with_backend(backend.clone());
    (Arc::new(node), backend)
  }

  #[test]
  fn topology() {
    let node = LvmNode::new("foo", "bar");
    let topology = node.accessible_topology().unwrap();

    assert_eq!(node.node_id(), "bar");
    assert_eq!(topology.len(), 1);
    assert_eq!(topology["topology.foo/node"], "bar");
  }

  #[test]
  fn capabilities() {
    let node = LvmNode::new("foo", "bar");
    let capabilities: Vec<_> = node.capabilities().iter().copied().collect();
    assert_eq!(capabilities, vec![NodeCapability::Unknown]);
  }

  #[tokio::test]
  async fn without_backend_is_unimplemented() {
    let node = LvmNode::new("foo", "bar");

    let status = tonic::Status::from(node.node_publish_volume(publish("vol-1")).await.unwrap_err());
    assert_eq!(status.code(), Code::Unimplemented);
    assert_eq!(status.message(), "NodePublishVolume is not yet implemented");

    let status =
      tonic::Status::from(node.node_unpublish_volume(unpublish("vol-1")).await.unwrap_err());
    assert_eq!(status.code(), Code::Unimplemented);

    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Idle);
    assert!(node.locks.is_empty());
  }

  #[tokio::test]
  async fn publish_then_unpublish() {
    let (node, backend) = node(Recorder::default());

    node.node_publish_volume(publish("vol-1")).await.unwrap();
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Published);

    node.node_unpublish_volume(unpublish("vol-1")).await.unwrap();
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Idle);
    assert!(node.locks.is_empty());
    assert_eq!(
      backend.events(),
      vec!["enter vol-1", "exit vol-1", "unmount vol-1"]
    );
  }

  #[tokio::test]
  async fn failed_publish_returns_to_idle() {
    let (node, _) = node(Recorder {
      fail_mount: true,
      ..Default::default()
    });

    let status = tonic::Status::from(node.node_publish_volume(publish("vol-1")).await.unwrap_err());
    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("mkfs.xfs failed"));
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Idle);
  }

  #[tokio::test]
  async fn failed_unpublish_keeps_the_mount() {
    let (node, _) = node(Recorder {
      fail_unmount: true,
      ..Default::default()
    });

    node.node_publish_volume(publish("vol-1")).await.unwrap();
    let status =
      tonic::Status::from(node.node_unpublish_volume(unpublish("vol-1")).await.unwrap_err());
    assert_eq!(status.code(), Code::Internal);
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Published);
  }

  #[tokio::test]
  async fn unpublish_is_idempotent() {
    let (node, backend) = node(Recorder::default());

    node.node_unpublish_volume(unpublish("vol-1")).await.unwrap();
    node.node_unpublish_volume(unpublish("vol-1")).await.unwrap();
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Idle);
    assert_eq!(backend.events(), vec!["unmount vol-1", "unmount vol-1"]);
  }

  #[tokio::test]
  async fn distinct_volumes_publish_concurrently() {
    // Both mounts wait on the same barrier, so they only finish when running
    // at the same time.
    let (node, _) = node(Recorder {
      barrier: Some(Barrier::new(2)),
      ..Default::default()
    });

    let both = async {
      tokio::join!(
        node.node_publish_volume(publish("vol-1")),
        node.node_publish_volume(publish("vol-2")),
      )
    };
    let (a, b) = tokio::time::timeout(Duration::from_secs(5), both)
      .await
      .expect("publishes of distinct volumes blocked each other");

    a.unwrap();
    b.unwrap();
    assert_eq!(node.volume_state("vol-2", "/mnt/vol-2"), VolumeState::Published);
  }

  #[tokio::test]
  async fn same_volume_publishes_in_turn() {
    let (node, backend) = node(Recorder {
      delay: Some(Duration::from_millis(50)),
      ..Default::default()
    });

    let (a, b) = tokio::join!(
      node.node_publish_volume(publish("vol-1")),
      node.node_publish_volume(publish("vol-1")),
    );

    a.unwrap();
    b.unwrap();
    assert_eq!(
      backend.events(),
      vec!["enter vol-1", "exit vol-1", "enter vol-1", "exit vol-1"]
    );
  }

  #[tokio::test]
  async fn waiting_past_the_deadline_is_cancelled() {
    let (node, backend) = node(Recorder {
      gate: Some(Notify::new()),
      ..Default::default()
    });

    let first = {
      let node = node.clone();
      tokio::spawn(async move { node.node_publish_volume(publish("vol-1")).await })
    };
    backend.entered.notified().await;
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Publishing);

    let request = publish("vol-1").with_deadline(Instant::now() + Duration::from_millis(20));
    let status = tonic::Status::from(node.node_publish_volume(request).await.unwrap_err());
    assert_eq!(status.code(), Code::Cancelled);
    assert_eq!(backend.events(), vec!["enter vol-1"]);

    if let Some(gate) = &backend.gate {
      gate.notify_one();
    }
    first.await.unwrap().unwrap();
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Published);
    assert!(node.locks.is_empty());
  }

  #[tokio::test]
  async fn abandoned_publish_rolls_back() {
    let (node, backend) = node(Recorder {
      gate: Some(Notify::new()),
      ..Default::default()
    });

    let publishing = {
      let node = node.clone();
      tokio::spawn(async move { node.node_publish_volume(publish("vol-1")).await })
    };
    backend.entered.notified().await;

    publishing.abort();
    assert!(publishing.await.unwrap_err().is_cancelled());
    assert_eq!(node.volume_state("vol-1", "/mnt/vol-1"), VolumeState::Idle);
    assert!(node.locks.is_empty());
  }
}
