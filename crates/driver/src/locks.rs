//! Keyed lock table serializing operations on the same volume and target.
//!
//! Locks are created on first use and removed once no holder or waiter
//! references them, so the table only ever contains keys with an operation
//! in flight.

use std::{
  collections::HashMap,
  fmt,
  path::{Path, PathBuf},
  sync::{Arc, Mutex, MutexGuard, PoisonError},
  time::Instant,
};
use thiserror::Error;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Eq, Clone, PartialEq, Debug, Hash)]
pub struct VolumeKey {
  volume_id: String,
  target_path: PathBuf,
}

impl VolumeKey {
  pub fn new(volume_id: impl Into<String>, target_path: impl Into<PathBuf>) -> Self {
    VolumeKey {
      volume_id: volume_id.into(),
      target_path: target_path.into(),
    }
  }

  #[inline]
  pub fn volume_id(&self) -> &str {
    &self.volume_id
  }

  #[inline]
  pub fn target_path(&self) -> &Path {
    &self.target_path
  }
}

impl fmt::Display for VolumeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} at {}", self.volume_id, self.target_path.display())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LockError {
  #[error("deadline exceeded waiting for pending operation on volume {0}")]
  Cancelled(VolumeKey),
}

struct Entry {
  lock: Arc<AsyncMutex<()>>,
  refs: usize,
}

type Table = Mutex<HashMap<VolumeKey, Entry>>;

fn lock_table(table: &Table) -> MutexGuard<'_, HashMap<VolumeKey, Entry>> {
  table.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
pub struct VolumeLocks {
  table: Arc<Table>,
}

impl VolumeLocks {
  pub fn new() -> Self {
    Self::default()
  }

  /// Waits for exclusive access to `key`.
  ///
  /// Gives up with [`LockError::Cancelled`] once `deadline` passes. Dropping
  /// the returned future abandons the wait the same way.
  pub async fn acquire(
    &self,
    key: VolumeKey,
    deadline: Option<Instant>,
  ) -> Result<VolumeLockGuard, LockError> {
    let (slot, lock) = self.slot(key);
    let lock = lock.lock_owned();

    let guard = match deadline {
      None => lock.await,
      Some(deadline) => {
        match tokio::time::timeout_at(tokio::time::Instant::from_std(deadline), lock).await {
          Ok(guard) => guard,
          Err(_) => return Err(LockError::Cancelled(slot.key.clone())),
        }
      }
    };

    Ok(VolumeLockGuard {
      _guard: guard,
      slot,
    })
  }

  /// Number of keys with a holder or waiter.
  pub fn len(&self) -> usize {
    lock_table(&self.table).len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn slot(&self, key: VolumeKey) -> (Slot, Arc<AsyncMutex<()>>) {
    let lock = {
      let mut table = lock_table(&self.table);
      let entry = table.entry(key.clone()).or_insert_with(|| Entry {
        lock: Default::default(),
        refs: 0,
      });
      entry.refs += 1;
      entry.lock.clone()
    };

    let slot = Slot {
      table: self.table.clone(),
      key,
    };
    (slot, lock)
  }
}

impl fmt::Debug for VolumeLocks {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("VolumeLocks")
      .field("keys", &self.len())
      .finish()
  }
}

/// One reference to a table entry. The last one out removes the entry.
struct Slot {
  table: Arc<Table>,
  key: VolumeKey,
}

impl Drop for Slot {
  fn drop(&mut self) {
    let mut table = lock_table(&self.table);
    let unused = match table.get_mut(&self.key) {
      Some(entry) => {
        entry.refs -= 1;
        entry.refs == 0
      }
      None => false,
    };

    if unused {
      table.remove(&self.key);
    }
  }
}

/// Exclusive access to one volume key, released on drop.
pub struct VolumeLockGuard {
  // Dropped before `slot`.
  _guard: OwnedMutexGuard<()>,
  slot: Slot,
}

impl VolumeLockGuard {
  #[inline]
  pub fn key(&self) -> &VolumeKey {
    &self.slot.key
  }
}

impl fmt::Debug for VolumeLockGuard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("VolumeLockGuard").field(self.key()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  fn key(volume_id: &str) -> VolumeKey {
    VolumeKey::new(volume_id, format!("/mnt/{}", volume_id))
  }

  #[tokio::test]
  async fn entries_are_removed_when_released() {
    let locks = VolumeLocks::new();
    let guard = locks.acquire(key("vol-1"), None).await.unwrap();
    assert_eq!(locks.len(), 1);
    assert_eq!(guard.key().volume_id(), "vol-1");

    drop(guard);
    assert!(locks.is_empty());
  }

  #[tokio::test]
  async fn distinct_keys_do_not_block() {
    let locks = VolumeLocks::new();
    let _a = locks.acquire(key("vol-1"), None).await.unwrap();
    let deadline = Instant::now() + Duration::from_millis(100);
    let _b = locks.acquire(key("vol-2"), Some(deadline)).await.unwrap();
    assert_eq!(locks.len(), 2);
  }

  #[tokio::test]
  async fn same_target_with_other_volume_is_a_distinct_key() {
    let locks = VolumeLocks::new();
    let _a = locks
      .acquire(VolumeKey::new("vol-1", "/mnt/shared"), None)
      .await
      .unwrap();
    let deadline = Instant::now() + Duration::from_millis(100);
    assert!(locks
      .acquire(VolumeKey::new("vol-2", "/mnt/shared"), Some(deadline))
      .await
      .is_ok());
  }

  #[tokio::test]
  async fn waiting_past_the_deadline_is_cancelled() {
    let locks = VolumeLocks::new();
    let held = locks.acquire(key("vol-1"), None).await.unwrap();

    let deadline = Instant::now() + Duration::from_millis(20);
    let err = locks.acquire(key("vol-1"), Some(deadline)).await.unwrap_err();
    assert_eq!(err, LockError::Cancelled(key("vol-1")));
    assert_eq!(locks.len(), 1);

    drop(held);
    assert!(locks.is_empty());
  }

  #[tokio::test]
  async fn abandoned_waits_leave_no_entry() {
    let locks = VolumeLocks::new();
    let held = locks.acquire(key("vol-1"), None).await.unwrap();

    let waiter = tokio::time::timeout(
      Duration::from_millis(20),
      locks.acquire(key("vol-1"), None),
    )
    .await;
    assert!(waiter.is_err());

    drop(held);
    assert!(locks.is_empty());
  }

  #[tokio::test]
  async fn waiters_are_served_in_turn() {
    let locks = Arc::new(VolumeLocks::new());
    let held = locks.acquire(key("vol-1"), None).await.unwrap();

    let waiter = {
      let locks = locks.clone();
      tokio::spawn(async move {
        let _guard = locks.acquire(key("vol-1"), None).await.unwrap();
      })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!waiter.is_finished());

    drop(held);
    waiter.await.unwrap();
    assert!(locks.is_empty());
  }
}
