use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StatusError(pub String);

/// Answers whether the driver can serve requests.
///
/// `Ok(true)` when fully operational, `Ok(false)` while still initializing
/// and an error when the check itself failed.
#[async_trait]
pub trait Readiness: Send + Sync + 'static {
  async fn ready(&self) -> Result<bool, StatusError>;
}

#[async_trait]
impl<F> Readiness for F
where
  F: Fn() -> Result<bool, StatusError> + Send + Sync + 'static,
{
  async fn ready(&self) -> Result<bool, StatusError> {
    self()
  }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StatusService;

impl StatusService {
  pub fn new() -> Self {
    StatusService
  }
}

#[async_trait]
impl Readiness for StatusService {
  // Nothing to wait for until a volume backend is wired in.
  async fn ready(&self) -> Result<bool, StatusError> {
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn status_service_is_ready() {
    assert_eq!(StatusService::new().ready().await, Ok(true));
  }

  #[tokio::test]
  async fn closures_are_readiness_checks() {
    let check = || -> Result<bool, StatusError> {
      Err(StatusError("vg0 not found".into()))
    };
    assert_eq!(
      check.ready().await,
      Err(StatusError("vg0 not found".into()))
    );
  }
}
