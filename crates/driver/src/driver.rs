use crate::{
  identity::LvmIdentity,
  node::LvmNode,
  server::{GrpcServer, ServerError},
  status::StatusService,
  version::{version_report, DRIVER_VERSION},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LvmDriverOptions {
  pub node_id: String,
  pub driver_name: String,
  pub endpoint: String,
}

/// The LVM CSI plugin: identity and node services on one gRPC server.
pub struct LvmDriver {
  options: LvmDriverOptions,
  server: GrpcServer<LvmIdentity, LvmNode>,
}

impl LvmDriver {
  pub fn new(options: LvmDriverOptions) -> Self {
    info!(driver = %options.driver_name, version = DRIVER_VERSION, "driver");

    let identity = LvmIdentity::new(
      options.driver_name.clone(),
      DRIVER_VERSION,
      Arc::new(StatusService::new()),
    );
    let node = LvmNode::new(&options.driver_name, options.node_id.clone());
    let server = GrpcServer::new(
      options.endpoint.clone(),
      Some(Arc::new(identity)),
      Some(Arc::new(node)),
    );

    LvmDriver { options, server }
  }

  #[inline]
  pub fn options(&self) -> &LvmDriverOptions {
    &self.options
  }

  /// Serves until [`LvmDriver::stop`] or [`LvmDriver::force_stop`].
  pub async fn run(&self) -> Result<(), ServerError> {
    match version_report(&self.options.driver_name) {
      Ok(report) => info!("version info:\n{}", report),
      Err(e) => warn!(error = %e, "failed to render version info"),
    }

    self.server.start().await
  }

  pub fn stop(&self) {
    self.server.stop();
  }

  pub fn force_stop(&self) {
    self.server.force_stop();
  }
}
