//! gRPC server lifecycle.
//!
//! `Created -> Listening -> Stopping -> Stopped`. A graceful stop lets
//! accepted calls finish while no new connections are taken. A forced stop
//! drops every connection immediately.

use crate::endpoint::{Endpoint, EndpointError};
use csi_proto::{identity_server, node_server, IdentityService, NodeService};
use futures::{Stream, StreamExt};
use std::{
  future::Future,
  io,
  path::PathBuf,
  pin::Pin,
  sync::{Arc, Mutex, MutexGuard, PoisonError},
  task::{Context, Poll},
};
use thiserror::Error;
use tokio::{
  io::{AsyncRead, AsyncWrite, ReadBuf},
  net::{TcpListener, UnixListener},
};
use tokio_stream::wrappers::{TcpListenerStream, UnixListenerStream};
use tokio_util::sync::CancellationToken;
use tonic::transport::{server::Connected, server::Router, Server};
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
  #[error(transparent)]
  Endpoint(#[from] EndpointError),

  #[error("failed to remove stale socket {}: {source}", .path.display())]
  RemoveStaleSocket {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to listen on {endpoint}: {source}")]
  Bind {
    endpoint: Endpoint,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Transport(#[from] tonic::transport::Error),

  #[error("server has already been started")]
  AlreadyStarted,

  #[error("server was forced to stop, in-flight calls were aborted")]
  ForceStopped,
}

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash)]
pub enum ServerState {
  Created,
  Listening,
  Stopping,
  Stopped,
}

pub struct GrpcServer<I, N> {
  endpoint: String,
  identity: Option<Arc<I>>,
  node: Option<Arc<N>>,
  graceful: CancellationToken,
  force: CancellationToken,
  state: Mutex<ServerState>,
}

impl<I: IdentityService, N: NodeService> GrpcServer<I, N> {
  pub fn new(endpoint: impl Into<String>, identity: Option<Arc<I>>, node: Option<Arc<N>>) -> Self {
    GrpcServer {
      endpoint: endpoint.into(),
      identity,
      node,
      graceful: CancellationToken::new(),
      force: CancellationToken::new(),
      state: Mutex::new(ServerState::Created),
    }
  }

  pub fn state(&self) -> ServerState {
    *self.lock_state()
  }

  /// Binds the endpoint and serves until stopped.
  ///
  /// The server counts as listening from the moment this is called, so a
  /// stop issued while binding ends it right after. Fails without serving on
  /// a malformed endpoint, a stale socket that cannot be removed or an
  /// address that cannot be bound. Returns [`ServerError::ForceStopped`]
  /// after [`GrpcServer::force_stop`], `Ok` only after a graceful stop.
  pub async fn start(&self) -> Result<(), ServerError> {
    {
      let mut state = self.lock_state();
      if *state != ServerState::Created {
        return Err(ServerError::AlreadyStarted);
      }
      *state = ServerState::Listening;
    }

    let result = self.listen_and_serve().await;
    self.set_state(ServerState::Stopped);
    result
  }

  /// Stops accepting connections and waits for in-flight calls.
  /// Does nothing unless the server is listening.
  pub fn stop(&self) {
    let mut state = self.lock_state();
    if *state == ServerState::Listening {
      info!(endpoint = %self.endpoint, "stopping gRPC server");
      *state = ServerState::Stopping;
      self.graceful.cancel();
    }
  }

  /// Drops all connections, aborting in-flight calls.
  /// Does nothing unless the server is listening or stopping.
  pub fn force_stop(&self) {
    let mut state = self.lock_state();
    if let ServerState::Listening | ServerState::Stopping = *state {
      warn!(endpoint = %self.endpoint, "forcing gRPC server to stop");
      *state = ServerState::Stopping;
      self.graceful.cancel();
      self.force.cancel();
    }
  }

  async fn listen_and_serve(&self) -> Result<(), ServerError> {
    let endpoint = Endpoint::parse(&self.endpoint)?;

    let mut builder = Server::builder();
    let router = builder
      .add_optional_service(self.identity.clone().map(identity_server))
      .add_optional_service(self.node.clone().map(node_server));

    match endpoint.socket_path() {
      Some(path) => {
        remove_stale_socket(&path).await?;

        let listener = UnixListener::bind(&path).map_err(|source| ServerError::Bind {
          endpoint: endpoint.clone(),
          source,
        })?;
        info!(%endpoint, "listening for connections");

        let result = self.serve(router, UnixListenerStream::new(listener)).await;
        if let Err(e) = tokio::fs::remove_file(&path).await {
          if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "failed to remove socket");
          }
        }
        result
      }

      None => {
        let listener = TcpListener::bind(endpoint.address())
          .await
          .map_err(|source| ServerError::Bind {
            endpoint: endpoint.clone(),
            source,
          })?;
        info!(%endpoint, "listening for connections");

        self.serve(router, TcpListenerStream::new(listener)).await
      }
    }
  }

  async fn serve<S, IO, IE>(&self, router: Router, incoming: S) -> Result<(), ServerError>
  where
    S: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IO::ConnectInfo: Clone + Send + Sync + 'static,
    IE: Into<Box<dyn std::error::Error + Send + Sync>>,
  {
    let force = self.force.clone();
    let incoming = incoming.map(move |io| io.map(|io| ForceClose::new(io, force.clone())));
    let graceful = self.graceful.clone();
    let serve =
      router.serve_with_incoming_shutdown(incoming, async move { graceful.cancelled().await });

    tokio::select! {
      biased;

      _ = self.force.cancelled() => {
        warn!(endpoint = %self.endpoint, "gRPC server stopped, in-flight calls aborted");
        Err(ServerError::ForceStopped)
      }
      result = serve => {
        result?;
        if self.force.is_cancelled() {
          return Err(ServerError::ForceStopped);
        }
        info!(endpoint = %self.endpoint, "gRPC server stopped");
        Ok(())
      }
    }
  }

  fn set_state(&self, state: ServerState) {
    *self.lock_state() = state;
  }

  fn lock_state(&self) -> MutexGuard<'_, ServerState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

/// Connection that fails every read and write once the server is forced to
/// stop. Connections outlive the accept loop, so this is what tears them down.
struct ForceClose<IO> {
  inner: IO,
  closed: Pin<Box<dyn Future<Output = ()> + Send>>,
}

impl<IO> ForceClose<IO> {
  fn new(inner: IO, force: CancellationToken) -> Self {
    ForceClose {
      inner,
      closed: Box::pin(async move { force.cancelled().await }),
    }
  }

  fn poll_closed(&mut self, cx: &mut Context<'_>) -> Option<io::Error> {
    match self.closed.as_mut().poll(cx) {
      Poll::Ready(()) => Some(io::Error::new(
        io::ErrorKind::ConnectionAborted,
        "server was forced to stop",
      )),
      Poll::Pending => None,
    }
  }
}

impl<IO: Connected> Connected for ForceClose<IO> {
  type ConnectInfo = IO::ConnectInfo;

  fn connect_info(&self) -> Self::ConnectInfo {
    self.inner.connect_info()
  }
}

impl<IO: AsyncRead + Unpin> AsyncRead for ForceClose<IO> {
  fn poll_read(
    self: Pin<&mut Self>,
    cx: &mut Context<'_>,
    buf: &mut ReadBuf<'_>,
  ) -> Poll<io::Result<()>> {
    let this = self.get_mut();
    if let Some(e) = this.poll_closed(cx) {
      return Poll::Ready(Err(e));
    }
    Pin::new(&mut this.inner).poll_read(cx, buf)
  }
}

impl<IO: AsyncWrite + Unpin> AsyncWrite for ForceClose<IO> {
  fn poll_write(
    self: Pin<&mut Self>,
    cx: &mut Context<'_>,
    buf: &[u8],
  ) -> Poll<io::Result<usize>> {
    let this = self.get_mut();
    if let Some(e) = this.poll_closed(cx) {
      return Poll::Ready(Err(e));
    }
    Pin::new(&mut this.inner).poll_write(cx, buf)
  }

  fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
    Pin::new(&mut self.get_mut().inner).poll_flush(cx)
  }

  fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
    Pin::new(&mut self.get_mut().inner).poll_shutdown(cx)
  }
}

async fn remove_stale_socket(path: &std::path::Path) -> Result<(), ServerError> {
  match tokio::fs::remove_file(path).await {
    Ok(()) => {
      info!(path = %path.display(), "removed stale socket");
      Ok(())
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(source) => Err(ServerError::RemoveStaleSocket {
      path: path.to_owned(),
      source,
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{identity::LvmIdentity, node::LvmNode};

  fn server(endpoint: &str) -> GrpcServer<LvmIdentity, LvmNode> {
    GrpcServer::new(endpoint, None, None)
  }

  #[test]
  fn stop_before_start_is_a_no_op() {
    let server = server("unix://tmp/never-started.sock");
    server.stop();
    server.force_stop();
    assert_eq!(server.state(), ServerState::Created);
  }

  #[tokio::test]
  async fn invalid_endpoint_fails_start() {
    let server = server("foo://bar");
    match server.start().await {
      Err(ServerError::Endpoint(EndpointError::InvalidEndpoint(e))) => assert_eq!(e, "foo://bar"),
      other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(server.state(), ServerState::Stopped);
  }

  async fn wait_for_state(server: &GrpcServer<LvmIdentity, LvmNode>, state: ServerState) {
    while server.state() != state {
      tokio::task::yield_now().await;
    }
  }

  #[tokio::test]
  async fn graceful_stop_is_ok() {
    let server = Arc::new(server("tcp://127.0.0.1:0"));
    let task = {
      let server = server.clone();
      tokio::spawn(async move { server.start().await })
    };

    wait_for_state(&server, ServerState::Listening).await;
    server.stop();
    assert!(task.await.unwrap().is_ok());
    assert_eq!(server.state(), ServerState::Stopped);
  }

  #[tokio::test]
  async fn force_stop_is_reported() {
    let server = Arc::new(server("tcp://127.0.0.1:0"));
    let task = {
      let server = server.clone();
      tokio::spawn(async move { server.start().await })
    };

    wait_for_state(&server, ServerState::Listening).await;
    server.stop();
    server.force_stop();
    assert!(matches!(
      task.await.unwrap(),
      Err(ServerError::ForceStopped)
    ));
    assert_eq!(server.state(), ServerState::Stopped);
  }

  #[tokio::test]
  async fn start_runs_once() {
    let server = server("unix://");
    assert!(server.start().await.is_err());
    assert!(matches!(server.start().await, Err(ServerError::AlreadyStarted)));
  }
}
