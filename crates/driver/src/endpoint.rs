use std::{fmt, path::PathBuf, str::FromStr};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "unix://tmp/csi.sock";

#[derive(Eq, Clone, Copy, PartialEq, Debug, Hash)]
pub enum Scheme {
  Unix,
  Tcp,
}

impl Scheme {
  pub fn as_str(self) -> &'static str {
    match self {
      Scheme::Unix => "unix",
      Scheme::Tcp => "tcp",
    }
  }
}

impl fmt::Display for Scheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
  #[error("invalid endpoint: {0}")]
  InvalidEndpoint(String),
}

/// Transport address of the gRPC server, `<scheme>://<address>`.
#[derive(Eq, Clone, PartialEq, Debug, Hash)]
pub struct Endpoint {
  scheme: Scheme,
  address: String,
}

impl Endpoint {
  /// Only `unix` and `tcp` are accepted, case-insensitively, and the
  /// address may not be empty.
  pub fn parse(endpoint: &str) -> Result<Self, EndpointError> {
    let invalid = || EndpointError::InvalidEndpoint(endpoint.to_owned());

    let idx = endpoint.find("://").ok_or_else(invalid)?;
    let (scheme, address) = (&endpoint[..idx], &endpoint[idx + 3..]);

    let scheme = match scheme.to_ascii_lowercase().as_str() {
      "unix" => Scheme::Unix,
      "tcp" => Scheme::Tcp,
      _ => return Err(invalid()),
    };

    if address.is_empty() {
      return Err(invalid());
    }

    Ok(Endpoint {
      scheme,
      address: address.to_owned(),
    })
  }

  #[inline]
  pub fn scheme(&self) -> Scheme {
    self.scheme
  }

  #[inline]
  pub fn address(&self) -> &str {
    &self.address
  }

  /// Filesystem location of a `unix` endpoint. The address is relative to
  /// the filesystem root.
  pub fn socket_path(&self) -> Option<PathBuf> {
    match self.scheme {
      Scheme::Unix => Some(PathBuf::from(format!(
        "/{}",
        self.address.trim_start_matches('/')
      ))),
      Scheme::Tcp => None,
    }
  }
}

impl FromStr for Endpoint {
  type Err = EndpointError;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Endpoint::parse(s)
  }
}

impl fmt::Display for Endpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}://{}", self.scheme, self.address)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::Path;
  use test_case::test_case;

  #[test_case("tcp://128.0.0.1" => Ok((Scheme::Tcp, "128.0.0.1".to_string())) ; "tcp address")]
  #[test_case("unix://tmp/foobar" => Ok((Scheme::Unix, "tmp/foobar".to_string())) ; "unix socket address")]
  #[test_case("UNIX://tmp/csi.sock" => Ok((Scheme::Unix, "tmp/csi.sock".to_string())) ; "upper case scheme")]
  #[test_case("Tcp://0.0.0.0:10000" => Ok((Scheme::Tcp, "0.0.0.0:10000".to_string())) ; "mixed case scheme")]
  #[test_case("unix:///var/lib/csi.sock" => Ok((Scheme::Unix, "/var/lib/csi.sock".to_string())) ; "absolute unix path")]
  #[test_case("foo://bar" => Err(EndpointError::InvalidEndpoint("foo://bar".into())) ; "unsupported address")]
  #[test_case("unix://" => Err(EndpointError::InvalidEndpoint("unix://".into())) ; "empty address")]
  #[test_case("tmp/csi.sock" => Err(EndpointError::InvalidEndpoint("tmp/csi.sock".into())) ; "missing scheme")]
  #[test_case("" => Err(EndpointError::InvalidEndpoint("".into())) ; "empty endpoint")]
  fn parse_endpoint(endpoint: &str) -> Result<(Scheme, String), EndpointError> {
    Endpoint::parse(endpoint).map(|e| (e.scheme(), e.address().to_string()))
  }

  #[test]
  fn unix_socket_path_is_rooted() {
    let endpoint: Endpoint = DEFAULT_ENDPOINT.parse().unwrap();
    assert_eq!(endpoint.socket_path().unwrap(), Path::new("/tmp/csi.sock"));

    let endpoint: Endpoint = "unix:///run/csi/csi.sock".parse().unwrap();
    assert_eq!(endpoint.socket_path().unwrap(), Path::new("/run/csi/csi.sock"));

    let endpoint: Endpoint = "tcp://127.0.0.1:9000".parse().unwrap();
    assert_eq!(endpoint.socket_path(), None);
    assert_eq!(endpoint.to_string(), "tcp://127.0.0.1:9000");
  }
}
