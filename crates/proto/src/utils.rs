use std::{fmt, time::Duration};
use tracing::{field, Span};

pub(crate) trait Record: Sized {
  fn record_field(self, field: &'static str) -> Self;
}

impl<T: fmt::Debug> Record for T {
  #[inline]
  fn record_field(self, field: &'static str) -> Self {
    Span::current().record(field, &field::debug(&self));
    self
  }
}

const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// Reads the deadline the client attached to the call, if any.
///
/// tonic enforces the header on its own but keeps the parsed value private.
/// It is read again here to bound the wait for a volume lock.
pub(crate) fn grpc_timeout(metadata: &tonic::metadata::MetadataMap) -> Option<Duration> {
  let value = metadata.get(GRPC_TIMEOUT_HEADER)?.to_str().ok()?;
  parse_grpc_timeout(value)
}

/// `TimeoutValue TimeoutUnit`, at most 8 digits followed by one of `HMSmun`.
fn parse_grpc_timeout(value: &str) -> Option<Duration> {
  if value.len() < 2 || value.len() > 9 {
    return None;
  }

  let (digits, unit) = value.split_at(value.len() - 1);
  if !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }

  let amount: u64 = digits.parse().ok()?;
  let duration = match unit {
    "H" => Duration::from_secs(amount * 60 * 60),
    "M" => Duration::from_secs(amount * 60),
    "S" => Duration::from_secs(amount),
    "m" => Duration::from_millis(amount),
    "u" => Duration::from_micros(amount),
    "n" => Duration::from_nanos(amount),
    _ => return None,
  };

  Some(duration)
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case("2H" => Some(Duration::from_secs(7200)) ; "hours")]
  #[test_case("3M" => Some(Duration::from_secs(180)) ; "minutes")]
  #[test_case("10S" => Some(Duration::from_secs(10)) ; "seconds")]
  #[test_case("250m" => Some(Duration::from_millis(250)) ; "millis")]
  #[test_case("99999999u" => Some(Duration::from_micros(99_999_999)) ; "max digits")]
  #[test_case("5n" => Some(Duration::from_nanos(5)) ; "nanos")]
  #[test_case("123456789S" => None ; "too many digits")]
  #[test_case("S" => None ; "missing value")]
  #[test_case("10x" => None ; "unknown unit")]
  #[test_case("-1S" => None ; "negative")]
  fn parses_timeout(value: &str) -> Option<Duration> {
    parse_grpc_timeout(value)
  }

  #[test]
  fn reads_metadata() {
    let mut metadata = tonic::metadata::MetadataMap::new();
    assert_eq!(grpc_timeout(&metadata), None);

    metadata.insert(GRPC_TIMEOUT_HEADER, "100m".parse().unwrap());
    assert_eq!(grpc_timeout(&metadata), Some(Duration::from_millis(100)));
  }
}
