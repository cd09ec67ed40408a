use serde::Serialize;
use thiserror::Error;

const UNKNOWN: &str = "unknown";

pub const DRIVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum VersionError {
  #[error("driver name is empty")]
  EmptyDriverName,

  #[error("failed to render version info: {0}")]
  Render(#[from] serde_yaml::Error),
}

/// Build information logged at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
  pub driver_name: String,
  pub driver_version: String,
  pub git_commit: String,
  pub build_date: String,
  pub rust_version: String,
  pub platform: String,
}

impl VersionInfo {
  pub fn new(driver_name: &str) -> Result<Self, VersionError> {
    if driver_name.is_empty() {
      return Err(VersionError::EmptyDriverName);
    }

    Ok(VersionInfo {
      driver_name: driver_name.to_owned(),
      driver_version: DRIVER_VERSION.to_owned(),
      git_commit: option_env!("LVM_DRIVER_GIT_COMMIT")
        .unwrap_or(UNKNOWN)
        .to_owned(),
      build_date: option_env!("LVM_DRIVER_BUILD_DATE")
        .unwrap_or(UNKNOWN)
        .to_owned(),
      rust_version: option_env!("LVM_DRIVER_RUSTC").unwrap_or(UNKNOWN).to_owned(),
      platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    })
  }

  pub fn to_yaml(&self) -> Result<String, VersionError> {
    Ok(serde_yaml::to_string(self)?)
  }
}

/// The YAML version report for `driver_name`.
pub fn version_report(driver_name: &str) -> Result<String, VersionError> {
  VersionInfo::new(driver_name)?.to_yaml()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn report_lists_every_field() {
    let report = version_report("lvm.redhat.com").unwrap();

    assert!(report.contains("driverName: lvm.redhat.com"));
    assert!(report.contains(&format!("driverVersion: {}", DRIVER_VERSION)));
    for field in &["gitCommit", "buildDate", "rustVersion", "platform"] {
      assert!(report.contains(field), "missing {} in {}", field, report);
    }
  }

  #[test]
  fn empty_driver_name_is_rejected() {
    assert!(matches!(
      version_report(""),
      Err(VersionError::EmptyDriverName)
    ));
  }
}
