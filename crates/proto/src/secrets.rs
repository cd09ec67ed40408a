use std::{collections::HashMap, fmt};

/// Placeholder written in place of secret values in log output.
pub const STRIPPED: &str = "***stripped***";

pub(crate) struct Secrets(HashMap<String, String>);

impl AsRef<HashMap<String, String>> for Secrets {
  #[inline]
  fn as_ref(&self) -> &HashMap<String, String> {
    &self.0
  }
}

impl From<HashMap<String, String>> for Secrets {
  #[inline]
  fn from(v: HashMap<String, String>) -> Self {
    Secrets(v)
  }
}

impl fmt::Debug for Secrets {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut m = f.debug_map();
    for k in self.0.keys() {
      m.key(k).value(&STRIPPED);
    }

    m.finish()
  }
}

/// Volume context entries whose key names a credential.
pub fn is_sensitive_key(key: &str) -> bool {
  const MARKERS: [&str; 5] = ["secret", "password", "token", "credential", "key"];

  let key = key.to_ascii_lowercase();
  MARKERS.iter().any(|m| key.contains(m))
}

/// Replaces every value in `map` by the stripped marker.
pub(crate) fn strip_all(map: &mut HashMap<String, String>) {
  for v in map.values_mut() {
    *v = STRIPPED.into();
  }
}

/// Replaces the values of credential-looking keys in `map`.
pub(crate) fn strip_sensitive(map: &mut HashMap<String, String>) {
  for (k, v) in map.iter_mut() {
    if is_sensitive_key(k) {
      *v = STRIPPED.into();
    }
  }
}

/// Volume context wrapper that hides credential values from `Debug`.
pub(crate) struct VolumeContext(HashMap<String, String>);

impl From<HashMap<String, String>> for VolumeContext {
  #[inline]
  fn from(v: HashMap<String, String>) -> Self {
    VolumeContext(v)
  }
}

impl AsRef<HashMap<String, String>> for VolumeContext {
  #[inline]
  fn as_ref(&self) -> &HashMap<String, String> {
    &self.0
  }
}

impl fmt::Debug for VolumeContext {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut m = f.debug_map();
    for (k, v) in &self.0 {
      if is_sensitive_key(k) {
        m.key(k).value(&STRIPPED);
      } else {
        m.key(k).value(v);
      }
    }

    m.finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  #[test_case("csi.storage.k8s.io/serviceAccount.tokens" => true ; "service account tokens")]
  #[test_case("encryptionPassword" => true ; "password")]
  #[test_case("storage.kubernetes.io/csiProvisionerSecretName" => true ; "secret name")]
  #[test_case("csi.storage.k8s.io/pod.name" => false ; "pod name")]
  #[test_case("fsType" => false ; "fs type")]
  fn sensitive_keys(key: &str) -> bool {
    is_sensitive_key(key)
  }

  #[test]
  fn secrets_never_render_values() {
    let mut map = HashMap::new();
    map.insert("password".to_string(), "hunter2".to_string());
    let rendered = format!("{:?}", Secrets::from(map));

    assert!(rendered.contains("password"));
    assert!(!rendered.contains("hunter2"));
  }

  #[test]
  fn volume_context_keeps_plain_values() {
    let mut map = HashMap::new();
    map.insert("csi.storage.k8s.io/pod.name".to_string(), "web-0".to_string());
    map.insert("authToken".to_string(), "abc123".to_string());
    let rendered = format!("{:?}", VolumeContext::from(map));

    assert!(rendered.contains("web-0"));
    assert!(!rendered.contains("abc123"));
  }
}
