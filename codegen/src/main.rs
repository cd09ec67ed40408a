//! Regenerates `crates/proto/src/proto.rs` from `proto/csi.proto`.
//!
//! Run from anywhere inside the workspace: `cargo run -p csi-codegen`.
//! Needs `protoc` on the `PATH`.

use anyhow::{anyhow, Context, Result};
use duct::cmd;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Deserialize, Debug)]
struct LocateProject {
  root: PathBuf,
}

fn find_workspace() -> Result<PathBuf> {
  let json = cmd!("cargo", "locate-project", "--workspace")
    .read()
    .context("cargo locate-project failed")?;

  let manifest = serde_json::from_str::<LocateProject>(&json)?.root;
  manifest
    .parent()
    .map(ToOwned::to_owned)
    .ok_or_else(|| anyhow!("workspace manifest {} has no parent", manifest.display()))
}

fn main() -> Result<()> {
  let root = find_workspace()?;
  let proto_dir = root.join("proto");
  let out_dir = root.join("target").join("proto");
  let csi_proto = proto_dir.join("csi.proto");
  fs::create_dir_all(&out_dir)?;

  let config = prost_build::Config::new();
  tonic_build::configure()
    .out_dir(&out_dir)
    .build_client(true)
    .build_server(true)
    .compile_with_config(config, &[&csi_proto], &[&proto_dir])
    .with_context(|| format!("failed to compile {}", csi_proto.display()))?;

  let generated = out_dir.join("csi.v1.rs");
  let target = root.join("crates").join("proto").join("src").join("proto.rs");
  fs::copy(&generated, &target)
    .with_context(|| format!("failed to copy bindings to {}", target.display()))?;

  println!("wrote {}", target.display());
  Ok(())
}
