use crate::services::utils::{get_project_root, has_tool};
use anyhow::{Context, bail};
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const WEB_CRATE: &str = "vitrine-web";
const WASM_ARTIFACT: &str = "vitrine_web.wasm";

/// Builds the browser bundle: compiles the web crate for wasm and generates
/// the JS glue with `wasm-bindgen --target web`.
///
/// # Errors
/// Returns an error if `wasm-bindgen` is missing, the build fails, or the
/// glue generation fails.
pub fn build_web(release: bool, out_dir: &str) -> anyhow::Result<()> {
    if !has_tool("wasm-bindgen") {
        bail!("'wasm-bindgen' not found. Install it with 'cargo install wasm-bindgen-cli'.");
    }

    let root = get_project_root()?;
    let profile = if release { "release" } else { "debug" };

    println!("🦀 Building {WEB_CRATE} for {WASM_TARGET} ({profile})...");
    let mut args = vec!["build", "-p", WEB_CRATE, "--target", WASM_TARGET];
    if release {
        args.push("--release");
    }
    let status = Command::new("cargo")
        .args(&args)
        .current_dir(&root)
        .status()
        .context("Failed to execute cargo build")?;
    if !status.success() {
        bail!("wasm build failed with status: {}", status.code().unwrap_or(-1));
    }

    let artifact = root.join("target").join(WASM_TARGET).join(profile).join(WASM_ARTIFACT);
    let out = root.join(out_dir);

    println!("🔗 Generating bindings into '{}'...", out.display());
    let status = Command::new("wasm-bindgen")
        .arg("--target")
        .arg("web")
        .arg("--no-typescript")
        .arg("--out-dir")
        .arg(&out)
        .arg(&artifact)
        .status()
        .context("Failed to execute wasm-bindgen")?;
    if !status.success() {
        bail!("wasm-bindgen failed with status: {}", status.code().unwrap_or(-1));
    }

    println!("✅ Bundle ready in '{}'", out.display());
    Ok(())
}
