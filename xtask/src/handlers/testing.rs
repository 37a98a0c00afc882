use crate::services::utils::{has_tool, normalize_project_name};
use anyhow::bail;
use std::process::Command;

/// `--workspace` for no project or `all`, otherwise `-p vitrine-<project>`.
fn target_args(project: Option<&str>) -> (&'static str, Vec<String>) {
    match project.filter(|value| *value != "all") {
        None => ("workspace", vec!["--workspace".into()]),
        Some(project) => ("crate", vec!["-p".into(), normalize_project_name(project)]),
    }
}

/// Runs tests in the workspace or a specific crate, through `cargo-nextest`
/// when it is installed.
///
/// # Errors
/// Returns an error if the test runner cannot be spawned or any test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let (label, target) = target_args(project);
    let has_nextest = has_tool("cargo-nextest");

    let mut args: Vec<String> =
        if has_nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };
    args.extend(target);
    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"]
                .into_iter()
                .map(String::from),
        );
    } else {
        args.extend(["--tests", "--lib", "--", "-q"].into_iter().map(String::from));
    }

    println!(
        "🧪 Running {label} tests via '{}'...",
        if has_nextest { "nextest" } else { "cargo test" }
    );
    let status = Command::new("cargo").args(args).status()?;

    if !status.success() {
        bail!("Tests failed!");
    }
    Ok(())
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if `cargo test --doc` cannot be spawned or any doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    let (label, target) = target_args(project);

    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    args.extend(target);
    args.push("--all-features".into());

    println!("📚 Running {label} doc tests via 'cargo test --doc'...");
    let status = Command::new("cargo").args(args).status()?;

    if !status.success() {
        bail!("Doc tests failed!");
    }
    Ok(())
}
