use std::{env, path::PathBuf, process::ExitCode};

use miette::{miette, IntoDiagnostic, Result, WrapErr};

use crate::{cli::Args, config::Config, exec};

/// Where the project tree shows up inside the container.
pub const CONTAINER_PROJECT_ROOT: &str = "/lhwsutil-dev";

const DOCKER: &str = "docker";

pub fn main(config: &Config, args: &Args) -> Result<ExitCode> {
    let image = resolve_image(config, args);
    let project_root = resolve_project_root(args)?;

    let mut docker_args = vec![DOCKER.to_string()];
    docker_args.extend(launch_args(&image, &project_root.to_string_lossy()));

    let status = exec::interactive(&docker_args).wrap_err(miette!(
        help = "install Docker or make sure `docker` is on your PATH",
        "failed to start the development container",
    ))?;

    // The container's outcome is our outcome, whatever it is.
    Ok(match status.code() {
        Some(code) => ExitCode::from(code as u8),
        None => ExitCode::FAILURE,
    })
}

fn resolve_image(config: &Config, args: &Args) -> String {
    args.image.clone().unwrap_or_else(|| config.image.clone())
}

fn resolve_project_root(args: &Args) -> Result<PathBuf> {
    match &args.project_root {
        Some(path) => Ok(path.clone()),
        None => env::current_dir()
            .into_diagnostic()
            .wrap_err("failed to resolve the current directory"),
    }
}

/// Argument vector handed to `docker`, sans the binary itself.
pub fn launch_args(image: &str, project_root: &str) -> Vec<String> {
    vec![
        "run".to_string(),
        "--rm".to_string(),
        "-it".to_string(),
        "-v".to_string(),
        format!("{project_root}:{CONTAINER_PROJECT_ROOT}"),
        "--cap-add=SYS_PTRACE".to_string(),
        "--entrypoint".to_string(),
        "/bin/bash".to_string(),
        image.to_string(),
    ]
}
