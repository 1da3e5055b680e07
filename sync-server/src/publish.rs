//! Assets-file write and git publication.
//!
//! The write and the push are separate steps on purpose: a git failure after
//! a successful write leaves the file updated and is reported as a failure
//! without rolling back.

use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tokio::process::Command;
use tracing::info;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to write assets file: {0}")]
    Write(#[from] std::io::Error),

    #[error("file updated, but git {command} failed: {detail}")]
    Git {
        command: &'static str,
        detail: String,
    },
}

/// Overwrite the assets source file with the rendered module, creating
/// parent directories as needed.
pub async fn write_assets_file(path: &Path, source: &str) -> Result<(), PublishError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, source).await?;
    info!("updated {}", path.display());
    Ok(())
}

/// Stage, commit, and push the assets file from the given repository
/// directory.
pub async fn push(
    repo_dir: &Path,
    path: &Path,
    remote: &str,
    branch: &str,
) -> Result<(), PublishError> {
    let mut add = git(repo_dir);
    add.arg("add").arg(path);
    run_git("add", add).await?;

    let mut commit = git(repo_dir);
    commit.args(["commit", "-m", "update: portfolio assets"]);
    run_git("commit", commit).await?;

    let mut push = git(repo_dir);
    push.args(["push", remote, branch]);
    run_git("push", push).await?;

    info!("pushed portfolio assets to {remote}/{branch}");
    Ok(())
}

fn git(repo_dir: &Path) -> Command {
    let mut command = Command::new("git");
    command.current_dir(repo_dir);
    command
}

async fn run_git(name: &'static str, mut command: Command) -> Result<(), PublishError> {
    let output = command.output().await.map_err(|err| PublishError::Git {
        command: name,
        detail: err.to_string(),
    })?;
    if output.status.success() {
        Ok(())
    } else {
        Err(PublishError::Git {
            command: name,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src").join("assets.js");
        write_assets_file(&path, "export const portfolioAssets = [];\n")
            .await
            .unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "export const portfolioAssets = [];\n");
    }

    #[tokio::test]
    async fn write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.js");
        write_assets_file(&path, "old").await.unwrap();
        write_assets_file(&path, "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[tokio::test]
    async fn git_failure_reports_the_failing_command() {
        // A fresh temp dir is not a repository, so `git add` fails.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets.js");
        write_assets_file(&path, "x").await.unwrap();

        match push(dir.path(), &path, "origin", "main").await {
            Err(PublishError::Git { command, .. }) => assert_eq!(command, "add"),
            other => panic!("expected git failure, got {other:?}"),
        }
    }
}
