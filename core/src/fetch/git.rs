use crate::error::{CoreError, CoreResult};
use crate::layout::CheckoutLayout;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

use super::ManifestFetcher;

/// Upstream repository fetched through the `git` command line.
#[derive(Debug, Clone)]
pub struct GitRepository {
    url: String,
    checkout: CheckoutLayout,
    git_binary: String,
}

impl GitRepository {
    pub fn new(
        url: impl Into<String>,
        checkout: CheckoutLayout,
        git_binary: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            checkout,
            git_binary: git_binary.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Clone into the checkout directory unless it already exists.
    /// Returns `true` when a clone happened.
    pub fn ensure_cloned(&self) -> CoreResult<bool> {
        let dir = self.checkout.root();
        if dir.exists() {
            return Ok(false);
        }
        let parent = dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = dir.file_name().ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "checkout dir has no final component: {}",
                dir.display()
            ))
        })?;
        fs::create_dir_all(parent)?;

        tracing::info!(dir = %dir.display(), url = %self.url, "cloning upstream repository");
        self.run_git(parent, [OsStr::new("clone"), OsStr::new(&self.url), name])?;
        Ok(true)
    }

    /// Highest tag by version ordering, `None` when the repository has no tags.
    pub fn latest_tag(&self) -> CoreResult<Option<String>> {
        let out = self.run_git(self.checkout.root(), ["tag", "--list", "--sort=-v:refname"])?;
        Ok(out
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string))
    }

    /// Pull the latest tag from the upstream URL. Without tags the remote's
    /// default branch is pulled instead.
    pub fn update_to_latest_tag(&self) -> CoreResult<Option<String>> {
        let root = self.checkout.root();
        let Some(tag) = self.latest_tag()? else {
            tracing::warn!(
                url = %self.url,
                "upstream repository has no tags; pulling default branch"
            );
            self.run_git(root, ["pull", "--no-rebase", "--no-edit", self.url.as_str()])?;
            return Ok(None);
        };
        tracing::info!(tag = %tag, "updating upstream repository");
        let args = ["pull", "--no-rebase", "--no-edit", self.url.as_str(), tag.as_str()];
        self.run_git(root, args)?;
        Ok(Some(tag))
    }

    fn run_git<I, S>(&self, cwd: &Path, args: I) -> CoreResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let command = args
            .first()
            .map(|a| a.as_ref().to_string_lossy().into_owned())
            .unwrap_or_default();

        let output = Command::new(&self.git_binary)
            .args(&args)
            .current_dir(cwd)
            .output()
            .map_err(|e| CoreError::Vcs {
                command: command.clone(),
                message: format!("failed to run {}: {}", self.git_binary, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CoreError::Vcs {
                command,
                message: format!("{} ({})", stderr, output.status),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ManifestFetcher for GitRepository {
    fn fetch_latest_manifest_text(&self) -> CoreResult<String> {
        self.ensure_cloned()?;
        self.update_to_latest_tag()?;
        let path = self.checkout.manifest_path();
        tracing::debug!(path = %path.display(), "reading upstream manifest");
        Ok(fs::read_to_string(path)?)
    }

    fn checkout(&self) -> &CheckoutLayout {
        &self.checkout
    }
}
