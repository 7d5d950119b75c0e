use crate::error::{Result, ScmVersionError};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ScmVersionError::repository(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn head_commit_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| ScmVersionError::repository(format!("Cannot read HEAD: {}", e)))?;
        Ok(head.peel_to_commit()?.id())
    }

    /// Resolves a tag name to the commit it marks (lightweight or annotated)
    fn tag_commit_oid(&self, tag: &str) -> Result<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag))
            .map_err(|e| ScmVersionError::repository(format!("Cannot find tag '{}': {}", tag, e)))?;

        let commit = reference.peel_to_commit().map_err(|e| {
            ScmVersionError::repository(format!("Tag '{}' does not mark a commit: {}", tag, e))
        })?;

        Ok(commit.id())
    }
}

/// Credential callbacks for fetch and push.
///
/// Tries SSH keys from ~/.ssh/, then the SSH agent, then default credentials.
fn remote_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
    let mut callbacks = git2::RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(git2::CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        git2::Cred::default()
    });
    callbacks
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| ScmVersionError::repository(format!("Cannot list tags: {}", e)))?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn is_reachable_from_head(&self, tag: &str) -> Result<bool> {
        let tag_oid = self.tag_commit_oid(tag)?;
        let head_oid = self.head_commit_oid()?;

        if tag_oid == head_oid {
            return Ok(true);
        }

        Ok(self.repo.graph_descendant_of(head_oid, tag_oid)?)
    }

    fn commit_summaries_since(&self, tag: &str) -> Result<Vec<String>> {
        let tag_oid = self.tag_commit_oid(tag)?;
        let head_oid = self.head_commit_oid()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head_oid)?;
        revwalk.hide(tag_oid)?;

        let mut summaries = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            summaries.push(commit.summary().unwrap_or_default().to_string());
        }

        Ok(summaries)
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let tagger = self.repo.signature().map_err(|e| {
            ScmVersionError::repository(format!("Cannot determine tagger identity: {}", e))
        })?;

        self.repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| ScmVersionError::repository(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            ScmVersionError::repository(format!("Cannot find remote '{}': {}", remote, e))
        })?;

        let mut callbacks = remote_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Push rejected for {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| {
                ScmVersionError::repository(format!(
                    "Failed to push tag '{}' to '{}': {}",
                    name, remote, e
                ))
            })?;

        Ok(())
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self.repo.find_remote(remote).map_err(|e| {
            ScmVersionError::repository(format!("Cannot find remote '{}': {}", remote, e))
        })?;

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());

        let refspec_heads = format!("+refs/heads/*:refs/remotes/{}/*", remote);
        let refspecs = [refspec_heads.as_str(), "+refs/tags/*:refs/tags/*"];
        remote_handle
            .fetch(&refspecs, Some(&mut fetch_options), None)
            .map_err(|e| {
                ScmVersionError::repository(format!("Failed to fetch from '{}': {}", remote, e))
            })?;

        Ok(())
    }
}
