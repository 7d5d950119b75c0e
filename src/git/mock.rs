use crate::error::{Result, ScmVersionError};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory repository for testing without actual git operations
///
/// Tags are listed in insertion order. Every tag is reachable from HEAD unless
/// added with [`MockRepository::add_unreachable_tag`] or
/// [`MockRepository::add_broken_tag`].
#[derive(Default)]
pub struct MockRepository {
    tags: Vec<String>,
    unreachable: HashSet<String>,
    broken: HashSet<String>,
    summaries: HashMap<String, Vec<String>>,
    fail_listing: bool,
    fail_fetch: bool,
    created: RefCell<Vec<(String, String)>>,
    pushed: RefCell<Vec<(String, String)>>,
    fetched: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag reachable from HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add a tag that lives on another branch
    pub fn add_unreachable_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.unreachable.insert(name.clone());
        self.tags.push(name);
    }

    /// Add a tag whose reachability query fails
    pub fn add_broken_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.broken.insert(name.clone());
        self.tags.push(name);
    }

    /// Script the commit summaries returned after `tag`
    pub fn set_commits_since<S: Into<String>>(
        &mut self,
        tag: impl Into<String>,
        summaries: impl IntoIterator<Item = S>,
    ) {
        self.summaries
            .insert(tag.into(), summaries.into_iter().map(Into::into).collect());
    }

    /// Make `list_tags` fail
    pub fn fail_tag_listing(&mut self) {
        self.fail_listing = true;
    }

    /// Make `fetch` fail
    pub fn fail_fetch(&mut self) {
        self.fail_fetch = true;
    }

    /// Tags created so far as (name, message)
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created.borrow().clone()
    }

    /// Tags pushed so far as (remote, name)
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }

    /// Remotes fetched so far
    pub fn fetched_remotes(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name) || self.created.borrow().iter().any(|(t, _)| t == name)
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_listing {
            return Err(ScmVersionError::repository("tag listing failed"));
        }
        Ok(self.tags.clone())
    }

    fn is_reachable_from_head(&self, tag: &str) -> Result<bool> {
        if self.broken.contains(tag) {
            return Err(ScmVersionError::repository(format!(
                "cannot resolve tag '{}'",
                tag
            )));
        }
        if !self.has_tag(tag) {
            return Err(ScmVersionError::repository(format!("unknown tag '{}'", tag)));
        }
        Ok(!self.unreachable.contains(tag))
    }

    fn commit_summaries_since(&self, tag: &str) -> Result<Vec<String>> {
        if !self.has_tag(tag) {
            return Err(ScmVersionError::repository(format!(
                "unknown revision '{}'",
                tag
            )));
        }
        Ok(self.summaries.get(tag).cloned().unwrap_or_default())
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        if self.has_tag(name) {
            return Err(ScmVersionError::repository(format!(
                "tag '{}' already exists",
                name
            )));
        }
        self.created
            .borrow_mut()
            .push((name.to_string(), message.to_string()));
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if !self.has_tag(name) {
            return Err(ScmVersionError::repository(format!(
                "src refspec '{}' does not match any",
                name
            )));
        }
        self.pushed
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }

    fn fetch(&self, remote: &str) -> Result<()> {
        if self.fail_fetch {
            return Err(ScmVersionError::repository(format!(
                "could not read from remote '{}'",
                remote
            )));
        }
        self.fetched.borrow_mut().push(remote.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_list_tags_in_order() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");
        repo.add_unreachable_tag("2.0.0");
        repo.add_tag("release");

        assert_eq!(repo.list_tags().unwrap(), vec!["1.0.0", "2.0.0", "release"]);
    }

    #[test]
    fn test_mock_repository_reachability() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");
        repo.add_unreachable_tag("2.0.0");
        repo.add_broken_tag("3.0.0");

        assert!(repo.is_reachable_from_head("1.0.0").unwrap());
        assert!(!repo.is_reachable_from_head("2.0.0").unwrap());
        assert!(repo.is_reachable_from_head("3.0.0").is_err());
        assert!(repo.is_reachable_from_head("missing").is_err());
    }

    #[test]
    fn test_mock_repository_commits_since() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");
        repo.set_commits_since("1.0.0", ["fix: a", "feat: b #minor"]);

        assert_eq!(
            repo.commit_summaries_since("1.0.0").unwrap(),
            vec!["fix: a", "feat: b #minor"]
        );
        assert!(repo.commit_summaries_since("9.9.9").is_err());
    }

    #[test]
    fn test_mock_repository_failures() {
        let mut repo = MockRepository::new();
        repo.fail_tag_listing();
        repo.fail_fetch();

        assert!(repo.list_tags().is_err());
        assert!(repo.fetch("origin").is_err());
        assert!(repo.fetched_remotes().is_empty());
    }

    #[test]
    fn test_mock_repository_create_and_push() {
        let repo = MockRepository::new();

        repo.create_tag("1.0.1", "Version 1.0.1").unwrap();
        assert!(repo.create_tag("1.0.1", "again").is_err());
        repo.push_tag("origin", "1.0.1").unwrap();
        assert!(repo.push_tag("origin", "nope").is_err());

        assert_eq!(
            repo.created_tags(),
            vec![("1.0.1".to_string(), "Version 1.0.1".to_string())]
        );
        assert_eq!(
            repo.pushed_tags(),
            vec![("origin".to_string(), "1.0.1".to_string())]
        );
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
