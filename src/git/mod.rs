//! Repository query abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! queries that version resolution needs, so the resolution algorithm can run
//! against a real repository or an in-memory double.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use scm_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! for tag in repo.list_tags()? {
//!     if repo.is_reachable_from_head(&tag)? {
//!         println!("{} is on the current branch", tag);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control operations used to resolve and publish versions
///
/// All failures are reported as [crate::error::ScmVersionError::Repository].
/// Calls are blocking and made one at a time.
pub trait Repository {
    /// List all tag names, sorted by name
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Check whether a tag is contained in the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(true)` - The tagged commit is HEAD or one of its ancestors
    /// * `Ok(false)` - The tag exists but is not reachable from HEAD
    /// * `Err` - If the tag or HEAD cannot be resolved
    fn is_reachable_from_head(&self, tag: &str) -> Result<bool>;

    /// One-line summaries of every commit after `tag` up to HEAD, newest first
    ///
    /// Commits reachable from the tag are excluded; HEAD is included.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Commit summaries (empty if HEAD is the tagged commit)
    /// * `Err` - If the tag does not exist or the log cannot be read
    fn commit_summaries_since(&self, tag: &str) -> Result<Vec<String>>;

    /// Create an annotated tag on HEAD
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;

    /// Fetch all branches and tags from a remote
    fn fetch(&self, remote: &str) -> Result<()>;
}
