//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod prerelease;
pub mod version;

pub use bump::BumpOperation;
pub use prerelease::Identifier;
pub use version::Version;
