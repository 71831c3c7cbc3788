// System Layer
pub mod filesystem;
pub mod loader;
pub mod source;

pub use filesystem::FileSystem;
pub use loader::ContentLoader;
pub use source::{Resolved, Source, SourceResolver};
