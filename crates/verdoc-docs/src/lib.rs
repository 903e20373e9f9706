//! Documentation gateway abstraction for verdoc.
//!
//! The request handlers never read documentation sources directly. They go
//! through the [`Documentation`] trait, which answers four questions:
//!
//! - which versions are published ([`Documentation::versions`])
//! - the rendered HTML of a page ([`Documentation::page`])
//! - the rendered navigation index of a version ([`Documentation::index`])
//! - whether a page exists in a version ([`Documentation::section_exists`])
//!
//! Markdown rendering and storage belong to the implementor.
//! [`MemoryDocumentation`] keeps pre-rendered pages in memory and is what the
//! server tests run against.
//!
//! # Example
//!
//! ```ignore
//! use verdoc_docs::{Documentation, MemoryDocumentation};
//!
//! let docs = MemoryDocumentation::new()
//!     .with_version("5.8", "5.8")
//!     .with_page("5.8", "installation", "<h1>Installation</h1>");
//!
//! assert!(docs.versions().contains("5.8"));
//! assert!(docs.section_exists("5.8", "installation"));
//! ```

mod documentation;
mod memory;
mod versions;

pub use documentation::{Documentation, DocsError};
pub use memory::MemoryDocumentation;
pub use versions::{DocVersion, DocVersions};
