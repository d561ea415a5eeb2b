//! Static content for the quantum teleportation showcase.
//!
//! Everything here is fixed at compile time: the nine sidebar [`Topic`]s, the
//! [`Section`] each one renders, and the intro/footer that frame every page.
//! The [`Catalog`] is the single place where a topic is mapped to its renderer.

pub mod block;
pub mod catalog;
pub mod error;
pub mod intro;
pub mod sections;
pub mod topic;

pub use block::{Block, ListItem, Page, Section};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use intro::{QSHARP_TELEPORT_SOURCE, exploration_heading, footer, intro};
pub use topic::Topic;
