//! Navigation tree building and integrity checking for weld.
//!
//! This crate provides:
//! - [`build_tree`]: compile raw sidebar records into a [`SidebarNode`] tree
//! - [`check`]: cross-validate the tree against a content store
//!
//! The two steps are deliberately separate: shape validation only needs the
//! sidebar specification, while integrity checking needs the complete
//! content store and therefore runs after both producers have finished.

mod check;
mod tree;

pub use check::{BrokenLink, CheckReport, IntegrityError, check};
pub use tree::{NavError, SidebarNode, build_tree};
