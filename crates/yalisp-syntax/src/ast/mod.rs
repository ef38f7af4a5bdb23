//! Abstract syntax tree for YALisp.
//!
//! The tree is plain owned data: a [`Node::List`] owns its children in a
//! `Vec`, so dropping the root releases the whole tree and an error raised
//! halfway through building a list drops whatever was built so far.
//!
//! # Modules
//!
//! - [`node`] - The [`Node`] sum type and its helpers

pub mod node;

pub use node::Node;
