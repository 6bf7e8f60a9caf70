//! Wire-level primitives for the Basin object API.
//!
//! Everything in this crate is pure data, shared by every client of the
//! service:
//!
//! - [`Pointer`] - compact cross-reference to another stored object
//! - [`Acl`] / [`Permission`] - per-object access grants attached at creation
//! - [`date`] - server timestamp parsing and display formatting
//!
//! No I/O happens here. The `basin-client` crate layers the REST operations
//! on top of these shapes.

mod acl;
pub mod date;
mod pointer;

pub use acl::{Acl, PUBLIC, Permission};
pub use pointer::Pointer;
