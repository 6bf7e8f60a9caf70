//! Object layer and REST client for the Basin API.
//!
//! The building blocks:
//! - [`Class`] - per-type descriptor: collection name plus write policy
//! - [`Object`] - the generic record: an open field map with server-assigned
//!   id and timestamps, serialized as a pointer when referenced
//! - [`Client`] - `save`, `remove` and `load_all` against the REST API
//! - [`Session`] - explicit authenticated-actor context for writes
//! - [`Notifier`] - transient status notices for save/remove outcomes
//!
//! One operation is one HTTP request; there is no local cache, retry or
//! offline queue. The wire primitives (pointers, ACLs, timestamps) live in
//! [`basin_types`] and are re-exported here for convenience.
//!
//! # Example
//!
//! ```
//! use basin_client::{Class, Client, ClientResult, Object, Session};
//!
//! async fn ask(client: &Client, session: &Session) -> ClientResult<Object> {
//!     let mut question = Object::new(Class::new("Question"));
//!     question.set("title", "How do pointers serialize?");
//!     client.save(&mut question, Some(session)).await?;
//!     Ok(question)
//! }
//! ```

mod class;
mod client;
mod config;
mod error;
mod notify;
mod object;
mod session;

pub use class::{Class, ClassHandler};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use notify::{Notifier, NoopNotifier};
pub use object::Object;
pub use session::{Session, USER_CLASS};

pub use basin_types::{Acl, PUBLIC, Permission, Pointer};
