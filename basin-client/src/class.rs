//! Per-class descriptors and write policy.

use crate::object::Object;
use std::fmt;
use std::sync::Arc;

/// Optional hook for classes that need validation or normalization beyond
/// the generic field handling.
///
/// Most classes do not need this; the client saves whatever fields the
/// object carries. Return `Err(message)` to reject the write before any
/// request goes out.
pub trait ClassHandler: Send + Sync {
    /// Validate or normalize an object about to be saved.
    fn before_save(&self, object: &mut Object) -> Result<(), String> {
        let _ = object;
        Ok(())
    }
}

/// Descriptor for one object class (collection) on the server.
///
/// Carries the collection name plus the write policy the client enforces:
/// whether saves demand an authenticated author, and whether created
/// objects are publicly writable. Application record types are values of
/// this type, not subclasses.
#[derive(Clone)]
pub struct Class {
    name: String,
    requires_author: bool,
    public_write: bool,
    handler: Option<Arc<dyn ClassHandler>>,
}

impl Class {
    fn with_policy(name: impl Into<String>, requires_author: bool, public_write: bool) -> Self {
        Self {
            name: name.into(),
            requires_author,
            public_write,
            handler: None,
        }
    }

    /// A class with the default policy: saves require an authenticated
    /// author, and created objects are world-readable but not
    /// world-writable.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, true, false)
    }

    /// A class writable without signing in. No author is stamped, no
    /// session is required, and created objects grant public read and
    /// write.
    #[must_use]
    pub fn public(name: impl Into<String>) -> Self {
        Self::with_policy(name, false, true)
    }

    /// Attaches a pre-save hook.
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn ClassHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Collection name, also used as the pointer `className`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether saves must carry an authenticated author.
    pub fn requires_author(&self) -> bool {
        self.requires_author
    }

    /// Whether created objects grant public write access.
    pub fn public_write(&self) -> bool {
        self.public_write
    }

    pub(crate) fn handler(&self) -> Option<Arc<dyn ClassHandler>> {
        self.handler.clone()
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("requires_author", &self.requires_author)
            .field("public_write", &self.public_write)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}
