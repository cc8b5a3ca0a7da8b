//! The path-addressed container.

use std::fmt;

use cson_path::{format_path, join, parse_path, Path};
use serde_json::Value;
use tracing::trace;

use crate::store::{Local, Shared, Store};

pub(crate) static NULL: Value = Value::Null;

/// A handle to a node of a JSON tree.
///
/// The handle stores the tree's [`Store`] and the path from the root to
/// the node it addresses. Reads resolve that path on every call, so a
/// handle always observes the current tree: writes made through the parent
/// or through any sibling handle are visible, and a node that has been
/// replaced out from under the handle reads as nil.
///
/// `Json` (the default, [`Local`] storage) is unsynchronized and stays on
/// one thread. [`SyncJson`] carries one reader/writer lock for the whole
/// tree and can be shared between threads.
///
/// # Example
///
/// ```
/// use cson::Json;
/// use serde_json::json;
///
/// let root: Json = Json::empty();
/// root.set("server.port", 8080).set("server.host", "localhost");
///
/// let server = root.get("server");
/// assert_eq!(server.get("port").to_i64(), 8080);
///
/// // Writes through a child land in the parent's tree.
/// server.set("tls", true);
/// assert_eq!(root.value(), json!({"server": {"port": 8080, "host": "localhost", "tls": true}}));
///
/// // Missing paths are silent.
/// assert!(root.get("server.port.number").is_nil());
/// ```
#[derive(Clone)]
pub struct Json<S: Store = Local> {
    pub(crate) store: S,
    pub(crate) anchor: Path,
}

/// A container whose tree is guarded by a reader/writer lock.
pub type SyncJson = Json<Shared>;

impl<S: Store> Json<S> {
    /// Wraps `value` as the root of a new tree. No copy is made.
    pub fn wrap(value: impl Into<Value>) -> Self {
        Self {
            store: S::new(value.into()),
            anchor: Path::new(),
        }
    }

    /// A new tree holding `null`.
    pub fn empty() -> Self {
        Self::wrap(Value::Null)
    }

    /// Whether this handle's tree carries a lock.
    pub fn is_synchronized(&self) -> bool {
        S::SYNCHRONIZED
    }

    /// Whether both handles address nodes of the same tree (and so share
    /// storage and lock).
    pub fn same_tree(&self, other: &Self) -> bool {
        self.store.ptr_eq(&other.store)
    }

    /// Dotted path from the tree root to the addressed node.
    pub fn path(&self) -> String {
        format_path(&self.anchor)
    }

    /// True if the addressed node is `null` or no longer exists.
    pub fn is_nil(&self) -> bool {
        self.with_value(Value::is_null)
    }

    /// Returns a handle to the value at `path`, relative to this handle.
    ///
    /// Each dot-separated step must name a key of an object. If a key is
    /// missing, or a step meets anything but an object, the whole lookup
    /// yields a detached empty container instead. `""` addresses this
    /// handle's own node.
    ///
    /// The result shares this handle's tree and lock; nothing is copied.
    pub fn get(&self, path: &str) -> Self {
        self.try_get(path).unwrap_or_else(Self::empty)
    }

    /// Like [`get`](Self::get), but reports absence as `None`.
    pub fn try_get(&self, path: &str) -> Option<Self> {
        let anchor = join(&self.anchor, path);
        let found = self.store.read(|root| match cson_path::find(root, &anchor) {
            Ok(_) => true,
            Err(err) => {
                trace!(%err, "lookup missed");
                false
            }
        });
        found.then(|| Self {
            store: self.store.clone(),
            anchor,
        })
    }

    /// Installs `value` at `path`, relative to this handle, and returns
    /// the handle for chaining.
    ///
    /// Missing objects along the path are created. Any node on the path
    /// that is not an object (including this handle's own node) is replaced
    /// by an empty object first, dropping its previous content. `""`
    /// replaces this handle's own node. Nodes above this handle's node are
    /// never touched; if that node no longer exists in the tree, the write
    /// is dropped.
    ///
    /// Passing another container stores a snapshot of its value, never the
    /// container itself.
    pub fn set(&self, path: &str, value: impl Into<Value>) -> &Self {
        // Resolve the value before locking: it may read from this tree.
        let value = value.into();
        let relative = parse_path(path);
        self.store.write(|root| match cson_path::get_mut(root, &self.anchor) {
            Some(node) => cson_path::set(node, &relative, value),
            None => trace!(anchor = %self.path(), "write through detached handle dropped"),
        });
        self
    }

    /// Runs `f` on the addressed value under shared access.
    pub(crate) fn with_value<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        self.store
            .read(|root| f(cson_path::get(root, &self.anchor).unwrap_or(&NULL)))
    }
}

impl Json<Local> {
    /// Wraps `value` as the root of a new unsynchronized tree.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::wrap(value)
    }

    /// Returns a synchronized handle to the same node of the same tree.
    ///
    /// No copy is made: writes through either handle are seen by the other,
    /// and both go through the tree's one lock. Only the synchronized
    /// handle may cross threads.
    pub fn synchronized(&self) -> SyncJson {
        Json {
            store: self.store.share(),
            anchor: self.anchor.clone(),
        }
    }
}

impl Json<Shared> {
    /// Already synchronized: returns a handle to the same node, tree and
    /// lock.
    pub fn synchronized(&self) -> SyncJson {
        self.clone()
    }
}

impl<S: Store> Default for Json<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Store> From<Value> for Json<S> {
    fn from(value: Value) -> Self {
        Self::wrap(value)
    }
}

impl<S: Store> fmt::Debug for Json<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Json")
            .field("path", &self.path())
            .field("synchronized", &S::SYNCHRONIZED)
            .field("value", &self.value())
            .finish()
    }
}

/// Nil check that also accepts an absent container.
pub trait IsNil {
    fn is_nil(&self) -> bool;
}

impl<S: Store> IsNil for Option<Json<S>> {
    fn is_nil(&self) -> bool {
        self.as_ref().map_or(true, Json::is_nil)
    }
}

impl<S: Store> IsNil for Option<&Json<S>> {
    fn is_nil(&self) -> bool {
        self.map_or(true, Json::is_nil)
    }
}
