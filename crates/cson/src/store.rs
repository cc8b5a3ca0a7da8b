//! Tree storage and its synchronization policy.
//!
//! Every container handle points at one [`Store`]: the storage cell holding
//! the root of a JSON tree. Handles derived from each other share the same
//! store, so a write through any of them is visible through all of them.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// Storage cell for the root of a JSON tree.
///
/// `read` and `write` each form one critical section: the closure sees a
/// consistent tree for its whole duration. Closures must not call back into
/// a handle on the same store.
pub trait Store: Clone {
    /// Whether the store carries a reader/writer lock.
    const SYNCHRONIZED: bool;

    /// Allocates a fresh store holding `value` as its root.
    fn new(value: Value) -> Self;

    /// Runs `f` with shared access to the root.
    fn read<R>(&self, f: impl FnOnce(&Value) -> R) -> R;

    /// Runs `f` with exclusive access to the root.
    fn write<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R;

    /// Whether both handles point at the same storage.
    fn ptr_eq(&self, other: &Self) -> bool;
}

/// Unsynchronized storage.
///
/// Not `Send`: a tree in local storage can only be reached from the thread
/// that created it. The cell is the same one [`Shared`] uses, so the tree
/// can be handed to synchronized handles without copying it.
#[derive(Clone, Default)]
pub struct Local {
    cell: Arc<RwLock<Value>>,
    _not_send: PhantomData<Rc<()>>,
}

impl Local {
    /// Synchronized storage over this same tree.
    pub(crate) fn share(&self) -> Shared {
        Shared(Arc::clone(&self.cell))
    }
}

impl Store for Local {
    const SYNCHRONIZED: bool = false;

    fn new(value: Value) -> Self {
        Self {
            cell: Arc::new(RwLock::new(value)),
            _not_send: PhantomData,
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        f(&self.cell.read())
    }

    fn write<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R {
        f(&mut self.cell.write())
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl fmt::Debug for Local {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Local").field(&Arc::as_ptr(&self.cell)).finish()
    }
}

/// Storage guarded by one reader/writer lock per tree.
///
/// Cloning shares the lock; it is never reallocated for derived handles.
#[derive(Clone, Default)]
pub struct Shared(Arc<RwLock<Value>>);

impl Store for Shared {
    const SYNCHRONIZED: bool = true;

    fn new(value: Value) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    fn read<R>(&self, f: impl FnOnce(&Value) -> R) -> R {
        f(&self.0.read())
    }

    fn write<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R {
        f(&mut self.0.write())
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&Arc::as_ptr(&self.0)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_local_clone_shares_storage() {
        let a = Local::new(json!(1));
        let b = a.clone();
        b.write(|v| *v = json!(2));
        assert_eq!(a.read(Value::clone), json!(2));
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Local::new(json!(2))));
    }

    #[test]
    fn test_shared_clone_shares_lock() {
        let a = Shared::new(json!({"k": 1}));
        let b = a.clone();
        b.write(|v| v["k"] = json!(2));
        assert_eq!(a.read(|v| v["k"].clone()), json!(2));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_local_share_keeps_storage() {
        let local = Local::new(json!({"k": 1}));
        let shared = local.share();
        shared.write(|v| v["k"] = json!(2));
        assert_eq!(local.read(|v| v["k"].clone()), json!(2));
        local.write(|v| v["k"] = json!(3));
        assert_eq!(shared.read(|v| v["k"].clone()), json!(3));
        assert!(shared.ptr_eq(&local.share()));
    }

    #[test]
    fn test_shared_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shared>();
    }

    #[test]
    fn test_synchronized_flags() {
        assert!(!Local::SYNCHRONIZED);
        assert!(Shared::SYNCHRONIZED);
    }
}
