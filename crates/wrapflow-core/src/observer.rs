//! Observer registration with drop-to-unregister handles.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Observer<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: usize,
    // Ids only grow, so pushing keeps this sorted by registration order.
    observers: Vec<(usize, Observer<E>)>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }
}

/// A set of callbacks notified with events of type `E`.
///
/// Clones share the same set of observers. Observers are called in
/// registration order, outside of any internal borrow, so an observer may
/// register or drop handles while it runs.
pub struct ObserverRegistry<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for ObserverRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry::default())),
        }
    }
}

impl<E: 'static> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    ///
    /// Returns a handle that will automatically unregister the observer when dropped.
    pub fn register(&self, observer: impl Fn(&E) + 'static) -> ObserverHandle {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observers.push((id, Rc::new(observer)));
            id
        };
        log::trace!("registered observer {id}");

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        ObserverHandle {
            unregister: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    // The observer is dropped after the borrow ends: it may own handles too.
                    let removed = {
                        let mut registry = registry.borrow_mut();
                        let position = registry.observers.iter().position(|(entry, _)| *entry == id);
                        position.map(|position| registry.observers.remove(position))
                    };
                    if removed.is_some() {
                        log::trace!("unregistered observer {id}");
                    }
                }
            })),
        }
    }

    /// Notifies every registered observer.
    pub fn notify(&self, event: &E) {
        // Copy observers so callbacks run outside the borrow
        let observers: Vec<Observer<E>> = self
            .inner
            .borrow()
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for unregistering observers.
///
/// When dropped, automatically removes the associated observer.
pub struct ObserverHandle {
    unregister: Option<Box<dyn FnOnce()>>,
}

impl ObserverHandle {
    /// Unregisters the observer now.
    pub fn cancel(mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }

    /// Keeps the observer registered for the lifetime of its registry.
    pub fn detach(mut self) {
        self.unregister.take();
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}
