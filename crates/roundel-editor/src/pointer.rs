//! Window-wide pointer listening as a scoped resource.
//!
//! The application owns a [`PointerSource`] and forwards every pointer move
//! and release in the window to components that hold a live
//! [`PointerSubscription`], wherever the pointer is. A component acquires
//! its subscription once when mounted; dropping it unsubscribes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: Vec<u64>,
}

/// Registry of window-wide pointer listeners. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct PointerSource {
    registry: Rc<RefCell<Registry>>,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    pub fn subscribe(&self) -> PointerSubscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.live.push(id);
        log::debug!("pointer subscription {id} acquired ({} live)", reg.live.len());

        PointerSubscription { id, registry: Rc::downgrade(&self.registry) }
    }

    /// Number of subscriptions that have not been dropped yet.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().live.len()
    }

    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }
}

/// Scoped pointer listener; unsubscribes on drop.
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl PointerSubscription {
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True while the source still exists and holds this subscription.
    pub fn is_live(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|reg| reg.borrow().live.contains(&self.id))
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let Some(reg) = self.registry.upgrade() else { return };
        let mut reg = reg.borrow_mut();
        reg.live.retain(|&id| id != self.id);
        log::debug!("pointer subscription {} released ({} live)", self.id, reg.live.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_and_drop_pair_up() {
        let source = PointerSource::new();
        let a = source.subscribe();
        let b = source.subscribe();
        assert_ne!(a.id(), b.id());
        assert_eq!(source.subscriber_count(), 2);

        drop(a);
        assert_eq!(source.subscriber_count(), 1);
        assert!(b.is_live());

        drop(b);
        assert!(!source.has_subscribers());
    }

    #[test]
    fn clones_share_the_registry() {
        let source = PointerSource::new();
        let other = source.clone();
        let _sub = other.subscribe();
        assert_eq!(source.subscriber_count(), 1);
    }

    #[test]
    fn subscription_outliving_source_is_dead_and_drops_cleanly() {
        let source = PointerSource::new();
        let sub = source.subscribe();
        drop(source);
        assert!(!sub.is_live());
        drop(sub);
    }
}
