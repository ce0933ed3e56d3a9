//! Cart store — ordered list of selected services, written through to the
//! plugin store on every mutation.

use std::sync::Arc;

use crate::models::cart::CartItem;
use crate::services::render::{CartView, Presenter};
use crate::storage::{self, KeyValueStore};

/// Ordered cart contents. Duplicates are allowed and order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn first(&self) -> Option<&CartItem> {
        self.items.first()
    }

    /// Encode the cart as a JSON array of `{name, type}` objects.
    pub fn serialize(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Decode a serialized cart. Malformed input yields an empty cart.
    pub fn restore(blob: &str) -> Cart {
        match serde_json::from_str::<Vec<CartItem>>(blob) {
            Ok(items) => Cart { items },
            Err(e) => {
                log::warn!("Ignoring malformed saved cart: {}", e);
                Cart::default()
            }
        }
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

/// Cart plus its persistence and count observer.
///
/// Each mutation builds the next cart, persists it, and only then replaces
/// the in-memory copy, so a failed write leaves both sides untouched.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn KeyValueStore>,
    observer: Arc<dyn Presenter>,
}

impl CartStore {
    /// Load the persisted cart and publish its initial count.
    pub fn restore(storage: Arc<dyn KeyValueStore>, observer: Arc<dyn Presenter>) -> Self {
        let cart = storage::cart::load(storage.as_ref());
        let store = Self {
            cart,
            storage,
            observer,
        };
        store.notify();
        store
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn count(&self) -> usize {
        self.cart.count()
    }

    /// Append to the end of the cart.
    pub fn add(&mut self, item: CartItem) -> crate::error::Result<()> {
        let mut next = self.cart.clone();
        next.items.push(item);
        self.commit(next)
    }

    /// Remove the line at `index`. Out-of-range indices are ignored.
    /// Returns whether a line was removed.
    pub fn remove_at(&mut self, index: usize) -> crate::error::Result<bool> {
        if index >= self.cart.count() {
            return Ok(false);
        }
        let mut next = self.cart.clone();
        next.items.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> crate::error::Result<()> {
        self.commit(Cart::default())
    }

    pub fn view(&self) -> CartView {
        CartView::from_cart(&self.cart)
    }

    fn commit(&mut self, next: Cart) -> crate::error::Result<()> {
        if let Err(e) = storage::cart::save(self.storage.as_ref(), &next) {
            log::error!("Failed to persist cart ({} items): {}", next.count(), e);
            return Err(e);
        }
        self.cart = next;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        self.observer.cart_changed(&self.view());
    }
}
