use super::KeyValueStore;
use crate::services::cart::Cart;

/// Store key of the serialized cart.
pub const CART_KEY: &str = "gbsCart";

/// Load the persisted cart. Absent or malformed state yields an empty cart.
pub fn load(store: &dyn KeyValueStore) -> Cart {
    store
        .read_blob(CART_KEY)
        .map(|blob| Cart::restore(&blob))
        .unwrap_or_default()
}

/// Persist the cart immediately.
pub fn save(store: &dyn KeyValueStore, cart: &Cart) -> crate::error::Result<()> {
    store.write_blob(CART_KEY, cart.serialize()?)
}
