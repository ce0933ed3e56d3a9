//! Render step — turns store state into view payloads and markup fragments
//! for the page, and pushes `cart:changed` / `ui:toast` events through a
//! [`Presenter`].

use serde::Serialize;
use tauri::Emitter;

use crate::models::catalog::CatalogEntry;
use crate::models::profile::Profile;
use crate::services::cart::Cart;

/// Emitted after every cart mutation and once at startup.
pub const CART_CHANGED_EVENT: &str = "cart:changed";
/// Emitted for transient notifications.
pub const TOAST_EVENT: &str = "ui:toast";

const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";
const NO_SUGGESTIONS_MESSAGE: &str = "No suggestions";

/// Receives state changes the page must reflect without asking for them.
pub trait Presenter: Send + Sync {
    /// Badge count and cart list changed.
    fn cart_changed(&self, view: &CartView);
    fn toast(&self, toast: &Toast);
}

impl<R: tauri::Runtime> Presenter for tauri::AppHandle<R> {
    fn cart_changed(&self, view: &CartView) {
        if let Err(e) = self.emit(CART_CHANGED_EVENT, view) {
            log::warn!("Failed to emit {}: {}", CART_CHANGED_EVENT, e);
        }
    }

    fn toast(&self, toast: &Toast) {
        if let Err(e) = self.emit(TOAST_EVENT, toast) {
            log::warn!("Failed to emit {}: {}", TOAST_EVENT, e);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub index: usize,
    pub name: String,
}

/// Everything the page needs to draw the badge and the cart modal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub count: usize,
    pub items: Vec<CartLine>,
    pub checkout_visible: bool,
    /// `<li>` rows for the cart list container.
    pub markup: String,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let items: Vec<CartLine> = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartLine {
                index,
                name: item.name.clone(),
            })
            .collect();
        Self {
            count: items.len(),
            checkout_visible: !items.is_empty(),
            markup: cart_markup(&items),
            items,
        }
    }
}

fn cart_markup(items: &[CartLine]) -> String {
    if items.is_empty() {
        return format!("<li>{}</li>", EMPTY_CART_MESSAGE);
    }
    items
        .iter()
        .map(|line| {
            format!(
                "<li>{} <button class=\"remove-cart-item\" data-idx=\"{}\">Remove</button></li>",
                escape_html(&line.name),
                line.index
            )
        })
        .collect()
}

/// State of the search suggestion dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDropdown {
    pub visible: bool,
    pub titles: Vec<String>,
    pub markup: String,
}

impl SuggestionDropdown {
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Visible dropdown listing `titles`, or the placeholder row when empty.
    pub fn from_matches(titles: Vec<String>) -> Self {
        let markup = if titles.is_empty() {
            format!(
                "<div class=\"ai-suggestion-empty\">{}</div>",
                NO_SUGGESTIONS_MESSAGE
            )
        } else {
            titles
                .iter()
                .map(|t| format!("<div class=\"ai-suggestion-item\">{}</div>", escape_html(t)))
                .collect()
        };
        Self {
            visible: true,
            titles,
            markup,
        }
    }
}

/// Result of an explicit search: one emphasis flag per card, in card order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub query: String,
    pub highlighted: Vec<bool>,
    pub dropdown: SuggestionDropdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsView {
    pub title: String,
    pub details: String,
    pub image_urls: Vec<String>,
    /// `<img>` tags for the details image strip.
    pub images_markup: String,
}

impl From<&CatalogEntry> for DetailsView {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            details: entry.details.clone(),
            image_urls: entry.image_urls.clone(),
            images_markup: entry
                .image_urls
                .iter()
                .map(|src| format!("<img src=\"{}\">", escape_html(src)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    /// Avatar data URI currently previewed, if any.
    pub avatar: Option<String>,
    pub avatar_markup: String,
}

impl ProfileView {
    pub fn new(saved: Option<&Profile>, avatar_preview: Option<&str>) -> Self {
        let avatar_markup = avatar_preview
            .map(|src| format!("<img src=\"{}\" alt=\"Avatar\">", escape_html(src)))
            .unwrap_or_default();
        Self {
            name: saved.map(|p| p.name.clone()).unwrap_or_default(),
            email: saved.map(|p| p.email.clone()).unwrap_or_default(),
            avatar: avatar_preview.map(str::to_owned),
            avatar_markup,
        }
    }
}

/// Escape text for insertion into generated markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::models::cart::CartItem;

    /// Presenter double that records everything it is shown.
    #[derive(Default)]
    pub(crate) struct RecordingPresenter {
        pub carts: Mutex<Vec<CartView>>,
        pub toasts: Mutex<Vec<Toast>>,
    }

    impl RecordingPresenter {
        pub fn last_count(&self) -> Option<usize> {
            self.carts.lock().unwrap().last().map(|v| v.count)
        }

        pub fn toast_messages(&self) -> Vec<String> {
            self.toasts
                .lock()
                .unwrap()
                .iter()
                .map(|t| t.message.clone())
                .collect()
        }
    }

    impl Presenter for RecordingPresenter {
        fn cart_changed(&self, view: &CartView) {
            self.carts.lock().unwrap().push(view.clone());
        }

        fn toast(&self, toast: &Toast) {
            self.toasts.lock().unwrap().push(toast.clone());
        }
    }

    #[test]
    fn empty_cart_shows_placeholder_and_hides_checkout() {
        let view = CartView::from_cart(&Cart::default());
        assert_eq!(view.count, 0);
        assert!(!view.checkout_visible);
        assert_eq!(view.markup, "<li>Your cart is empty.</li>");
    }

    #[test]
    fn cart_rows_carry_remove_buttons_with_indices() {
        let cart = Cart::from(vec![
            CartItem::new("Shirt", "shirt"),
            CartItem::new("Dress", "dress"),
        ]);
        let view = CartView::from_cart(&cart);
        assert_eq!(view.count, 2);
        assert!(view.checkout_visible);
        assert!(view.markup.contains("data-idx=\"0\""));
        assert!(view.markup.contains("data-idx=\"1\""));
        assert!(view.markup.starts_with("<li>Shirt <button"));
    }

    #[test]
    fn suggestion_markup_escapes_titles() {
        let dropdown = SuggestionDropdown::from_matches(vec!["Shirts & <Ties>".to_string()]);
        assert!(dropdown.visible);
        assert!(dropdown.markup.contains("Shirts &amp; &lt;Ties&gt;"));
    }

    #[test]
    fn no_matches_shows_placeholder_row() {
        let dropdown = SuggestionDropdown::from_matches(Vec::new());
        assert!(dropdown.visible);
        assert!(dropdown.titles.is_empty());
        assert!(dropdown.markup.contains("No suggestions"));
    }

    #[test]
    fn hidden_dropdown_has_no_markup() {
        let dropdown = SuggestionDropdown::hidden();
        assert!(!dropdown.visible);
        assert!(dropdown.markup.is_empty());
    }

    #[test]
    fn profile_view_without_avatar_has_empty_markup() {
        let view = ProfileView::new(None, None);
        assert_eq!(view.name, "");
        assert!(view.avatar.is_none());
        assert!(view.avatar_markup.is_empty());
    }

    #[test]
    fn toast_serializes_camel_case() {
        let toast = Toast {
            message: "Profile saved!".into(),
            duration_ms: 1800,
        };
        let json = serde_json::to_string(&toast).unwrap();
        assert!(json.contains("\"durationMs\":1800"));
    }
}
