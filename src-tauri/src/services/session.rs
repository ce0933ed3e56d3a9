//! Page session — owns the cart, profile, catalog and order form state for
//! one storefront window and reacts to page events.
//!
//! Each handler applies a state transition through the stores, then returns
//! the view the page should draw. Cart count changes and toasts also go out
//! through the [`Presenter`], so the badge stays right whichever command
//! caused the change.

use std::sync::Arc;

use serde::Serialize;

use crate::error::AppError;
use crate::models::cart::CartItem;
use crate::models::catalog::{CatalogEntry, ServiceCard};
use crate::models::order::OrderForm;
use crate::models::settings::StorefrontSettings;
use crate::services::cart::CartStore;
use crate::services::catalog::CatalogIndex;
use crate::services::measurement::MeasurementSection;
use crate::services::order::{OrderOutcome, OrderSubmission, SubmissionPhase, FIX_ERRORS_MESSAGE};
use crate::services::profile::ProfileStore;
use crate::services::render::{
    CartView, DetailsView, Presenter, ProfileView, SearchView, SuggestionDropdown, Toast,
};
use crate::storage::{self, KeyValueStore};

const PROFILE_SAVED_MESSAGE: &str = "Profile saved!";

/// Initial state handed to the page once its markup is indexed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub cart: CartView,
    pub profile: ProfileView,
    pub measurements: MeasurementSection,
    pub settings: StorefrontSettings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    /// Service key the order form's selector should now show.
    pub service: String,
    pub measurements: MeasurementSection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitView {
    pub outcome: OrderOutcome,
    pub phase: SubmissionPhase,
    /// Measurement section after the submission; hidden once the form resets.
    pub measurements: MeasurementSection,
}

/// The page's modal dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Cart,
    Details,
    Profile,
}

#[derive(Debug, Default)]
struct OpenModals {
    cart: bool,
    details: bool,
    profile: bool,
}

impl OpenModals {
    fn flag(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::Cart => &mut self.cart,
            Modal::Details => &mut self.details,
            Modal::Profile => &mut self.profile,
        }
    }

    fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Cart => self.cart,
            Modal::Details => self.details,
            Modal::Profile => self.profile,
        }
    }
}

#[derive(Debug, Default)]
struct SearchState {
    query: String,
    highlighted: Vec<bool>,
    dropdown: SuggestionDropdown,
}

pub struct Storefront {
    storage: Arc<dyn KeyValueStore>,
    presenter: Arc<dyn Presenter>,
    settings: StorefrontSettings,
    cart: CartStore,
    profile: ProfileStore,
    catalog: CatalogIndex,
    search: SearchState,
    selected_service: String,
    modals: OpenModals,
    submission: OrderSubmission,
}

impl Storefront {
    /// Restore persisted cart, profile and settings.
    pub fn restore(
        storage: Arc<dyn KeyValueStore>,
        presenter: Arc<dyn Presenter>,
    ) -> crate::error::Result<Self> {
        let settings = storage::settings::get_settings(storage.as_ref());
        let cart = CartStore::restore(storage.clone(), presenter.clone());
        let profile = ProfileStore::restore(storage.clone());
        log::info!(
            "Storefront session restored: {} cart item(s), profile saved: {}",
            cart.count(),
            profile.saved().is_some()
        );
        Ok(Self {
            storage,
            presenter,
            settings,
            cart,
            profile,
            catalog: CatalogIndex::default(),
            search: SearchState::default(),
            selected_service: String::new(),
            modals: OpenModals::default(),
            submission: OrderSubmission::new()?,
        })
    }

    /// Index the page's service cards and evaluate the measurement section for
    /// whatever service the selector already shows.
    pub fn page_ready(&mut self, cards: &[ServiceCard], selected_service: String) -> PageSnapshot {
        self.catalog = CatalogIndex::build_index(cards);
        self.search = SearchState {
            highlighted: vec![false; self.catalog.len()],
            ..SearchState::default()
        };
        PageSnapshot {
            cart: self.cart.view(),
            profile: self.profile_view(),
            measurements: self.select_service(selected_service),
            settings: self.settings.clone(),
        }
    }

    // --- cart ---

    pub fn add_to_cart(&mut self, card_index: usize) -> crate::error::Result<CartView> {
        let entry = self.card(card_index)?;
        let item = CartItem::new(entry.title.clone(), entry.key.clone());
        let message = format!("{} added to cart!", item.name);
        self.cart.add(item)?;
        self.toast(message);
        Ok(self.cart.view())
    }

    pub fn remove_cart_item(&mut self, index: usize) -> crate::error::Result<CartView> {
        self.cart.remove_at(index)?;
        Ok(self.cart.view())
    }

    pub fn open_cart(&mut self) -> CartView {
        *self.modals.flag(Modal::Cart) = true;
        self.cart.view()
    }

    pub fn close_cart(&mut self) {
        self.close(Modal::Cart);
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// Seed the order form from the first cart line and close the cart.
    /// Does nothing on an empty cart. The cart itself is left intact.
    pub fn checkout(&mut self) -> Option<CheckoutView> {
        let service = self.cart.cart().first()?.service_type.clone();
        self.close(Modal::Cart);
        let measurements = self.select_service(service.clone());
        Some(CheckoutView {
            service,
            measurements,
        })
    }

    // --- catalog & search ---

    /// Explicit search: flag every card as matched or not.
    pub fn search(&mut self, query: String) -> SearchView {
        self.search.highlighted = self.catalog.highlight(&query);
        self.search.query = query;
        self.search_view()
    }

    /// Keystroke in the search box: recompute the dropdown.
    pub fn suggest(&mut self, query: String) -> SuggestionDropdown {
        self.search.dropdown = if query.is_empty() {
            SuggestionDropdown::hidden()
        } else {
            SuggestionDropdown::from_matches(self.catalog.suggestions(&query))
        };
        self.search.query = query;
        self.search.dropdown.clone()
    }

    /// Pick a suggestion: it becomes the query and the search runs.
    pub fn select_suggestion(&mut self, title: String) -> SearchView {
        self.search.dropdown = SuggestionDropdown::hidden();
        self.search(title)
    }

    /// Click outside the search bar.
    pub fn dismiss_suggestions(&mut self) -> SuggestionDropdown {
        self.search.dropdown = SuggestionDropdown::hidden();
        self.search.dropdown.clone()
    }

    /// Open the details modal for a card.
    pub fn service_details(&mut self, card_index: usize) -> crate::error::Result<DetailsView> {
        let view = DetailsView::from(self.card(card_index)?);
        *self.modals.flag(Modal::Details) = true;
        Ok(view)
    }

    /// Close button or a click on the details backdrop.
    pub fn close_details(&mut self) {
        self.close(Modal::Details);
    }

    /// "Order Now" on a card: preselect its service in the order form.
    pub fn order_service(&mut self, card_index: usize) -> crate::error::Result<MeasurementSection> {
        let key = self.card(card_index)?.key.clone();
        Ok(self.select_service(key))
    }

    // --- order form ---

    /// Service selector changed.
    pub fn select_service(&mut self, service_key: String) -> MeasurementSection {
        let section = MeasurementSection::for_service(&service_key);
        self.selected_service = service_key;
        section
    }

    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    /// Validate and submit the order form. An accepted order empties the
    /// cart; if that write fails the error is returned and nothing changes.
    pub fn submit_order(&mut self, form: &OrderForm) -> crate::error::Result<SubmitView> {
        let cart = &mut self.cart;
        let outcome = self.submission.submit(form, || cart.clear())?;
        let measurements = match &outcome {
            OrderOutcome::Accepted { .. } => {
                log::info!("Order accepted for service '{}'", form.service);
                self.select_service(String::new())
            }
            OrderOutcome::Rejected { .. } => {
                self.toast(FIX_ERRORS_MESSAGE.to_string());
                MeasurementSection::for_service(&form.service)
            }
        };
        Ok(SubmitView {
            outcome,
            phase: self.submission.phase(),
            measurements,
        })
    }

    // --- profile ---

    pub fn profile_view(&self) -> ProfileView {
        ProfileView::new(self.profile.saved(), self.profile.avatar_preview())
    }

    /// Profile icon clicked.
    pub fn open_profile(&mut self) -> ProfileView {
        *self.modals.flag(Modal::Profile) = true;
        self.profile_view()
    }

    pub fn close_profile(&mut self) {
        self.close(Modal::Profile);
    }

    /// Save the profile and close its modal. A failed write leaves it open.
    pub fn save_profile(&mut self, name: String, email: String) -> crate::error::Result<ProfileView> {
        let profile = self.profile.compose(name, email);
        self.profile.save(profile)?;
        self.toast(PROFILE_SAVED_MESSAGE.to_string());
        self.close(Modal::Profile);
        Ok(self.profile_view())
    }

    /// Result of an avatar selection: a data URI, or `None` when the
    /// selection was cleared.
    pub fn set_avatar_preview(&mut self, data_uri: Option<String>) -> ProfileView {
        self.profile.set_avatar_preview(data_uri);
        self.profile_view()
    }

    // --- settings ---

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: StorefrontSettings) -> crate::error::Result<()> {
        storage::settings::save_settings(self.storage.as_ref(), &settings)?;
        self.settings = settings;
        Ok(())
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modals.is_open(modal)
    }

    fn close(&mut self, modal: Modal) {
        *self.modals.flag(modal) = false;
    }

    fn card(&self, index: usize) -> crate::error::Result<&CatalogEntry> {
        self.catalog
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("service card {}", index)))
    }

    fn search_view(&self) -> SearchView {
        SearchView {
            query: self.search.query.clone(),
            highlighted: self.search.highlighted.clone(),
            dropdown: self.search.dropdown.clone(),
        }
    }

    fn toast(&self, message: String) {
        self.presenter.toast(&Toast {
            message,
            duration_ms: self.settings.toast_duration_ms,
        });
    }
}
