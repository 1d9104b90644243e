//! # Configurator
//!
//! The selection state machine behind the pizza builder.
//!
//! ## Interaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configurator Operations                              │
//! │                                                                         │
//! │  Rendering layer          Operation               State change          │
//! │  ───────────────          ─────────               ────────────          │
//! │                                                                         │
//! │  Click size ────────────► select_size() ────────► size = id  ─┐        │
//! │                                                                ▼        │
//! │                                          enforce_topping_limit()        │
//! │                                          (count > max ⇒ clear all)      │
//! │                                                                         │
//! │  Click crust ───────────► select_crust() ───────► crust = id            │
//! │                                                                         │
//! │  Click topping ─────────► toggle_topping() ─────► add/remove            │
//! │                           (ignored unless selectable, so the limit     │
//! │                           check after it never fires)                  │
//! │                                                                         │
//! │  Click "Checkout" ──────► finalize() ───────────► Checkout::checkout   │
//! │                                                                         │
//! │  Every render ──────────► compute_topping_price(), is_topping_         │
//! │                           selectable(), summary() (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use slice_core::{Configurator, InitialOrder, Menu, Money, Order, PricingRules, Size};
//!
//! let sizes = vec![Size { id: "large".into(), name: "Large".into(), price_cents: 1499, max_toppings: 5 }];
//! let menu = Menu::try_new(sizes, vec![], vec![], PricingRules::new(2, Money::from_cents(150))).unwrap();
//!
//! let mut placed = Vec::new();
//! {
//!     let mut builder = Configurator::new(menu, InitialOrder::default(), |order: Order| placed.push(order));
//!     builder.toggle_topping("basil");
//!     builder.toggle_topping("olive");
//!     builder.toggle_topping("onion");
//!
//!     assert_eq!(builder.compute_topping_price("basil"), Money::zero());
//!     assert_eq!(builder.compute_topping_price("onion"), Money::from_cents(150));
//!     builder.finalize();
//! }
//! assert_eq!(placed.len(), 1);
//! ```

use tracing::{debug, info, warn};

use crate::catalog::Menu;
use crate::money::Money;
use crate::types::{InitialOrder, Order, Selection};

// =============================================================================
// Checkout Collaborator
// =============================================================================

/// Receives the finalized order. What happens next (payment, navigation)
/// belongs to the implementor.
///
/// Any `FnMut(Order)` closure is a `Checkout`.
pub trait Checkout {
    fn checkout(&mut self, order: Order);
}

impl<F> Checkout for F
where
    F: FnMut(Order),
{
    fn checkout(&mut self, order: Order) {
        self(order)
    }
}

// =============================================================================
// Configurator
// =============================================================================

/// Holds the selection for one builder session.
///
/// ## Invariants
/// - Topping ids are unique and kept in selection order
/// - After every operation the topping count is at most the active size's
///   `max_toppings`; a size change that violates it clears the toppings
pub struct Configurator<C> {
    menu: Menu,
    selection: Selection,
    checkout: C,
}

impl<C: Checkout> Configurator<C> {
    /// Starts a session from `initial`.
    ///
    /// ## Defaults
    /// - No size/crust in `initial`: first entry of the catalog
    /// - Repeated topping ids: first occurrence wins
    /// - Too many toppings for the starting size: cleared
    pub fn new(menu: Menu, initial: InitialOrder, checkout: C) -> Self {
        let size = initial
            .size
            .or_else(|| menu.sizes.first().map(|s| s.id.clone()));
        let crust = initial
            .crust
            .or_else(|| menu.crusts.first().map(|c| c.id.clone()));

        let mut toppings: Vec<String> = Vec::with_capacity(initial.toppings.len());
        for id in initial.toppings {
            if !toppings.contains(&id) {
                toppings.push(id);
            }
        }

        let mut configurator = Configurator {
            menu,
            selection: Selection {
                size,
                crust,
                toppings,
            },
            checkout,
        };
        configurator.enforce_topping_limit();

        debug!(
            size = ?configurator.selection.size,
            crust = ?configurator.selection.crust,
            toppings = configurator.selection.toppings.len(),
            "configurator started"
        );
        configurator
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Selects a size. Any id is accepted.
    pub fn select_size(&mut self, id: &str) {
        debug!(size = %id, "size selected");
        self.selection.size = Some(id.to_string());
        self.enforce_topping_limit();
    }

    /// Selects a crust. Any id is accepted.
    pub fn select_crust(&mut self, id: &str) {
        debug!(crust = %id, "crust selected");
        self.selection.crust = Some(id.to_string());
    }

    /// Removes the topping if selected, otherwise appends it.
    ///
    /// A click on a topping that isn't selectable (the size is full) is
    /// ignored, so the cap holds without a reset.
    pub fn toggle_topping(&mut self, id: &str) {
        if !self.is_topping_selectable(id) {
            debug!(topping = %id, max = self.max_toppings(), "topping ignored, size is full");
            return;
        }

        match self.topping_position(id) {
            Some(index) => {
                self.selection.toppings.remove(index);
                debug!(topping = %id, "topping removed");
            }
            None => {
                self.selection.toppings.push(id.to_string());
                debug!(topping = %id, "topping added");
            }
        }
        self.enforce_topping_limit();
    }

    /// Packages the current selection and hands it to the checkout
    /// collaborator. The selection is left untouched.
    pub fn finalize(&mut self) {
        let order = Order::from(&self.selection);
        info!(
            size = ?order.size,
            crust = ?order.crust,
            toppings = order.toppings.len(),
            "order finalized"
        );
        self.checkout.checkout(order);
    }

    /// Clears the toppings when they no longer fit the active size.
    ///
    /// Returns `true` if a reset happened.
    fn enforce_topping_limit(&mut self) -> bool {
        let max = self.max_toppings();
        let count = self.selection.toppings.len();
        if count <= max {
            return false;
        }

        warn!(count, max, "topping selection exceeds size limit, clearing toppings");
        self.selection.toppings.clear();
        true
    }
}

impl<C> Configurator<C> {
    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Price charged for a topping.
    ///
    /// ## Two-branch policy
    /// ```text
    /// allowance = 2, price = $1.50
    ///
    ///   selected [A]        → A: $0            (under quota: all free)
    ///   selected [A, B, C]  → A: $0, B: $0, C: $1.50
    ///                         (at/over quota: first 2 picked are free)
    /// ```
    /// An id that isn't selected is quoted at the flat price once the
    /// quota is reached.
    pub fn compute_topping_price(&self, id: &str) -> Money {
        let allowance = self.menu.pricing.free_topping_allowance;
        if self.selection.toppings.len() < allowance {
            return Money::zero();
        }

        match self.topping_position(id) {
            Some(index) if index < allowance => Money::zero(),
            _ => self.menu.pricing.topping_price(),
        }
    }

    /// Whether clicking this topping would be accepted: there is room left,
    /// or it is already selected (so it can always be removed).
    pub fn is_topping_selectable(&self, id: &str) -> bool {
        self.selection.toppings.len() < self.max_toppings() || self.is_topping_selected(id)
    }

    pub fn is_topping_selected(&self, id: &str) -> bool {
        self.topping_position(id).is_some()
    }

    /// Topping cap of the active size; 0 when no known size is selected.
    pub fn max_toppings(&self) -> usize {
        self.selection
            .size
            .as_deref()
            .and_then(|id| self.menu.sizes.get(id))
            .map_or(0, |size| size.max_toppings)
    }

    pub fn topping_count(&self) -> usize {
        self.selection.toppings.len()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Ends the session and gives the checkout collaborator back.
    pub fn into_checkout(self) -> C {
        self.checkout
    }

    fn topping_position(&self, id: &str) -> Option<usize> {
        self.selection.toppings.iter().position(|t| t == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{Crust, Ingredient, PricingRules, Size};

    fn size(id: &str, price_cents: i64, max_toppings: usize) -> Size {
        Size {
            id: id.to_string(),
            name: id.to_string(),
            price_cents,
            max_toppings,
        }
    }

    fn test_menu(allowance: usize, topping_price_cents: i64) -> Menu {
        Menu {
            sizes: Catalog::try_from_entries(vec![
                size("small", 899, 2),
                size("medium", 1199, 3),
                size("large", 1499, 5),
            ])
            .unwrap(),
            crusts: Catalog::try_from_entries(vec![Crust {
                id: "thin".to_string(),
                name: "Thin".to_string(),
                price_cents: 0,
                image: "thin.png".to_string(),
            }])
            .unwrap(),
            ingredients: Catalog::try_from_entries(
                ["A", "B", "C", "D"]
                    .iter()
                    .map(|id| Ingredient {
                        id: id.to_string(),
                        name: id.to_string(),
                        image: format!("{id}.png"),
                    })
                    .collect(),
            )
            .unwrap(),
            pricing: PricingRules {
                free_topping_allowance: allowance,
                topping_price_cents,
            },
        }
    }

    fn starting_with(size: &str, toppings: &[&str]) -> InitialOrder {
        InitialOrder {
            size: Some(size.to_string()),
            crust: Some("thin".to_string()),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn ignore_checkout(_: Order) {}

    #[test]
    fn test_defaults_to_first_catalog_entries() {
        let cfg = Configurator::new(test_menu(2, 150), InitialOrder::default(), ignore_checkout);
        assert_eq!(cfg.selection().size.as_deref(), Some("small"));
        assert_eq!(cfg.selection().crust.as_deref(), Some("thin"));
        assert!(cfg.selection().toppings.is_empty());
    }

    #[test]
    fn test_empty_menu_leaves_selection_unset() {
        let cfg = Configurator::new(Menu::default(), InitialOrder::default(), ignore_checkout);
        assert!(cfg.selection().size.is_none());
        assert!(cfg.selection().crust.is_none());
        assert_eq!(cfg.max_toppings(), 0);
    }

    #[test]
    fn test_initial_toppings_are_deduplicated() {
        let cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &["A", "B", "A"]),
            ignore_checkout,
        );
        assert_eq!(cfg.selection().toppings, vec!["A", "B"]);
    }

    #[test]
    fn test_initial_toppings_over_limit_are_cleared() {
        let cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("small", &["A", "B", "C"]),
            ignore_checkout,
        );
        assert!(cfg.selection().toppings.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes_preserving_order() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &[]),
            ignore_checkout,
        );
        cfg.toggle_topping("A");
        cfg.toggle_topping("B");
        cfg.toggle_topping("C");
        cfg.toggle_topping("B");
        assert_eq!(cfg.selection().toppings, vec!["A", "C"]);
    }

    #[test]
    fn test_pricing_example_first_two_free() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &[]),
            ignore_checkout,
        );
        for id in ["A", "B", "C"] {
            cfg.toggle_topping(id);
        }
        assert_eq!(cfg.compute_topping_price("A"), Money::zero());
        assert_eq!(cfg.compute_topping_price("B"), Money::zero());
        assert_eq!(cfg.compute_topping_price("C"), Money::from_cents(150));
    }

    #[test]
    fn test_under_quota_everything_is_free() {
        let mut cfg = Configurator::new(
            test_menu(3, 150),
            starting_with("large", &[]),
            ignore_checkout,
        );
        cfg.toggle_topping("A");
        cfg.toggle_topping("B");
        assert_eq!(cfg.compute_topping_price("A"), Money::zero());
        assert_eq!(cfg.compute_topping_price("B"), Money::zero());
        // Not selected, but the quota isn't reached yet either.
        assert_eq!(cfg.compute_topping_price("D"), Money::zero());
    }

    #[test]
    fn test_unselected_topping_quoted_at_flat_price_once_quota_reached() {
        let mut cfg = Configurator::new(
            test_menu(1, 150),
            starting_with("large", &[]),
            ignore_checkout,
        );
        cfg.toggle_topping("A");
        assert_eq!(cfg.compute_topping_price("D"), Money::from_cents(150));
    }

    #[test]
    fn test_zero_allowance_charges_every_topping() {
        let mut cfg = Configurator::new(
            test_menu(0, 150),
            starting_with("large", &[]),
            ignore_checkout,
        );
        cfg.toggle_topping("A");
        assert_eq!(cfg.compute_topping_price("A"), Money::from_cents(150));
    }

    #[test]
    fn test_removing_a_free_topping_promotes_the_next_one() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &["A", "B", "C", "D"]),
            ignore_checkout,
        );
        assert_eq!(cfg.compute_topping_price("C"), Money::from_cents(150));

        cfg.toggle_topping("A");
        assert_eq!(cfg.compute_topping_price("C"), Money::zero());
        assert_eq!(cfg.compute_topping_price("D"), Money::from_cents(150));
    }

    #[test]
    fn test_selectable_at_cap_only_for_selected() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("small", &[]),
            ignore_checkout,
        );
        cfg.toggle_topping("A");
        assert!(cfg.is_topping_selectable("B"));

        cfg.toggle_topping("B");
        assert!(!cfg.is_topping_selectable("C"));
        assert!(cfg.is_topping_selectable("A"));
        assert!(cfg.is_topping_selectable("B"));
    }

    #[test]
    fn test_downsizing_past_limit_clears_all_toppings() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("medium", &["A", "B", "C"]),
            ignore_checkout,
        );
        cfg.select_size("small");
        assert!(cfg.selection().toppings.is_empty());
        assert_eq!(cfg.selection().size.as_deref(), Some("small"));
    }

    #[test]
    fn test_downsizing_within_limit_keeps_toppings() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &["A", "B"]),
            ignore_checkout,
        );
        cfg.select_size("small");
        assert_eq!(cfg.selection().toppings, vec!["A", "B"]);
    }

    #[test]
    fn test_toggle_past_cap_is_ignored() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("small", &["A", "B"]),
            ignore_checkout,
        );
        cfg.toggle_topping("C");
        assert_eq!(cfg.selection().toppings, vec!["A", "B"]);

        // Clicking the disabled tile twice leaves the selection as it was.
        cfg.toggle_topping("C");
        assert_eq!(cfg.selection().toppings, vec!["A", "B"]);

        // Selected toppings can still be removed at the cap.
        cfg.toggle_topping("A");
        assert_eq!(cfg.selection().toppings, vec!["B"]);
    }

    #[test]
    fn test_unknown_size_has_no_room() {
        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("large", &["A"]),
            ignore_checkout,
        );
        cfg.select_size("family");
        assert_eq!(cfg.selection().size.as_deref(), Some("family"));
        assert_eq!(cfg.max_toppings(), 0);
        assert!(cfg.selection().toppings.is_empty());
        assert!(!cfg.is_topping_selectable("A"));
    }

    #[test]
    fn test_select_crust_accepts_any_id() {
        let mut cfg = Configurator::new(test_menu(2, 150), InitialOrder::default(), ignore_checkout);
        cfg.select_crust("stuffed");
        assert_eq!(cfg.selection().crust.as_deref(), Some("stuffed"));
    }

    #[test]
    fn test_finalize_invokes_checkout_once_with_order() {
        let mut placed: Vec<Order> = Vec::new();
        {
            let mut cfg = Configurator::new(
                test_menu(2, 150),
                InitialOrder::default(),
                |order: Order| placed.push(order),
            );
            cfg.select_size("large");
            cfg.select_crust("thin");
            cfg.toggle_topping("A");
            cfg.toggle_topping("B");
            cfg.finalize();

            // State is kept after checkout.
            assert_eq!(cfg.selection().toppings, vec!["A", "B"]);
        }

        assert_eq!(
            placed,
            vec![Order {
                size: Some("large".to_string()),
                crust: Some("thin".to_string()),
                toppings: vec!["A".to_string(), "B".to_string()],
            }]
        );
    }

    #[test]
    fn test_into_checkout_returns_collaborator() {
        struct Recorder(Vec<Order>);

        impl Checkout for Recorder {
            fn checkout(&mut self, order: Order) {
                self.0.push(order);
            }
        }

        let mut cfg = Configurator::new(
            test_menu(2, 150),
            starting_with("medium", &["C"]),
            Recorder(Vec::new()),
        );
        cfg.finalize();
        cfg.finalize();

        let recorder = cfg.into_checkout();
        assert_eq!(recorder.0.len(), 2);
        assert_eq!(recorder.0[0].toppings, vec!["C"]);
    }
}
