//! # slice-core: Pure Business Logic for Slice Builder
//!
//! This crate is the rules engine behind the stepwise pizza builder: pick a
//! size, then a crust, then toppings, with live price and eligibility
//! feedback, then hand the order to checkout.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Slice Builder Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Rendering layer (outside this workspace)           │   │
//! │  │      Size step ──► Crust step ──► Toppings step ──► Checkout    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                     click events │ ▲ summary()                          │
//! │  ┌─────────────────────────────▼─┴─────────────────────────────────┐   │
//! │  │               ★ slice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌──────────────┐  ┌─────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ configurator │  │  view   │  │   │
//! │  │   │ Size,Order│  │ Catalog<T>│  │ state machine│  │ display │  │   │
//! │  │   └───────────┘  └───────────┘  └──────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO THREADS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Checkout::checkout(Order)              │
//! │                                ▼                                        │
//! │                  Checkout handler (caller supplied)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog entries, pricing rules, selection and order values
//! - [`money`] - Money type with integer cents
//! - [`catalog`] - Insertion-ordered catalogs and the [`Menu`]
//! - [`configurator`] - The selection state machine
//! - [`view`] - Display values for the rendering layer
//! - [`validation`] - Menu validation rules
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use slice_core::{Configurator, InitialOrder, Menu, Order, PricingRules, Size};
//!
//! let sizes = vec![
//!     Size { id: "medium".into(), name: "Medium".into(), price_cents: 1199, max_toppings: 3 },
//!     Size { id: "small".into(), name: "Small".into(), price_cents: 899, max_toppings: 2 },
//! ];
//! let menu = Menu::try_new(sizes, vec![], vec![], PricingRules::default()).unwrap();
//!
//! let mut builder = Configurator::new(menu, InitialOrder::default(), |_order: Order| {});
//! for topping in ["basil", "olive", "onion"] {
//!     builder.toggle_topping(topping);
//! }
//! assert_eq!(builder.topping_count(), 3);
//!
//! // Three toppings don't fit on a small: the selection starts over.
//! builder.select_size("small");
//! assert_eq!(builder.topping_count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod configurator;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry, Menu};
pub use configurator::{Checkout, Configurator};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use view::{
    ConfiguratorSummary, CrustOption, PriceBreakdown, RemainingToppings, SizeOption, ToppingView,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Toppings included in the size price when no pricing rules are given.
pub const DEFAULT_FREE_TOPPING_ALLOWANCE: usize = 3;

/// Price of each topping beyond the allowance ($1.50) when no pricing rules
/// are given.
pub const DEFAULT_TOPPING_PRICE_CENTS: i64 = 150;

/// Upper bound for any size's topping cap.
///
/// ## Business Reason
/// Catches menu typos (30 instead of 3) before they reach the builder.
pub const MAX_TOPPINGS_PER_SIZE: usize = 20;
