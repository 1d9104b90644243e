//! # Domain Types
//!
//! Value types shared by the configurator and its collaborators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog entries (immutable, supplied by the caller)                   │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Size       │   │      Crust      │   │   Ingredient    │       │
//! │  │  id, name       │   │  id, name       │   │  id, name       │       │
//! │  │  price_cents    │   │  price_cents    │   │  image          │       │
//! │  │  max_toppings   │   │  image          │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Selection flow                                                         │
//! │  InitialOrder ──► Selection (mutable) ──► Order (handed to checkout)   │
//! │                                                                         │
//! │  PricingRules: free_topping_allowance + topping_price_cents            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_FREE_TOPPING_ALLOWANCE, DEFAULT_TOPPING_PRICE_CENTS};

// =============================================================================
// Catalog Entries
// =============================================================================

/// A pizza size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Size {
    /// Catalog identifier ("small", "large", ...).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base price in cents.
    pub price_cents: i64,

    /// How many toppings this size can carry.
    pub max_toppings: usize,
}

impl Size {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A crust option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Crust {
    pub id: String,
    pub name: String,

    /// Surcharge in cents (often zero).
    pub price_cents: i64,

    /// Image reference understood by the rendering layer.
    pub image: String,
}

impl Crust {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A topping ingredient. Ingredients carry no price of their own; what a
/// topping costs depends on the pricing rules and selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub image: String,
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// Business parameters for topping pricing.
///
/// The first `free_topping_allowance` toppings (by selection order) are
/// included in the size price; the rest cost `topping_price_cents` each.
/// Fields missing from a serialized block take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PricingRules {
    pub free_topping_allowance: usize,
    pub topping_price_cents: i64,
}

impl PricingRules {
    pub const fn new(free_topping_allowance: usize, topping_price: Money) -> Self {
        PricingRules {
            free_topping_allowance,
            topping_price_cents: topping_price.cents(),
        }
    }

    #[inline]
    pub fn topping_price(&self) -> Money {
        Money::from_cents(self.topping_price_cents)
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            free_topping_allowance: DEFAULT_FREE_TOPPING_ALLOWANCE,
            topping_price_cents: DEFAULT_TOPPING_PRICE_CENTS,
        }
    }
}

// =============================================================================
// Selection & Order
// =============================================================================

/// Starting point for a configurator session.
///
/// Every field is optional: a fresh visit starts from `InitialOrder::default()`,
/// while "edit my pizza" flows pass the previous order back in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct InitialOrder {
    pub size: Option<String>,
    pub crust: Option<String>,
    pub toppings: Vec<String>,
}

impl From<Order> for InitialOrder {
    fn from(order: Order) -> Self {
        InitialOrder {
            size: order.size,
            crust: order.crust,
            toppings: order.toppings,
        }
    }
}

/// The live selection held by a configurator.
///
/// ## Invariants
/// - `toppings` holds unique ids in selection order
/// - `toppings.len()` never exceeds the selected size's `max_toppings`
///   once an operation has settled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    pub size: Option<String>,
    pub crust: Option<String>,
    pub toppings: Vec<String>,
}

/// A finalized order handed to the checkout collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub size: Option<String>,
    pub crust: Option<String>,
    /// Topping ids in the order they were picked.
    pub toppings: Vec<String>,
}

impl From<&Selection> for Order {
    fn from(selection: &Selection) -> Self {
        Order {
            size: selection.size.clone(),
            crust: selection.crust.clone(),
            toppings: selection.toppings.clone(),
        }
    }
}
