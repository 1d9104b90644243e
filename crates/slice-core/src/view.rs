//! # Display Values
//!
//! Read-only projections of a [`Configurator`] for the rendering layer.
//!
//! ## Builder Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. SIZE                                                                │
//! │     Small   $8.99   ██████████░░░░░   ◄── size_price_scale()            │
//! │     Large   $14.99  ███████████████                                     │
//! │                                                                         │
//! │  2. CRUST     Thin ✓   Classic   Stuffed (+$2.00)  ◄── crust_options()  │
//! │                                                                         │
//! │  3. TOPPINGS                      2 toppings left  ◄── remaining_...()  │
//! │     Basil ✓  free                                                       │
//! │     Olive ✓  free                                  ◄── topping_views()  │
//! │     Onion ✓  $1.50                                                      │
//! │     Ham      (disabled)                                                 │
//! │                                                                         │
//! │  TOTAL $16.49                                      ◄── price_breakdown()│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Configurator::summary`] bundles every value above in one serializable
//! payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::configurator::Configurator;
use crate::money::Money;
use crate::types::Selection;

// =============================================================================
// View Types
// =============================================================================

/// One size row with its price relative to the most expensive size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SizeOption {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub max_toppings: usize,
    /// `price / max catalog price`, in `[0, 1]`.
    pub price_scale: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CrustOption {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub selected: bool,
}

/// One ingredient tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToppingView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub selected: bool,
    /// False when the tile should be disabled.
    pub selectable: bool,
    pub price: Money,
}

/// How many more toppings fit, with the noun already pluralized.
///
/// ```rust
/// use slice_core::RemainingToppings;
///
/// assert_eq!(RemainingToppings::new(1).to_string(), "1 topping left");
/// assert_eq!(RemainingToppings::new(0).to_string(), "0 toppings left");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RemainingToppings {
    pub count: usize,
    pub noun: String,
}

impl RemainingToppings {
    pub fn new(count: usize) -> Self {
        let noun = if count == 1 { "topping" } else { "toppings" };
        RemainingToppings {
            count,
            noun: noun.to_string(),
        }
    }
}

impl fmt::Display for RemainingToppings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} left", self.count, self.noun)
    }
}

/// Live price of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    pub size: Money,
    pub crust: Money,
    /// Sum of the per-topping prices.
    pub toppings: Money,
    pub total: Money,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfiguratorSummary {
    pub selection: Selection,
    pub sizes: Vec<SizeOption>,
    pub crusts: Vec<CrustOption>,
    pub toppings: Vec<ToppingView>,
    pub remaining: RemainingToppings,
    pub price: PriceBreakdown,
}

// =============================================================================
// Projections
// =============================================================================

impl<C> Configurator<C> {
    /// Sizes in catalog order with their relative price scale.
    ///
    /// If the most expensive size costs nothing every scale is 0.0.
    pub fn size_price_scale(&self) -> Vec<SizeOption> {
        let sizes = &self.menu().sizes;
        let max_price = sizes.iter().map(|s| s.price()).max().unwrap_or_default();
        let selected = self.selection().size.as_deref();

        sizes
            .iter()
            .map(|size| SizeOption {
                id: size.id.clone(),
                name: size.name.clone(),
                price: size.price(),
                max_toppings: size.max_toppings,
                price_scale: size.price().fraction_of(max_price),
                selected: selected == Some(size.id.as_str()),
            })
            .collect()
    }

    pub fn crust_options(&self) -> Vec<CrustOption> {
        let selected = self.selection().crust.as_deref();

        self.menu()
            .crusts
            .iter()
            .map(|crust| CrustOption {
                id: crust.id.clone(),
                name: crust.name.clone(),
                price: crust.price(),
                image: crust.image.clone(),
                selected: selected == Some(crust.id.as_str()),
            })
            .collect()
    }

    /// Ingredients in catalog order with selection state and price.
    pub fn topping_views(&self) -> Vec<ToppingView> {
        self.menu()
            .ingredients
            .iter()
            .map(|ingredient| ToppingView {
                id: ingredient.id.clone(),
                name: ingredient.name.clone(),
                image: ingredient.image.clone(),
                selected: self.is_topping_selected(&ingredient.id),
                selectable: self.is_topping_selectable(&ingredient.id),
                price: self.compute_topping_price(&ingredient.id),
            })
            .collect()
    }

    pub fn remaining_toppings(&self) -> RemainingToppings {
        RemainingToppings::new(self.max_toppings().saturating_sub(self.topping_count()))
    }

    /// Size + crust + every selected topping's computed price.
    /// Ids missing from the catalogs contribute nothing.
    pub fn price_breakdown(&self) -> PriceBreakdown {
        let selection = self.selection();
        let menu = self.menu();

        let size = selection
            .size
            .as_deref()
            .and_then(|id| menu.sizes.get(id))
            .map(|s| s.price())
            .unwrap_or_default();
        let crust = selection
            .crust
            .as_deref()
            .and_then(|id| menu.crusts.get(id))
            .map(|c| c.price())
            .unwrap_or_default();
        let toppings: Money = selection
            .toppings
            .iter()
            .map(|id| self.compute_topping_price(id))
            .sum();

        PriceBreakdown {
            size,
            crust,
            toppings,
            total: size + crust + toppings,
        }
    }

    pub fn summary(&self) -> ConfiguratorSummary {
        ConfiguratorSummary {
            selection: self.selection().clone(),
            sizes: self.size_price_scale(),
            crusts: self.crust_options(),
            toppings: self.topping_views(),
            remaining: self.remaining_toppings(),
            price: self.price_breakdown(),
        }
    }
}
