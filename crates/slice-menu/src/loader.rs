//! # Menu Loader
//!
//! Parses JSON menu documents into a validated [`Menu`].
//!
//! ## File Layout
//! ```json
//! {
//!   "sizes":       [{ "id": "small", "name": "Small", "priceCents": 899, "maxToppings": 3 }],
//!   "crusts":      [{ "id": "thin", "name": "Thin", "priceCents": 0, "image": "thin.png" }],
//!   "ingredients": [{ "id": "basil", "name": "Basil", "image": "basil.png" }],
//!   "pricing":     { "freeToppingAllowance": 3, "toppingPriceCents": 150 }
//! }
//! ```
//! Arrays keep their order on screen. `pricing` is optional; when it is
//! missing the caller's fallback rules apply. A partial `pricing` block
//! fills its missing fields from [`PricingRules::default`].

use std::fs;
use std::path::Path;

use serde::Deserialize;
use slice_core::{Crust, Ingredient, Menu, PricingRules, Size};
use tracing::{debug, info};

use crate::error::{MenuError, MenuResult};

/// Raw shape of a menu document, before catalog checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MenuFile {
    sizes: Vec<Size>,
    crusts: Vec<Crust>,
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    pricing: Option<PricingRules>,
}

/// Parses a menu document.
///
/// ## Example
/// ```rust
/// use slice_core::PricingRules;
/// use slice_menu::parse_menu;
///
/// let json = r#"{
///     "sizes": [{ "id": "small", "name": "Small", "priceCents": 899, "maxToppings": 3 }],
///     "crusts": [],
///     "ingredients": []
/// }"#;
/// let menu = parse_menu(json, PricingRules::default()).unwrap();
/// assert_eq!(menu.sizes.len(), 1);
/// assert_eq!(menu.pricing, PricingRules::default());
/// ```
pub fn parse_menu(json: &str, fallback_pricing: PricingRules) -> MenuResult<Menu> {
    let file: MenuFile = serde_json::from_str(json)?;
    let pricing = file.pricing.unwrap_or(fallback_pricing);

    let menu = Menu::try_new(file.sizes, file.crusts, file.ingredients, pricing)?;
    debug!(
        sizes = menu.sizes.len(),
        crusts = menu.crusts.len(),
        ingredients = menu.ingredients.len(),
        "menu parsed"
    );
    Ok(menu)
}

/// Reads and parses a menu file.
pub fn load_menu_file(path: &Path, fallback_pricing: PricingRules) -> MenuResult<Menu> {
    let json = fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let menu = parse_menu(&json, fallback_pricing)?;
    info!(path = %path.display(), "menu loaded");
    Ok(menu)
}
