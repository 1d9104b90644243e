//! # Catalogs
//!
//! Insertion-ordered, id-keyed collections of menu entries, and the [`Menu`]
//! that bundles them with the pricing rules.
//!
//! ## Why Not a HashMap?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The rendering layer lists options in the order the menu declares them │
//! │                                                                         │
//! │    Small ── Medium ── Large        (declared order)   ✅               │
//! │    Large ── Small ── Medium        (hash order)       ❌               │
//! │                                                                         │
//! │  Menus hold a handful of entries, so a Vec with linear lookup keeps    │
//! │  order for free and is just as fast in practice.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Crust, Ingredient, PricingRules, Size};
use crate::validation;

// =============================================================================
// Catalog Entry Trait
// =============================================================================

/// Anything that can live in a [`Catalog`].
pub trait CatalogEntry {
    /// Human-readable catalog kind, used in error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl CatalogEntry for Size {
    const KIND: &'static str = "size";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for Crust {
    const KIND: &'static str = "crust";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogEntry for Ingredient {
    const KIND: &'static str = "ingredient";

    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, insertion-ordered set of entries keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// ```rust
    /// use slice_core::{Catalog, Ingredient};
    ///
    /// let basil = Ingredient { id: "basil".into(), name: "Basil".into(), image: "basil.png".into() };
    /// let catalog = Catalog::try_from_entries(vec![basil.clone()]).unwrap();
    /// assert_eq!(catalog.get("basil"), Some(&basil));
    ///
    /// assert!(Catalog::try_from_entries(vec![basil.clone(), basil]).is_err());
    /// ```
    pub fn try_from_entries(entries: Vec<T>) -> CoreResult<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|e| e.id() == entry.id()) {
                return Err(CoreError::DuplicateId {
                    catalog: T::KIND.to_string(),
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Catalog { entries })
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl<T> Catalog<T> {
    pub fn empty() -> Self {
        Catalog {
            entries: Vec::new(),
        }
    }

    /// First entry in declared order (the default pick).
    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    /// Iterates in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Catalog::empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Catalogs serialize as a plain JSON array.
impl<T: Serialize> Serialize for Catalog<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Deserializing goes through [`Catalog::try_from_entries`], so duplicate
/// ids are rejected at parse time.
impl<'de, T> Deserialize<'de> for Catalog<T>
where
    T: Deserialize<'de> + CatalogEntry,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<T>::deserialize(deserializer)?;
        Catalog::try_from_entries(entries).map_err(de::Error::custom)
    }
}

// =============================================================================
// Menu
// =============================================================================

/// Everything a configurator needs from its caller: three catalogs plus the
/// topping pricing rules.
///
/// Deserializing goes through [`Menu::validate`], so a menu read from JSON
/// holds the same guarantees as one built with [`Menu::try_new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMenu")]
pub struct Menu {
    pub sizes: Catalog<Size>,
    pub crusts: Catalog<Crust>,
    pub ingredients: Catalog<Ingredient>,
    pub pricing: PricingRules,
}

/// Wire shape of a [`Menu`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenu {
    sizes: Catalog<Size>,
    crusts: Catalog<Crust>,
    ingredients: Catalog<Ingredient>,
    #[serde(default)]
    pricing: PricingRules,
}

impl TryFrom<RawMenu> for Menu {
    type Error = CoreError;

    fn try_from(raw: RawMenu) -> Result<Self, Self::Error> {
        let menu = Menu {
            sizes: raw.sizes,
            crusts: raw.crusts,
            ingredients: raw.ingredients,
            pricing: raw.pricing,
        };
        menu.validate()?;
        Ok(menu)
    }
}

impl Menu {
    /// Assembles a menu from raw entry lists, rejecting duplicate ids and
    /// invalid entries.
    pub fn try_new(
        sizes: Vec<Size>,
        crusts: Vec<Crust>,
        ingredients: Vec<Ingredient>,
        pricing: PricingRules,
    ) -> CoreResult<Self> {
        let menu = Menu {
            sizes: Catalog::try_from_entries(sizes)?,
            crusts: Catalog::try_from_entries(crusts)?,
            ingredients: Catalog::try_from_entries(ingredients)?,
            pricing,
        };
        menu.validate()?;
        Ok(menu)
    }

    /// Runs every entry and the pricing rules through [`validation`].
    pub fn validate(&self) -> CoreResult<()> {
        for size in &self.sizes {
            validation::validate_size(size)?;
        }
        for crust in &self.crusts {
            validation::validate_crust(crust)?;
        }
        for ingredient in &self.ingredients {
            validation::validate_ingredient(ingredient)?;
        }
        validation::validate_pricing_rules(&self.pricing)?;
        Ok(())
    }

    /// Returns a copy of this menu with different pricing rules.
    pub fn with_pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(id: &str, price_cents: i64, max_toppings: usize) -> Size {
        Size {
            id: id.to_string(),
            name: id.to_uppercase(),
            price_cents,
            max_toppings,
        }
    }

    #[test]
    fn test_catalog_preserves_declared_order() {
        let catalog = Catalog::try_from_entries(vec![
            size("small", 899, 3),
            size("medium", 1199, 5),
            size("large", 1499, 7),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["small", "medium", "large"]);
        assert_eq!(catalog.first().map(|s| s.id.as_str()), Some("small"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let err = Catalog::try_from_entries(vec![size("small", 899, 3), size("small", 999, 4)])
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateId { ref id, .. } if id == "small"));
    }

    #[test]
    fn test_catalog_lookup_misses_unknown_ids() {
        let catalog = Catalog::try_from_entries(vec![size("small", 899, 3)]).unwrap();
        assert!(catalog.contains("small"));
        assert!(catalog.get("family").is_none());
    }

    #[test]
    fn test_catalog_deserialize_rejects_duplicates() {
        let json = r#"[
            { "id": "basil", "name": "Basil", "image": "basil.png" },
            { "id": "basil", "name": "Basil again", "image": "basil.png" }
        ]"#;
        let result: Result<Catalog<Ingredient>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_menu_try_new_validates_entries() {
        let result = Menu::try_new(
            vec![size("small", -1, 3)],
            Vec::new(),
            Vec::new(),
            PricingRules::default(),
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_menu_pricing_defaults_when_absent() {
        let menu: Menu =
            serde_json::from_str(r#"{ "sizes": [], "crusts": [], "ingredients": [] }"#).unwrap();
        assert_eq!(menu.pricing, PricingRules::default());
    }

    #[test]
    fn test_menu_deserialize_rejects_negative_price() {
        let json = r#"{
            "sizes": [{ "id": "small", "name": "Small", "priceCents": -100, "maxToppings": 3 }],
            "crusts": [],
            "ingredients": []
        }"#;
        let err = serde_json::from_str::<Menu>(json).unwrap_err();
        assert!(err.to_string().contains("size price must not be negative"));
    }

    #[test]
    fn test_menu_deserialize_rejects_invalid_pricing() {
        let json = r#"{
            "sizes": [],
            "crusts": [],
            "ingredients": [],
            "pricing": { "toppingPriceCents": -1 }
        }"#;
        let err = serde_json::from_str::<Menu>(json).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }
}
