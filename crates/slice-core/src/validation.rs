//! # Validation Module
//!
//! Validation for menu data before it reaches a configurator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Menu file / house menu                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu::try_new / Menu::validate ◄── THIS MODULE                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Configurator (trusts its menu, never fails)                           │
//! │                                                                         │
//! │  Click events are NOT validated: the rendering layer only forwards     │
//! │  ids it read from the same catalogs.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Crust, Ingredient, PricingRules, Size};
use crate::MAX_TOPPINGS_PER_SIZE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Only letters, numbers, hyphens and underscores
///
/// ## Example
/// ```rust
/// use slice_core::validation::validate_id;
///
/// assert!(validate_id("extra-cheese").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("extra cheese").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name (non-empty, at most 100 characters).
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (a free crust).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a size's topping cap against `MAX_TOPPINGS_PER_SIZE`.
pub fn validate_max_toppings(max_toppings: usize) -> ValidationResult<()> {
    if max_toppings > MAX_TOPPINGS_PER_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "maxToppings".to_string(),
            min: 0,
            max: MAX_TOPPINGS_PER_SIZE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Entry Validators
// =============================================================================

pub fn validate_size(size: &Size) -> ValidationResult<()> {
    validate_id(&size.id)?;
    validate_display_name(&size.name)?;
    validate_price_cents("size price", size.price_cents)?;
    validate_max_toppings(size.max_toppings)
}

pub fn validate_crust(crust: &Crust) -> ValidationResult<()> {
    validate_id(&crust.id)?;
    validate_display_name(&crust.name)?;
    validate_price_cents("crust price", crust.price_cents)
}

pub fn validate_ingredient(ingredient: &Ingredient) -> ValidationResult<()> {
    validate_id(&ingredient.id)?;
    validate_display_name(&ingredient.name)
}

/// Validates pricing rules. Any allowance is fine, including zero
/// ("every topping is paid").
pub fn validate_pricing_rules(rules: &PricingRules) -> ValidationResult<()> {
    validate_price_cents("topping price", rules.topping_price_cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("large").is_ok());
        assert!(validate_id("deep_dish-2").is_ok());

        assert!(validate_id("").is_err());
        assert!(validate_id("   ").is_err());
        assert!(validate_id("has space").is_err());
        assert!(validate_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Extra Cheese").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents("price", 0).is_ok());
        assert!(validate_price_cents("price", 1499).is_ok());
        assert!(matches!(
            validate_price_cents("price", -1),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_validate_max_toppings() {
        assert!(validate_max_toppings(0).is_ok());
        assert!(validate_max_toppings(MAX_TOPPINGS_PER_SIZE).is_ok());
        assert!(validate_max_toppings(MAX_TOPPINGS_PER_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_size_reports_first_problem() {
        let size = Size {
            id: "small".to_string(),
            name: String::new(),
            price_cents: -5,
            max_toppings: 3,
        };
        assert!(matches!(
            validate_size(&size),
            Err(ValidationError::Required { ref field }) if field == "name"
        ));
    }

    #[test]
    fn test_validate_pricing_rules() {
        assert!(validate_pricing_rules(&PricingRules::default()).is_ok());

        let negative = PricingRules {
            free_topping_allowance: 0,
            topping_price_cents: -150,
        };
        assert!(validate_pricing_rules(&negative).is_err());
    }
}
