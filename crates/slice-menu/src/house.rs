//! # House Menu
//!
//! The built-in menu used when no menu file is configured (demos,
//! development, first run).
//!
//! - 3 sizes: $8.99 / $11.99 / $14.99, up to 3 / 5 / 7 toppings
//! - 3 crusts: thin and classic at no charge, stuffed for $2.00
//! - 12 ingredients

use slice_core::{CoreResult, Crust, Ingredient, Menu, PricingRules, Size};

/// (id, name, price in cents, max toppings)
const SIZES: &[(&str, &str, i64, usize)] = &[
    ("small", "Small 10\"", 899, 3),
    ("medium", "Medium 12\"", 1199, 5),
    ("large", "Large 14\"", 1499, 7),
];

/// (id, name, price in cents)
const CRUSTS: &[(&str, &str, i64)] = &[
    ("thin", "Thin & Crispy", 0),
    ("classic", "Classic Hand-Tossed", 0),
    ("stuffed", "Cheese Stuffed", 200),
];

/// (id, name)
const INGREDIENTS: &[(&str, &str)] = &[
    ("mozzarella", "Extra Mozzarella"),
    ("pepperoni", "Pepperoni"),
    ("ham", "Ham"),
    ("sausage", "Italian Sausage"),
    ("mushroom", "Mushrooms"),
    ("onion", "Red Onion"),
    ("pepper", "Green Pepper"),
    ("olive", "Black Olives"),
    ("tomato", "Cherry Tomatoes"),
    ("basil", "Fresh Basil"),
    ("pineapple", "Pineapple"),
    ("jalapeno", "Jalapeños"),
];

/// Builds the house menu with default pricing rules.
pub fn house_menu() -> CoreResult<Menu> {
    let sizes = SIZES
        .iter()
        .map(|&(id, name, price_cents, max_toppings)| Size {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            max_toppings,
        })
        .collect();

    let crusts = CRUSTS
        .iter()
        .map(|&(id, name, price_cents)| Crust {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            image: image_path("crusts", id),
        })
        .collect();

    let ingredients = INGREDIENTS
        .iter()
        .map(|&(id, name)| Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            image: image_path("ingredients", id),
        })
        .collect();

    Menu::try_new(sizes, crusts, ingredients, PricingRules::default())
}

fn image_path(folder: &str, id: &str) -> String {
    format!("/images/{folder}/{id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_is_valid() {
        let menu = house_menu().unwrap();
        assert_eq!(menu.sizes.len(), 3);
        assert_eq!(menu.crusts.len(), 3);
        assert_eq!(menu.ingredients.len(), 12);
        assert_eq!(menu.pricing, PricingRules::default());
    }

    #[test]
    fn test_house_menu_largest_size_holds_most_toppings() {
        let menu = house_menu().unwrap();
        let large = menu.sizes.get("large").unwrap();
        assert!(menu.sizes.iter().all(|s| s.max_toppings <= large.max_toppings));
    }

    #[test]
    fn test_image_paths() {
        let menu = house_menu().unwrap();
        assert_eq!(
            menu.crusts.get("thin").map(|c| c.image.as_str()),
            Some("/images/crusts/thin.png")
        );
    }
}
