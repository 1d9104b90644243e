//! # Menu Configuration
//!
//! Resolves which menu and pricing rules a builder session uses.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `pricing` block of the menu file, if one is configured
//! 2. Environment variables (`SLICE_*`)
//! 3. Defaults (slice-core constants)
//!
//! ## Environment Variables
//! - `SLICE_MENU_PATH`: JSON menu file; the house menu is used when unset
//! - `SLICE_FREE_TOPPINGS`: free-topping allowance (default 3)
//! - `SLICE_TOPPING_PRICE_CENTS`: price per extra topping (default 150)

use std::path::PathBuf;

use slice_core::{Menu, Money, PricingRules};
use tracing::info;

use crate::error::{ConfigError, MenuResult};
use crate::house::house_menu;
use crate::loader::load_menu_file;

pub const ENV_MENU_PATH: &str = "SLICE_MENU_PATH";
pub const ENV_FREE_TOPPINGS: &str = "SLICE_FREE_TOPPINGS";
pub const ENV_TOPPING_PRICE_CENTS: &str = "SLICE_TOPPING_PRICE_CENTS";

/// Where the menu comes from and which pricing rules apply by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// JSON menu file. `None` selects the house menu.
    pub menu_path: Option<PathBuf>,

    /// Pricing used unless the menu file carries its own.
    pub pricing: PricingRules,
}

impl MenuConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// ## Example
    /// ```rust
    /// use slice_menu::MenuConfig;
    ///
    /// let config = MenuConfig::from_lookup(|key| match key {
    ///     "SLICE_FREE_TOPPINGS" => Some("2".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.pricing.free_topping_allowance, 2);
    /// assert_eq!(config.pricing.topping_price_cents, 150);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingRules::default();

        let free_topping_allowance = match lookup(ENV_FREE_TOPPINGS) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue(ENV_FREE_TOPPINGS.to_string()))?,
            None => defaults.free_topping_allowance,
        };

        let topping_price_cents = match lookup(ENV_TOPPING_PRICE_CENTS) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|cents| *cents >= 0)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_TOPPING_PRICE_CENTS.to_string()))?,
            None => defaults.topping_price_cents,
        };

        let menu_path = lookup(ENV_MENU_PATH)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(MenuConfig {
            menu_path,
            pricing: PricingRules::new(
                free_topping_allowance,
                Money::from_cents(topping_price_cents),
            ),
        })
    }

    /// Resolves the configured menu.
    pub fn load_menu(&self) -> MenuResult<Menu> {
        match &self.menu_path {
            Some(path) => load_menu_file(path, self.pricing),
            None => {
                info!("no menu file configured, using house menu");
                Ok(house_menu()?.with_pricing(self.pricing))
            }
        }
    }
}
