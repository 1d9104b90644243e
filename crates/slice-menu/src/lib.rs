//! # slice-menu: Menu Loading for Slice Builder
//!
//! Everything that touches the outside world before a
//! [`slice_core::Configurator`] starts: environment configuration, menu
//! files, the built-in house menu and logging setup.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()          RUST_LOG or "info,slice_core=debug,..."     │
//! │  2. MenuConfig::from_env()  SLICE_MENU_PATH, SLICE_FREE_TOPPINGS, ...   │
//! │  3. config.load_menu()      menu file, or house menu                    │
//! │  4. Configurator::new(menu, initial_order, checkout)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use slice_core::{Configurator, InitialOrder, Order};
//! use slice_menu::{init_tracing, MenuConfig, MenuResult};
//!
//! fn start() -> MenuResult<()> {
//!     init_tracing();
//!     let menu = MenuConfig::from_env()?.load_menu()?;
//!
//!     let mut builder = Configurator::new(menu, InitialOrder::default(), |order: Order| {
//!         println!("checkout: {order:?}");
//!     });
//!     builder.select_size("large");
//!     builder.finalize();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod house;
pub mod loader;
pub mod logging;

pub use config::MenuConfig;
pub use error::{ConfigError, MenuError, MenuResult};
pub use house::house_menu;
pub use loader::{load_menu_file, parse_menu};
pub use logging::init_tracing;
