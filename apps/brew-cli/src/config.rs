//! # Menu Configuration
//!
//! Price tables for the console app, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BREW__BEVERAGES__MOCHA=420`)
//! 2. Config file (`$BREW_MENU`, else `brew.toml` in the working directory)
//! 3. Defaults (the reference menu in `brew_core::pricing`)
//!
//! Tables merge key by key, so a file only needs to list what it adds or
//! changes. All prices are whole cents.
//!
//! ```toml
//! [beverages]
//! mocha = 420
//!
//! [extras]
//! honey = 30
//! ```

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use brew_core::pricing::{
    REFERENCE_BASE_PRICES, REFERENCE_EXTRA_SURCHARGES, REFERENCE_SIZE_SURCHARGES,
};
use brew_core::validation::{normalize_token, validate_price_table};
use brew_core::{ExtrasModifier, Money, PricingEngine, SizeModifier, ValidationError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

/// Environment variable naming an explicit menu file.
pub const MENU_PATH_ENV: &str = "BREW_MENU";

/// Prefix for per-price environment overrides.
pub const ENV_PREFIX: &str = "BREW";

/// Menu file looked up in the working directory when `BREW_MENU` is unset.
const DEFAULT_MENU_FILE: &str = "brew";

/// Menu as it appears in config sources, before validation.
#[derive(Debug, Deserialize)]
struct RawMenu {
    beverages: HashMap<String, i64>,
    sizes: HashMap<String, i64>,
    extras: HashMap<String, i64>,
}

/// Validated price tables.
///
/// ## Invariants
/// - Keys are normalised (trimmed, lower-case) and contain no whitespace
/// - Every price is between zero and `MAX_PRICE_CENTS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Base price per beverage.
    pub beverages: HashMap<String, Money>,

    /// Surcharge per size. Any other size is rejected when pricing.
    pub sizes: HashMap<String, Money>,

    /// Surcharge per extra. Any other extra is free.
    pub extras: HashMap<String, Money>,
}

impl MenuConfig {
    /// Loads the menu from defaults, the menu file and the environment.
    pub fn load() -> Result<Self, MenuConfigError> {
        let builder = Self::defaults()?;

        let builder = match env::var(MENU_PATH_ENV) {
            Ok(path) => builder.add_source(File::from(PathBuf::from(path)).required(true)),
            Err(_) => builder.add_source(File::with_name(DEFAULT_MENU_FILE).required(false)),
        };

        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::from_builder(builder)
    }

    /// Loads the menu from defaults overlaid with a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, MenuConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::from_builder(builder)
    }

    /// The reference menu, with no overrides.
    pub fn reference() -> Result<Self, MenuConfigError> {
        Self::from_builder(Self::defaults()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, MenuConfigError> {
        let mut builder = Config::builder();
        let tables = [
            ("beverages", REFERENCE_BASE_PRICES),
            ("sizes", REFERENCE_SIZE_SURCHARGES),
            ("extras", REFERENCE_EXTRA_SURCHARGES),
        ];

        for (table, entries) in tables {
            for (name, cents) in entries {
                builder = builder.set_default(format!("{table}.{name}"), *cents)?;
            }
        }

        Ok(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, MenuConfigError> {
        let raw: RawMenu = builder.build()?.try_deserialize()?;

        let menu = MenuConfig {
            beverages: to_money_table(raw.beverages),
            sizes: to_money_table(raw.sizes),
            extras: to_money_table(raw.extras),
        };
        menu.validate()?;

        Ok(menu)
    }

    /// Checks every table, returning the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_price_table("beverages", &self.beverages)?;
        validate_price_table("sizes", &self.sizes)?;
        validate_price_table("extras", &self.extras)?;
        Ok(())
    }

    /// Builds the pricing engine: base prices, then size, then extras.
    pub fn build_engine(&self) -> PricingEngine {
        PricingEngine::with_modifiers(
            self.beverages.clone(),
            vec![
                Box::new(SizeModifier::new(self.sizes.clone())),
                Box::new(ExtrasModifier::new(self.extras.clone())),
            ],
        )
    }

    /// Beverage names, cheapest first.
    pub fn beverage_names(&self) -> Vec<&str> {
        names_by_price(&self.beverages)
    }

    /// Size names, cheapest first.
    pub fn size_names(&self) -> Vec<&str> {
        names_by_price(&self.sizes)
    }
}

fn to_money_table(raw: HashMap<String, i64>) -> HashMap<String, Money> {
    raw.into_iter()
        .map(|(name, cents)| (normalize_token(&name), Money::from_cents(cents)))
        .collect()
}

/// Ties on price are broken by name so prompts are stable.
fn names_by_price(table: &HashMap<String, Money>) -> Vec<&str> {
    let mut entries: Vec<(&str, Money)> = table
        .iter()
        .map(|(name, price)| (name.as_str(), *price))
        .collect();
    entries.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    entries.into_iter().map(|(name, _)| name).collect()
}

/// Menu loading errors.
#[derive(Debug, thiserror::Error)]
pub enum MenuConfigError {
    #[error("Failed to read menu configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Invalid menu: {0}")]
    Invalid(#[from] ValidationError),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::CoffeeOrder;

    #[test]
    fn test_reference_menu() {
        let menu = MenuConfig::reference().unwrap();
        assert_eq!(menu.beverage_names(), vec!["espresso", "latte", "cappuccino"]);
        assert_eq!(menu.size_names(), vec!["small", "medium", "large"]);
        assert_eq!(menu.extras.get("caramel"), Some(&Money::from_cents(70)));
    }

    #[test]
    fn test_reference_engine_prices_like_core() {
        let engine = MenuConfig::reference().unwrap().build_engine();
        let order = CoffeeOrder::from_raw("latte", "medium", "soy, oat");
        assert_eq!(engine.calculate(&order).unwrap(), Money::from_cents(490));
    }

    #[test]
    fn test_toml_overlay_adds_and_overrides() {
        let menu = MenuConfig::from_toml_str(
            r#"
            [beverages]
            mocha = 420
            espresso = 270

            [extras]
            honey = 30
            "#,
        )
        .unwrap();

        assert_eq!(menu.beverages.get("mocha"), Some(&Money::from_cents(420)));
        assert_eq!(menu.beverages.get("espresso"), Some(&Money::from_cents(270)));
        assert_eq!(menu.beverages.get("latte"), Some(&Money::from_cents(350)));

        let engine = menu.build_engine();
        let order = CoffeeOrder::from_raw("mocha", "large", "honey, water");
        assert_eq!(engine.calculate(&order).unwrap().cents(), 420 + 100 + 30);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = MenuConfig::from_toml_str("[extras]\nrefund = -50\n").unwrap_err();
        assert!(matches!(
            err,
            MenuConfigError::Invalid(ValidationError::MustBeNonNegative { cents: -50, .. })
        ));
    }

    #[test]
    fn test_price_near_i64_max_is_rejected() {
        let err = MenuConfig::from_toml_str("[beverages]\nmocha = 9223372036854775807\n")
            .unwrap_err();
        assert!(matches!(
            err,
            MenuConfigError::Invalid(ValidationError::TooLarge { cents: i64::MAX, .. })
        ));
    }

    /// Environment and `BREW_MENU` are process-wide, so every case that
    /// touches them lives in this one test.
    #[test]
    fn test_load_layers_file_then_env() {
        let path = env::temp_dir().join(format!("brew-menu-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[beverages]\nmocha = 300\n\n[sizes]\nsmall = 10\n").unwrap();

        env::set_var(MENU_PATH_ENV, &path);
        let from_file = MenuConfig::load().unwrap();
        assert_eq!(from_file.beverages.get("mocha"), Some(&Money::from_cents(300)));
        assert_eq!(from_file.sizes.get("small"), Some(&Money::from_cents(10)));

        env::set_var("BREW__BEVERAGES__MOCHA", "420");
        env::set_var("BREW__SIZES__SMALL", "5");
        let with_env = MenuConfig::load().unwrap();
        assert_eq!(with_env.beverages.get("mocha"), Some(&Money::from_cents(420)));
        assert_eq!(with_env.sizes.get("small"), Some(&Money::from_cents(5)));
        assert_eq!(with_env.beverages.get("latte"), Some(&Money::from_cents(350)));

        env::set_var(MENU_PATH_ENV, env::temp_dir().join("brew-menu-missing/none.toml"));
        let missing = MenuConfig::load();

        env::remove_var(MENU_PATH_ENV);
        env::remove_var("BREW__BEVERAGES__MOCHA");
        env::remove_var("BREW__SIZES__SMALL");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(missing, Err(MenuConfigError::Source(_))));
    }

    #[test]
    fn test_malformed_toml_is_a_source_error() {
        let err = MenuConfig::from_toml_str("[beverages\nmocha = ").unwrap_err();
        assert!(matches!(err, MenuConfigError::Source(_)));
    }
}
