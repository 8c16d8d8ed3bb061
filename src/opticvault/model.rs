//! # Data Model
//!
//! [`Item`] is the persisted record. [`ItemDraft`] is what a form hands to the
//! repository: every field except the id, with the price still as free-form
//! text. Turning a draft into an item is where trimming, validation and price
//! coercion happen, so no invalid item can ever reach the store.
//!
//! Records are encoded with camelCase field names and a numeric `price` so
//! that collections written by earlier releases of the app decode unchanged.

use crate::error::{Result, VaultError};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    Used,
    Vintage,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::New, Condition::Used, Condition::Vintage];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Vintage => "Vintage",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VaultError::Validation(format!("Unknown condition: {}", s)))
    }
}

/// One catalogued piece of eyewear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default, with = "price_field")]
    pub price: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,
}

/// User-supplied values for a new or edited item.
///
/// `price` is kept as the raw text the user typed; see [`parse_price`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub brand: String,
    pub model: String,
    pub condition: Condition,
    pub price: String,
    pub notes: String,
    pub photo_uri: Option<String>,
}

impl ItemDraft {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Seed a draft from a stored item, as the edit form does.
    pub fn from_item(item: &Item) -> Self {
        Self {
            brand: item.brand.clone(),
            model: item.model.clone(),
            condition: item.condition,
            price: item.price.to_string(),
            notes: item.notes.clone(),
            photo_uri: item.photo_uri.clone(),
        }
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn photo(mut self, photo_uri: Option<String>) -> Self {
        self.photo_uri = photo_uri;
        self
    }

    /// Check the required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.brand.trim().is_empty() {
            missing.push("brand");
        }
        if self.model.trim().is_empty() {
            missing.push("model");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(VaultError::Validation(format!(
                "{} required",
                missing.join(" and ")
            )))
        }
    }

    /// Validate and normalize into a stored record carrying `id`.
    pub fn into_item(self, id: String) -> Result<Item> {
        self.validate()?;
        let photo_uri = self.photo_uri.filter(|uri| !uri.trim().is_empty());
        Ok(Item {
            id,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            condition: self.condition,
            price: parse_price(&self.price),
            notes: self.notes.trim().to_string(),
            photo_uri,
        })
    }
}

/// Largest accepted price. Anything above it is treated as out of range.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2); // 999999999999.99

/// Prices are kept to the cent.
pub const PRICE_SCALE: u32 = 2;

/// Coerce free-form price text into a non-negative decimal.
///
/// The whole trimmed text must be a number (`"150"`, `"19.99"`, `"1.5e2"`);
/// trailing units such as `"150 USD"` make it unparsable. Empty, unparsable,
/// negative or out-of-range (above [`MAX_PRICE`]) input yields exactly zero.
/// Accepted values are rounded half away from zero to [`PRICE_SCALE`]
/// places. Never fails.
pub fn parse_price(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) if value.is_sign_negative() || value > MAX_PRICE => Decimal::ZERO,
        Ok(value) => {
            value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        }
        Err(_) => Decimal::ZERO,
    }
}

/// Prices are written as JSON numbers. Reading accepts numbers or strings and
/// applies the same coercion as form input.
///
/// Every price [`parse_price`] accepts has at most 14 significant digits, so
/// the shortest float text written here reads back as the same decimal.
mod price_field {
    use super::parse_price;
    use rust_decimal::Decimal;
    use serde::{ser, Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let value: f64 = price
            .to_string()
            .parse()
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_f64(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Number(n) => parse_price(&n.to_string()),
            Value::String(s) => parse_price(&s),
            _ => Decimal::ZERO,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    /// The mode to render with: the user's stored choice, or the platform
    /// scheme when nothing valid is stored.
    pub fn resolve(stored: Option<AppearanceMode>, system: AppearanceMode) -> AppearanceMode {
        stored.unwrap_or(system)
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppearanceMode {
    type Err = VaultError;

    /// Exact match only; the stored scalar is compared verbatim.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            other => Err(VaultError::Validation(format!(
                "Unknown appearance mode: {}",
                other
            ))),
        }
    }
}
