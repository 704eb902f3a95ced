use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! impl_int_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub fn as_u32(&self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl core::str::FromStr for $t {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u32>().map(Self)
            }
        }
    };
}

/// Identifier of a catalog entry (item type).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

/// Identifier of a stocked lot (item unit).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(u32);

impl_int_newtype!(TypeId);
impl_int_newtype!(UnitId);

/// Catalog entry: a kind of item the stockroom tracks (e.g. "Rice").
///
/// Unique by `type_id`; created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    pub type_id: TypeId,
    pub name: String,
    pub category: String,
}

impl ItemType {
    pub fn new(type_id: TypeId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            type_id,
            name: name.into(),
            category: category.into(),
        }
    }
}

/// One stocked lot/batch of a given type, with quantity and provenance.
///
/// `type_id` is not checked against the catalog; a unit may reference a type
/// that does not exist. `expiration` is free text (source data mixes formats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUnit {
    pub unit_id: UnitId,
    pub type_id: TypeId,
    pub expiration: String,
    pub source: String,
    pub description: String,
    pub quantity: i64,
}

impl ItemUnit {
    /// Best-effort parse of the expiration string as a `YYYY-MM-DD` date.
    ///
    /// Returns `None` for any other format; never an error.
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.expiration.trim(), "%Y-%m-%d").ok()
    }

    /// Whether this lot is past its expiration date as of `today`.
    ///
    /// `None` when the expiration string is not a parseable date.
    pub fn is_expired(&self, today: NaiveDate) -> Option<bool> {
        self.expiration_date().map(|d| d < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_expiring(expiration: &str) -> ItemUnit {
        ItemUnit {
            unit_id: UnitId::new(1),
            type_id: TypeId::new(1),
            expiration: expiration.to_string(),
            source: "Donation".to_string(),
            description: "test lot".to_string(),
            quantity: 10,
        }
    }

    #[test]
    fn type_id_round_trips_through_display_and_parse() {
        let id = TypeId::new(42);
        let parsed: TypeId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&UnitId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn iso_expiration_parses() {
        let unit = unit_expiring("2024-12-31");
        assert_eq!(
            unit.expiration_date(),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
    }

    #[test]
    fn non_iso_expiration_yields_none() {
        for raw in ["12/31/2024", "end of 2024", "", "soon"] {
            assert_eq!(unit_expiring(raw).expiration_date(), None, "input {raw:?}");
        }
    }

    #[test]
    fn expiry_check_compares_against_given_day() {
        let unit = unit_expiring("2024-12-31");
        let before = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        assert_eq!(unit.is_expired(before), Some(false));
        assert_eq!(unit.is_expired(after), Some(true));
        assert_eq!(unit_expiring("unknown").is_expired(after), None);
    }
}
