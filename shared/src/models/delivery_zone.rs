//! Delivery Zone Model

use crate::error::{AppError, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery zone with a flat fee (Pick Up is free)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeliveryZone {
    #[default]
    PickUp,
    Local,
    Metro,
    Suburban,
    Regional,
    Remote,
}

impl DeliveryZone {
    /// All zones in display order
    pub const ALL: [DeliveryZone; 6] = [
        DeliveryZone::PickUp,
        DeliveryZone::Local,
        DeliveryZone::Metro,
        DeliveryZone::Suburban,
        DeliveryZone::Regional,
        DeliveryZone::Remote,
    ];

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PickUp => "Pick Up",
            Self::Local => "Local",
            Self::Metro => "Metro",
            Self::Suburban => "Suburban",
            Self::Regional => "Regional",
            Self::Remote => "Remote",
        }
    }

    /// Flat delivery fee for this zone
    pub fn fee(&self) -> Decimal {
        match self {
            Self::PickUp => Decimal::ZERO,
            Self::Local => Decimal::from(200),
            Self::Metro => Decimal::from(250),
            Self::Suburban => Decimal::from(300),
            Self::Regional => Decimal::from(400),
            Self::Remote => Decimal::from(500),
        }
    }

    pub fn is_pick_up(&self) -> bool {
        matches!(self, Self::PickUp)
    }
}

impl fmt::Display for DeliveryZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeliveryZone {
    type Err = AppError;

    /// Case-insensitive; spaces, dashes and underscores are ignored ("pick-up" == "Pick Up")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|zone| {
                zone.name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .flat_map(char::to_lowercase)
                    .eq(key.chars())
            })
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::UnknownDeliveryZone,
                    format!("unknown delivery zone: {}", s.trim()),
                )
                .with_detail("zone", s.trim())
            })
    }
}

impl TryFrom<String> for DeliveryZone {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeliveryZone> for String {
    fn from(zone: DeliveryZone) -> Self {
        zone.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_up_is_free() {
        assert_eq!(DeliveryZone::PickUp.fee(), Decimal::ZERO);
        assert!(DeliveryZone::PickUp.is_pick_up());
        assert_eq!(DeliveryZone::default(), DeliveryZone::PickUp);
    }

    #[test]
    fn test_fees_within_range() {
        for zone in DeliveryZone::ALL.iter().filter(|z| !z.is_pick_up()) {
            assert!(zone.fee() >= Decimal::from(200), "{zone}");
            assert!(zone.fee() <= Decimal::from(500), "{zone}");
        }
    }

    #[test]
    fn test_parse_zone_names() {
        assert_eq!("Pick Up".parse::<DeliveryZone>().unwrap(), DeliveryZone::PickUp);
        assert_eq!("pickup".parse::<DeliveryZone>().unwrap(), DeliveryZone::PickUp);
        assert_eq!("pick-up".parse::<DeliveryZone>().unwrap(), DeliveryZone::PickUp);
        assert_eq!(" METRO ".parse::<DeliveryZone>().unwrap(), DeliveryZone::Metro);

        let err = "Mars".parse::<DeliveryZone>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownDeliveryZone);
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&DeliveryZone::PickUp).unwrap();
        assert_eq!(json, "\"Pick Up\"");

        let zone: DeliveryZone = serde_json::from_str("\"Remote\"").unwrap();
        assert_eq!(zone, DeliveryZone::Remote);
    }
}
