//! Shipping estimate from a US zip code.
//!
//! Region is a first-digit heuristic; there is no carrier lookup.

use serde::{Deserialize, Serialize};

use skintilla_core::{DomainError, DomainResult, Money};

/// Orders strictly over this amount ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_dollars(75);

pub const INVALID_ZIP_MESSAGE: &str = "Please enter a valid 5-digit US zip code.";

/// A validated five-digit US zip code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(input: &str) -> DomainResult<Self> {
        if input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(DomainError::validation(INVALID_ZIP_MESSAGE))
        }
    }

    /// What the input field keeps from raw typing: digits only, at most five.
    pub fn sanitize(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).take(5).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn region(&self) -> Region {
        match self.0.as_bytes()[0] {
            b'0'..=b'3' => Region::East,
            b'8' | b'9' => Region::West,
            _ => Region::Central,
        }
    }
}

impl TryFrom<String> for ZipCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ZipCode> for String {
    fn from(value: ZipCode) -> Self {
        value.0
    }
}

impl core::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    East,
    Central,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    Standard,
    Express,
}

impl core::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
        })
    }
}

/// One delivery option. `cost == None` means free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub cost: Option<Money>,
    /// Business-day delivery window, inclusive.
    pub min_days: u8,
    pub max_days: u8,
}

impl ShippingOption {
    pub fn cost_label(&self) -> String {
        match self.cost {
            None => "Free".to_string(),
            Some(cost) => cost.to_string(),
        }
    }

    pub fn days_label(&self) -> String {
        format!("{}–{} business days", self.min_days, self.max_days)
    }
}

/// Standard (always free) and Express options for `zip`.
pub fn estimate_shipping(zip: &ZipCode) -> Vec<ShippingOption> {
    let ((std_min, std_max), express_cents, (exp_min, exp_max)) = match zip.region() {
        Region::East => ((3, 5), 995, (1, 2)),
        Region::West => ((5, 7), 1295, (2, 3)),
        Region::Central => ((4, 6), 1195, (2, 3)),
    };

    vec![
        ShippingOption {
            method: ShippingMethod::Standard,
            cost: None,
            min_days: std_min,
            max_days: std_max,
        },
        ShippingOption {
            method: ShippingMethod::Express,
            cost: Some(Money::from_cents(express_cents)),
            min_days: exp_min,
            max_days: exp_max,
        },
    ]
}

pub fn qualifies_for_free_shipping(order_total: Money) -> bool {
    order_total > FREE_SHIPPING_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_exactly_five_digits() {
        assert!(ZipCode::parse("10001").is_ok());
        for bad in ["", "1000", "100011", "1000a", " 10001", "１0001"] {
            let err = ZipCode::parse(bad).unwrap_err();
            assert_eq!(err, DomainError::validation(INVALID_ZIP_MESSAGE), "input {bad:?}");
        }
    }

    #[test]
    fn sanitize_strips_non_digits_and_truncates() {
        assert_eq!(ZipCode::sanitize("94-10 3xyz77"), "94103");
        assert_eq!(ZipCode::sanitize("abc"), "");
    }

    #[test]
    fn region_from_first_digit() {
        let region = |z: &str| ZipCode::parse(z).unwrap().region();
        assert_eq!(region("02139"), Region::East);
        assert_eq!(region("30301"), Region::East);
        assert_eq!(region("60601"), Region::Central);
        assert_eq!(region("73301"), Region::Central);
        assert_eq!(region("80202"), Region::West);
        assert_eq!(region("94103"), Region::West);
    }

    #[test]
    fn east_coast_estimate() {
        let options = estimate_shipping(&ZipCode::parse("10001").unwrap());
        assert_eq!(options[0].cost_label(), "Free");
        assert_eq!(options[0].days_label(), "3–5 business days");
        assert_eq!(options[1].method, ShippingMethod::Express);
        assert_eq!(options[1].cost_label(), "$9.95");
        assert_eq!(options[1].days_label(), "1–2 business days");
    }

    #[test]
    fn west_and_central_estimates() {
        let west = estimate_shipping(&ZipCode::parse("90210").unwrap());
        assert_eq!((west[0].min_days, west[0].max_days), (5, 7));
        assert_eq!(west[1].cost, Some(Money::from_cents(1295)));

        let central = estimate_shipping(&ZipCode::parse("55401").unwrap());
        assert_eq!((central[0].min_days, central[0].max_days), (4, 6));
        assert_eq!(central[1].cost_label(), "$11.95");
        assert_eq!(central[1].days_label(), "2–3 business days");
    }

    #[test]
    fn free_shipping_is_strictly_over_threshold() {
        assert!(!qualifies_for_free_shipping(Money::from_dollars(75)));
        assert!(qualifies_for_free_shipping(Money::from_cents(7501)));
        assert!(qualifies_for_free_shipping(Money::from_cents(9900)));
    }

    #[test]
    fn zip_deserialization_validates() {
        let ok: ZipCode = serde_json::from_str("\"33101\"").unwrap();
        assert_eq!(ok.region(), Region::East);
        assert!(serde_json::from_str::<ZipCode>("\"3310\"").is_err());
    }
}
