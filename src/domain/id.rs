use {super::error::PurchaseCardError, derive_more::Display};

/// Parse an integer boundary value, naming `field` in the error on failure.
///
/// Surrounding whitespace is ignored and a leading sign is accepted.
pub fn parse_int_field(value: &str, field: &'static str) -> Result<i64, PurchaseCardError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| PurchaseCardError::InvalidField {
            field,
            value: value.to_string(),
        })
}

/// Delivery identifier. Arrives as text at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct DeliveryId(i64);

impl DeliveryId {
    pub const FIELD: &'static str = "delivery id";

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn parse(raw: &str) -> Result<Self, PurchaseCardError> {
        parse_int_field(raw, Self::FIELD).map(Self)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}
