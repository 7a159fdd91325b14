use {
    super::error::PurchaseCardError,
    rust_decimal::{Decimal, prelude::ToPrimitive},
    std::{fmt, str::FromStr},
};

/// Scaling factor applied to a restaurant total to leave headroom on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferMultiplier(Decimal);

impl BufferMultiplier {
    pub fn new(value: Decimal) -> Result<Self, PurchaseCardError> {
        if value < Decimal::ZERO {
            return Err(PurchaseCardError::Validation(format!(
                "buffer multiplier cannot be negative, got: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// `floor(self × amount)`, exact in decimal arithmetic.
    pub fn apply(&self, amount: i64) -> Result<i64, PurchaseCardError> {
        Decimal::from(amount)
            .checked_mul(self.0)
            .map(|scaled| scaled.floor())
            .and_then(|scaled| scaled.to_i64())
            .ok_or_else(|| {
                PurchaseCardError::Validation(format!(
                    "buffered amount overflows: {amount} × {}",
                    self.0
                ))
            })
    }
}

impl FromStr for BufferMultiplier {
    type Err = PurchaseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|e| {
            PurchaseCardError::Validation(format!("invalid buffer multiplier {s:?}: {e}"))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for BufferMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Amount still available to fund on the card for a delivery:
/// base amount + delivery fundings − fundings already used.
///
/// Only the non-partner base (estimate × buffer) exists. Partners would have
/// a base of 0, but there is no partner branch and every caller gets the
/// non-partner formula.
pub fn fundable_amount(
    multiplier: BufferMultiplier,
    restaurant_total: i64,
    total_funding: i64,
    funded_amount: i64,
) -> Result<i64, PurchaseCardError> {
    multiplier
        .apply(restaurant_total)?
        .checked_add(total_funding)
        .and_then(|amount| amount.checked_sub(funded_amount))
        .ok_or_else(|| {
            PurchaseCardError::Validation(format!(
                "fundable amount overflows: total={restaurant_total} funding={total_funding} funded={funded_amount}"
            ))
        })
}
