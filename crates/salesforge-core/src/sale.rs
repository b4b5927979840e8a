use crate::error::{Error, Result};
use crate::layout::SEPARATOR;

/// A single product/quantity pair from a sales file.
///
/// Example line: `3;5;` parses to product id 3, quantity 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sale {
    product_id: u32,
    quantity: u32,
}

impl Sale {
    pub fn new(product_id: u32, quantity: u32) -> Result<Self> {
        if product_id == 0 {
            return Err(Error::NonPositiveProductId);
        }
        if quantity == 0 {
            return Err(Error::NonPositiveQuantity);
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn product_id(self) -> u32 {
        self.product_id
    }

    pub fn quantity(self) -> u32 {
        self.quantity
    }

    /// Formats the on-disk projection `productId;quantity`.
    pub fn to_record(self) -> String {
        format!("{}{}{}", self.product_id, SEPARATOR, self.quantity)
    }

    /// Parses a sales line.
    ///
    /// At least two fields are required; a trailing separator is tolerated.
    /// Quantities are parsed as signed so that negative values report as
    /// non-positive rather than as a number-format failure.
    pub fn parse_record(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        if parts.len() < 2 {
            return Err(Error::TooFewFields {
                expected: 2,
                got: parts.len(),
            });
        }
        let product_id: u32 = parts[0].trim().parse().map_err(|_| Error::InvalidNumber {
            field: "product id",
            value: parts[0].trim().to_string(),
        })?;
        let quantity: i64 = parts[1].trim().parse().map_err(|_| Error::InvalidNumber {
            field: "quantity",
            value: parts[1].trim().to_string(),
        })?;
        if quantity <= 0 {
            return Err(Error::NonPositiveQuantity);
        }
        let quantity = u32::try_from(quantity).map_err(|_| Error::InvalidNumber {
            field: "quantity",
            value: parts[1].trim().to_string(),
        })?;
        Self::new(product_id, quantity)
    }
}
