use crate::error::{Error, Result};
use crate::layout::SEPARATOR;

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: u32,
    name: String,
    price: u32,
}

impl Product {
    /// Builds a product, rejecting a zero id or an empty name.
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Result<Self> {
        let name = name.into();
        if id == 0 {
            return Err(Error::NonPositiveProductId);
        }
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self { id, name, price })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Unit price in minor currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn set_price(&mut self, price: u32) {
        self.price = price;
    }

    /// Formats the on-disk projection `id;name;price`.
    pub fn to_record(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.id,
            self.name,
            self.price,
            sep = SEPARATOR
        )
    }

    /// Parses a catalog line. Requires exactly three fields.
    pub fn parse_record(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(Error::FieldCount {
                expected: 3,
                got: parts.len(),
            });
        }
        let id: u32 = parts[0].trim().parse().map_err(|_| Error::InvalidNumber {
            field: "product id",
            value: parts[0].trim().to_string(),
        })?;
        let price: u32 = parts[2].trim().parse().map_err(|_| Error::InvalidNumber {
            field: "price",
            value: parts[2].trim().to_string(),
        })?;
        Self::new(id, parts[1].trim(), price)
    }
}
