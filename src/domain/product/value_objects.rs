use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Shelf price in agorot (1/100 shekel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn from_agorot(agorot: i64) -> DomainResult<Self> {
        if agorot < 0 {
            return Err(DomainError::Validation("price cannot be negative".into()));
        }
        Ok(Self(agorot))
    }

    pub fn agorot(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₪{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// How a product is priced at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleUnit {
    #[default]
    Unit,
    Kilogram,
}

impl SaleUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SaleUnit::Unit => "unit",
            SaleUnit::Kilogram => "kg",
        }
    }
}

impl FromStr for SaleUnit {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(SaleUnit::Unit),
            "kg" => Ok(SaleUnit::Kilogram),
            other => Err(DomainError::Validation(format!(
                "unknown sale unit `{other}`, expected `unit` or `kg`"
            ))),
        }
    }
}

impl fmt::Display for SaleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
