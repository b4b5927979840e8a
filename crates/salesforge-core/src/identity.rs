use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Document-type code identifying a national ID kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocType {
    #[serde(rename = "CC")]
    Cc,
    #[serde(rename = "CE")]
    Ce,
}

impl DocType {
    /// All codes in the closed set, in a fixed order for uniform sampling.
    pub const ALL: [DocType; 2] = [DocType::Cc, DocType::Ce];

    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Cc => "CC",
            DocType::Ce => "CE",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CC" => Ok(DocType::Cc),
            "CE" => Ok(DocType::Ce),
            other => Err(Error::UnknownDocType(other.to_string())),
        }
    }
}

/// Composite salesman identity.
///
/// Its `Display` form is `<docType>_<docNumber>`, bit-identical to the stem
/// of the salesman's sales file, so roster entries and sales files correlate
/// through this one value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SalesmanId {
    pub doc_type: DocType,
    pub doc_number: u64,
}

impl SalesmanId {
    pub fn new(doc_type: DocType, doc_number: u64) -> Self {
        Self {
            doc_type,
            doc_number,
        }
    }
}

impl fmt::Display for SalesmanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.doc_type, self.doc_number)
    }
}

impl FromStr for SalesmanId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split('_').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidSalesmanKey(value.to_string()));
        }
        let doc_type: DocType = parts[0].parse()?;
        let doc_number: u64 = parts[1]
            .parse()
            .map_err(|_| Error::InvalidNumber {
                field: "doc number",
                value: parts[1].to_string(),
            })?;
        Ok(Self {
            doc_type,
            doc_number,
        })
    }
}
