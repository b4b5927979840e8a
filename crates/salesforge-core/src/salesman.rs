use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::identity::{DocType, SalesmanId};
use crate::layout::SEPARATOR;

/// A salesman on the roster.
///
/// Equality and hashing consider only the `(doc_type, doc_number)` identity,
/// matching the correlation key used by the sales files.
#[derive(Debug, Clone)]
pub struct Salesman {
    id: SalesmanId,
    first_name: String,
    last_name: String,
}

impl Salesman {
    pub fn new(
        doc_type: DocType,
        doc_number: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(Error::EmptyField("first name"));
        }
        if last_name.trim().is_empty() {
            return Err(Error::EmptyField("last name"));
        }
        Ok(Self {
            id: SalesmanId::new(doc_type, doc_number),
            first_name,
            last_name,
        })
    }

    pub fn id(&self) -> SalesmanId {
        self.id
    }

    pub fn doc_type(&self) -> DocType {
        self.id.doc_type
    }

    pub fn doc_number(&self) -> u64 {
        self.id.doc_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<()> {
        let first_name = first_name.into();
        if first_name.trim().is_empty() {
            return Err(Error::EmptyField("first name"));
        }
        self.first_name = first_name;
        Ok(())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<()> {
        let last_name = last_name.into();
        if last_name.trim().is_empty() {
            return Err(Error::EmptyField("last name"));
        }
        self.last_name = last_name;
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Formats the roster projection `docType;docNumber;firstName;lastName`.
    pub fn to_record(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.id.doc_type,
            self.id.doc_number,
            self.first_name,
            self.last_name,
            sep = SEPARATOR
        )
    }

    /// Parses a roster line. Requires exactly four fields.
    pub fn parse_record(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split(SEPARATOR).collect();
        if parts.len() != 4 {
            return Err(Error::FieldCount {
                expected: 4,
                got: parts.len(),
            });
        }
        let doc_type: DocType = parts[0].trim().parse()?;
        let doc_number: u64 = parts[1].trim().parse().map_err(|_| Error::InvalidNumber {
            field: "doc number",
            value: parts[1].trim().to_string(),
        })?;
        Self::new(doc_type, doc_number, parts[2].trim(), parts[3].trim())
    }
}

impl PartialEq for Salesman {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Salesman {}

impl Hash for Salesman {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
