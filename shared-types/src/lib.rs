use serde::{Deserialize, Serialize};

/// A single customer record, as persisted in the collection file.
///
/// The on-disk collection is a JSON array of these objects; the field
/// names below are the contract other tools reading the file must honor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub company: String,
}

impl Customer {
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            company: company.into(),
        }
    }
}
