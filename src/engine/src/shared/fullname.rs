use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        FullName {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => write!(f, "{} {}", self.first_name, self.last_name),
            (true, _) => write!(f, "{}", self.last_name),
            (false, true) => write!(f, "{}", self.first_name),
        }
    }
}
