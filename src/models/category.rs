use serde::{Deserialize, Serialize};

/// One named class in the taxonomy. The hints document what typically falls
/// into the category; they are never matched against request text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub hints: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, hints: &[&str]) -> Self {
        Self {
            name: name.into(),
            hints: hints.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
