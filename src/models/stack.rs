//! Stack catalog types.
//!
//! The catalog itself is compiled in (see the `stacks` module); it is not
//! user-editable content.

use serde::{Deserialize, Serialize};

/// Category of a stack entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StackType {
    Frontend,
    Backend,
    DevOps,
    #[serde(rename = "ETC")]
    Etc,
}

impl StackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StackType::Frontend => "Frontend",
            StackType::Backend => "Backend",
            StackType::DevOps => "DevOps",
            StackType::Etc => "ETC",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Frontend" => Some(StackType::Frontend),
            "Backend" => Some(StackType::Backend),
            "DevOps" => Some(StackType::DevOps),
            "ETC" => Some(StackType::Etc),
            _ => None,
        }
    }

    /// Fixed display order: Frontend < Backend < DevOps < ETC.
    pub fn rank(&self) -> usize {
        match self {
            StackType::Frontend => 0,
            StackType::Backend => 1,
            StackType::DevOps => 2,
            StackType::Etc => 3,
        }
    }

    /// All categories in display order.
    pub const ALL: [StackType; 4] = [
        StackType::Frontend,
        StackType::Backend,
        StackType::DevOps,
        StackType::Etc,
    ];
}

/// One entry in the static stack catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub id: i64,
    pub stack_type: Vec<StackType>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    /// Manual ranking flag: featured entries sort before the rest.
    #[serde(default)]
    pub featured: bool,
    /// Manual ranking flag with precedence over `featured`.
    #[serde(default)]
    pub super_featured: bool,
}
