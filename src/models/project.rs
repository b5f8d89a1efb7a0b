//! Project model and its string enums.

use serde::{Deserialize, Serialize};

/// Kind of project in the portfolio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectType {
    #[serde(rename = "Toy-project")]
    ToyProject,
    #[serde(rename = "Side-project")]
    SideProject,
    #[serde(rename = "Company-project")]
    CompanyProject,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::ToyProject => "Toy-project",
            ProjectType::SideProject => "Side-project",
            ProjectType::CompanyProject => "Company-project",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Toy-project" => Some(ProjectType::ToyProject),
            "Side-project" => Some(ProjectType::SideProject),
            "Company-project" => Some(ProjectType::CompanyProject),
            _ => None,
        }
    }
}

/// Role held on a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Frontend,
    Backend,
    Fullstack,
    Infra,
    Design,
    Lead,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Frontend => "Frontend",
            Role::Backend => "Backend",
            Role::Fullstack => "Fullstack",
            Role::Infra => "Infra",
            Role::Design => "Design",
            Role::Lead => "Lead",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Frontend" => Some(Role::Frontend),
            "Backend" => Some(Role::Backend),
            "Fullstack" => Some(Role::Fullstack),
            "Infra" => Some(Role::Infra),
            "Design" => Some(Role::Design),
            "Lead" => Some(Role::Lead),
            _ => None,
        }
    }
}

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_type: ProjectType,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub company_name: String,
    pub project_name: String,
    #[serde(default)]
    pub short_description: String,
    pub started_at: String,
    /// Empty string means the project is ongoing.
    #[serde(default)]
    pub ended_at: String,
    #[serde(default)]
    pub stack_ids: Vec<i64>,
}

/// Request body for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub project_type: ProjectType,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub company_name: String,
    pub project_name: String,
    #[serde(default)]
    pub short_description: String,
    pub started_at: String,
    #[serde(default)]
    pub ended_at: String,
    #[serde(default)]
    pub stack_ids: Vec<i64>,
}
