//! Question classification tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse topic tag assigned to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    VirtualEnvironment,
    DjangoFramework,
    FlaskFramework,
    ApiDevelopment,
    Deployment,
    Docker,
    Testing,
    Debugging,
    /// Only produced by seed data
    ProjectSetup,
    General,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::VirtualEnvironment,
        Category::DjangoFramework,
        Category::FlaskFramework,
        Category::ApiDevelopment,
        Category::Deployment,
        Category::Docker,
        Category::Testing,
        Category::Debugging,
        Category::ProjectSetup,
        Category::General,
    ];

    /// Tag as stored in the knowledge base
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::VirtualEnvironment => "virtual_environment",
            Category::DjangoFramework => "django_framework",
            Category::FlaskFramework => "flask_framework",
            Category::ApiDevelopment => "api_development",
            Category::Deployment => "deployment",
            Category::Docker => "docker",
            Category::Testing => "testing",
            Category::Debugging => "debugging",
            Category::ProjectSetup => "project_setup",
            Category::General => "general",
        }
    }

    /// Parse a stored tag, `None` for anything outside the enumeration
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse experience-level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
