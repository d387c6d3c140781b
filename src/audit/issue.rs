//! Issue reporting types.
//!
//! The reporting surface that renders findings lives outside this crate;
//! these are the records it consumes.

use serde::Serialize;

use crate::audit::stats::SceneProperty;

/// Area of the project an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum IssueCategory {
    Scenes,
}

/// Identifies the kind of finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProblemDescriptor {
    pub id: u32,
    pub description: &'static str,
}

impl ProblemDescriptor {
    #[must_use]
    pub const fn new(id: u32, description: &'static str) -> Self {
        Self { id, description }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyFormat {
    String,
    Integer,
}

/// What a layout column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyType {
    /// The issue's description
    Description,
    /// One of the issue's custom properties
    Custom(SceneProperty),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
    pub ty: PropertyType,
    pub format: PropertyFormat,
    pub name: &'static str,
    pub long_name: &'static str,
}

/// Column layout of one issue category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueLayout {
    pub category: IssueCategory,
    pub properties: Vec<PropertyDefinition>,
}

/// One reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectIssue {
    pub descriptor: ProblemDescriptor,
    pub description: String,
    pub category: IssueCategory,
    pub location: String,
    /// Ordered custom values, formatted as strings
    pub custom_properties: Vec<String>,
}

impl ProjectIssue {
    #[must_use]
    pub fn new(
        descriptor: ProblemDescriptor,
        description: &str,
        category: IssueCategory,
        location: &str,
    ) -> Self {
        Self {
            descriptor,
            description: description.to_string(),
            category,
            location: location.to_string(),
            custom_properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Vec<String>) -> Self {
        self.custom_properties = properties;
        self
    }

    #[must_use]
    pub fn property(&self, property: SceneProperty) -> Option<&str> {
        self.custom_properties
            .get(property.index())
            .map(String::as_str)
    }

    #[must_use]
    pub fn property_as_usize(&self, property: SceneProperty) -> Option<usize> {
        self.property(property)?.parse().ok()
    }
}
