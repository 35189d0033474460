//! Selector model for find-style endpoints
//!
//! A `Selector` is the request body of every `POST <resource>/find` call:
//! filter conditions, sort order, an optional field projection and a
//! pagination window.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;

/// Filter/sort/pagination specification sent to a find endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub order_by: Vec<OrderSpec>,

    pub pagination: SelectorPagination,

    /// Field projection; omitted from the wire when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl Selector {
    /// Create a selector with the given page window.
    ///
    /// A zero `limit` is replaced by the default page size so the
    /// `limit > 0` invariant always holds.
    #[must_use]
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            conditions: Vec::new(),
            order_by: Vec::new(),
            pagination: SelectorPagination::new(limit, offset),
            fields: None,
        }
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    #[must_use]
    pub fn with_order_by(mut self, order_by: Vec<OrderSpec>) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the projection. An empty list clears it.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = if fields.is_empty() { None } else { Some(fields) };
        self
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT, 0)
    }
}

/// Page window of a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorPagination {
    pub offset: u32,
    pub limit: u32,
}

impl SelectorPagination {
    #[must_use]
    pub fn new(limit: u32, offset: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_PAGE_LIMIT } else { limit };
        Self { offset, limit }
    }
}

/// A single filter condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    /// `In` carries one or more values; every other operator exactly one
    pub values: Vec<String>,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, values: Vec<String>) -> Self {
        Self { field: field.into(), operator, values }
    }
}

/// Filter operators understood by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equals,
    Contains,
    NotContains,
    In,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Operator {
    /// Wire name of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT_CONTAINS",
            Self::In => "IN",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sorting criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSpec {
    pub field: String,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl OrderSpec {
    pub fn new(field: impl Into<String>, sort_order: SortOrder) -> Self {
        Self { field: field.into(), sort_order }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}
