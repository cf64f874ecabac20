//! Locator model definition.

use serde::{Deserialize, Serialize};

use super::{Confidence, ElementType};

/// A named reference to a UI element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locator {
    /// Identifier, unique within a plan
    pub name: String,

    /// Accessor-style selector expression, e.g. `getByLabel('Password')`
    pub selector: String,

    /// Kind of element the selector resolves to
    #[serde(rename = "type")]
    pub element: ElementType,

    /// How directly the source text implied this element
    pub confidence: Confidence,
}
