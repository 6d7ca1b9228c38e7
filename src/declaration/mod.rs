//! Parsed method declaration surface
//!
//! These types mirror what the syntax provider hands the reflection core for a
//! single method: the name, modifiers, parameter list, and whether the source
//! text states a return type. They carry no resolved types of their own; type
//! resolution happens against the declaration when a descriptor is built.

use crate::core::Visibility;
use serde::{Deserialize, Serialize};

/// One method declaration as it appears in source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub params: Vec<ParamDeclaration>,
    /// Whether the declaration itself states a return type
    pub has_return_type: bool,
    /// Raw documentation block attached to the declaration, if any. The
    /// descriptor never surfaces this text; it exists so the documentation
    /// extractor upstream has somewhere to read from.
    pub doc_comment: Option<String>,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            is_static: false,
            is_abstract: false,
            is_final: false,
            params: Vec::new(),
            has_return_type: false,
            doc_comment: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Append a parameter to the declaration
    pub fn with_param(mut self, param: ParamDeclaration) -> Self {
        self.params.push(param);
        self
    }

    /// Mark the declaration as stating a return type
    pub fn with_return_type(mut self, present: bool) -> Self {
        self.has_return_type = present;
        self
    }

    pub fn with_doc_comment(mut self, text: impl Into<String>) -> Self {
        self.doc_comment = Some(text.into());
        self
    }
}

/// One parameter of a method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDeclaration {
    pub name: String,
    /// Whether the parameter carries a native type annotation
    pub has_type: bool,
    pub has_default: bool,
    pub by_reference: bool,
    pub variadic: bool,
}

impl ParamDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_type: false,
            has_default: false,
            by_reference: false,
            variadic: false,
        }
    }

    pub fn with_type(mut self, present: bool) -> Self {
        self.has_type = present;
        self
    }

    pub fn with_default(mut self, present: bool) -> Self {
        self.has_default = present;
        self
    }

    pub fn by_reference(mut self, by_reference: bool) -> Self {
        self.by_reference = by_reference;
        self
    }

    pub fn variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }
}
