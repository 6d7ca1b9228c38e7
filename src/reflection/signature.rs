//! Signature descriptors
//!
//! A [`SignatureDescriptor`] is the immutable, merged view of one declared
//! method. It reconciles two independent type sources — the declaration's own
//! annotations ("native" types) and documentation-derived annotations
//! ("documented" types) — and applies the fixed return-type contracts of the
//! reserved lifecycle methods. Every derived value is a pure function of the
//! construction-time fields, so two descriptors built from identical inputs
//! always answer identically.

use crate::core::{Error, Result, Type, Visibility};
use crate::declaration::MethodDeclaration;
use crate::hierarchy::{ClassId, ClassRegistry};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Return-type contracts for the reserved lifecycle methods, keyed by
/// case-folded name. These are fixed by the object model and beat both native
/// and documented annotations.
static LIFECYCLE_RETURN_TYPES: Lazy<HashMap<&'static str, Type>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for name in ["__construct", "__destruct", "__unset", "__wakeup", "__clone"] {
        table.insert(name, Type::Void);
    }
    table.insert("__tostring", Type::String);
    table.insert("__isset", Type::Bool);
    // List of field names to serialize
    table.insert("__sleep", Type::array(Type::Int, Type::String));
    table.insert("__set_state", Type::ObjectWithoutClass);
    table
});

/// Look up the contractual return type for a reserved lifecycle method name.
///
/// Returns `None` for every name outside the reserved set. Matching is
/// case-insensitive.
pub fn lifecycle_return_type(name: &str) -> Option<&'static Type> {
    LIFECYCLE_RETURN_TYPES.get(name.to_lowercase().as_str())
}

/// One parameter of a resolved method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    name: String,
    native_type: Type,
    documented_type: Option<Type>,
    has_default: bool,
    default_value_type: Option<Type>,
    by_reference: bool,
    variadic: bool,
}

impl ParameterDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type derived purely from the declaration's syntax; `Mixed` when the
    /// parameter is un-annotated
    pub fn native_type(&self) -> &Type {
        &self.native_type
    }

    /// Type derived from documentation annotations, if one was supplied
    pub fn documented_type(&self) -> Option<&Type> {
        self.documented_type.as_ref()
    }

    /// The authoritative type: documented when present, native otherwise.
    /// Parameters are never subject to lifecycle contracts.
    pub fn effective_type(&self) -> &Type {
        self.documented_type.as_ref().unwrap_or(&self.native_type)
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// Type of the declared default value, when the engine resolved one
    pub fn default_value_type(&self) -> Option<&Type> {
        self.default_value_type.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.has_default || self.variadic
    }

    pub fn is_by_reference(&self) -> bool {
        self.by_reference
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

/// Immutable, queryable descriptor of one declared method.
///
/// Built once by the surrounding engine after both native and documented type
/// information are available, then shared read-only. The declaring class is
/// held as a registry handle, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDescriptor {
    declaring_class: ClassId,
    declaration: MethodDeclaration,
    template_types: HashMap<String, Type>,
    parameters: Vec<ParameterDescriptor>,
    native_return_type_present: bool,
    native_return_type: Type,
    documented_return_type: Option<Type>,
    thrown_type: Option<Type>,
    deprecation_message: Option<String>,
    is_deprecated: bool,
    is_internal: bool,
    is_final: bool,
}

impl SignatureDescriptor {
    /// Build a descriptor from a declaration and resolved type information.
    ///
    /// The three per-parameter maps are keyed by parameter name; parameters
    /// with no native entry get `Mixed`. `is_final` is folded with the
    /// declaration's own final modifier here, once; the merge is one-way and
    /// a later divergence of the declaration cannot revoke it.
    ///
    /// Structurally invalid input (e.g. a map entry naming no declared
    /// parameter) is a programming error in the engine and is not checked
    /// here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        declaring_class: ClassId,
        declaration: MethodDeclaration,
        template_types: HashMap<String, Type>,
        native_param_types: HashMap<String, Type>,
        doc_param_types: HashMap<String, Type>,
        default_value_types: HashMap<String, Type>,
        native_return_type_present: bool,
        native_return_type: Type,
        documented_return_type: Option<Type>,
        thrown_type: Option<Type>,
        deprecation_message: Option<String>,
        is_deprecated: bool,
        is_internal: bool,
        is_final: bool,
    ) -> Self {
        let parameters = declaration
            .params
            .iter()
            .map(|param| ParameterDescriptor {
                name: param.name.clone(),
                native_type: native_param_types
                    .get(&param.name)
                    .cloned()
                    .unwrap_or(Type::Mixed),
                documented_type: doc_param_types.get(&param.name).cloned(),
                has_default: param.has_default,
                default_value_type: default_value_types.get(&param.name).cloned(),
                by_reference: param.by_reference,
                variadic: param.variadic,
            })
            .collect();
        let is_final = is_final || declaration.is_final;

        Self {
            declaring_class,
            declaration,
            template_types,
            parameters,
            native_return_type_present,
            native_return_type,
            documented_return_type,
            thrown_type,
            deprecation_message,
            is_deprecated,
            is_internal,
            is_final,
        }
    }

    /// Method name with its declared casing
    pub fn name(&self) -> &str {
        &self.declaration.name
    }

    /// Handle to the class this method is declared on
    pub fn declaring_class(&self) -> ClassId {
        self.declaring_class
    }

    /// Generic-type substitution map supplied at construction. Stored and
    /// exposed untouched; this core does not interpret it.
    pub fn template_types(&self) -> &HashMap<String, Type> {
        &self.template_types
    }

    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// The authoritative return type.
    ///
    /// Precedence, first match wins:
    /// 1. the lifecycle contract for a reserved method name — absolute, beats
    ///    both annotation sources;
    /// 2. the documented return type;
    /// 3. the native return type (`Mixed` when the declaration states none).
    pub fn return_type(&self) -> &Type {
        if let Some(contract) = lifecycle_return_type(self.name()) {
            return contract;
        }
        if let Some(documented) = &self.documented_return_type {
            return documented;
        }
        &self.native_return_type
    }

    /// Whether the declaration itself states a return type
    pub fn native_return_type_present(&self) -> bool {
        self.native_return_type_present
    }

    pub fn native_return_type(&self) -> &Type {
        &self.native_return_type
    }

    pub fn documented_return_type(&self) -> Option<&Type> {
        self.documented_return_type.as_ref()
    }

    /// Exceptions the method may raise, sourced from annotations only
    pub fn thrown_type(&self) -> Option<&Type> {
        self.thrown_type.as_ref()
    }

    /// Resolve the most general ancestor declaration this method overrides.
    ///
    /// The declaring class's native method table is consulted first; the
    /// found entity's prototype chain is then chased to its root. A method
    /// whose name has no native declaration anywhere in the ancestry
    /// overrides nothing and is its own prototype — only that missing-member
    /// condition is converted into the self-fallback, every other failure of
    /// the hierarchy index propagates unmodified.
    pub fn prototype<'a>(&'a self, registry: &'a ClassRegistry) -> Result<&'a SignatureDescriptor> {
        match registry.native_method(self.declaring_class, self.name()) {
            Ok(native) => registry.method(registry.prototype_of(native)?),
            Err(Error::MissingMethod { .. }) => {
                log::debug!(
                    "no native {} in ancestry of class {}, method is its own prototype",
                    self.name(),
                    self.declaring_class
                );
                Ok(self)
            }
            Err(err) => Err(err),
        }
    }

    pub fn is_static(&self) -> bool {
        self.declaration.is_static
    }

    pub fn is_private(&self) -> bool {
        self.declaration.visibility == Visibility::Private
    }

    pub fn is_public(&self) -> bool {
        self.declaration.visibility == Visibility::Public
    }

    pub fn is_abstract(&self) -> bool {
        self.declaration.is_abstract
    }

    /// Caller-asserted final OR syntactic final modifier, folded once at
    /// construction
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// A deprecation message implies deprecation even when the caller left
    /// the flag unset
    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated || self.deprecation_message.is_some()
    }

    pub fn deprecation_message(&self) -> Option<&str> {
        self.deprecation_message.as_deref()
    }

    pub fn is_internal(&self) -> bool {
        self.is_internal
    }

    /// Whether any parameter is variadic
    pub fn is_variadic(&self) -> bool {
        self.parameters.iter().any(ParameterDescriptor::is_variadic)
    }

    /// Always `None`: the annotation text behind this descriptor has already
    /// been consumed into typed fields, and surfacing it again would create a
    /// second source of truth.
    pub fn doc_comment(&self) -> Option<&str> {
        None
    }
}
