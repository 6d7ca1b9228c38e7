//! Class hierarchy index
//!
//! An arena-style registry of classes and their natively declared methods,
//! owned by the surrounding analysis engine. Classes and methods are addressed
//! through copyable handles so that descriptors can keep a back-reference to
//! their declaring class without owning it.
//!
//! "Native" throughout this module means declared in source text, as opposed
//! to the merged, annotation-refined view a [`SignatureDescriptor`] presents.
//! Prototype chains are resolved against native declarations only, so they
//! follow the structural override relationship and never pick up
//! annotation-only refinements.

use crate::core::{Error, Result};
use crate::reflection::SignatureDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Handle to a class in a [`ClassRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId(pub usize);

/// Handle to a natively declared method in a [`ClassRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId(pub usize);

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One class and its native member index
#[derive(Debug, Clone)]
pub struct ClassReflection {
    name: String,
    parent: Option<ClassId>,
    interfaces: Vec<ClassId>,
    /// Native methods declared on this class itself, keyed by case-folded name
    native_methods: HashMap<String, MethodId>,
}

impl ClassReflection {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    pub fn interfaces(&self) -> &[ClassId] {
        &self.interfaces
    }

    /// Whether this class itself (not an ancestor) declares the method
    pub fn declares_native_method(&self, name: &str) -> bool {
        self.native_methods.contains_key(&fold_name(name))
    }

    fn own_native_method(&self, folded: &str) -> Option<MethodId> {
        self.native_methods.get(folded).copied()
    }
}

/// Arena registry of classes and natively declared methods
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassReflection>,
    methods: Vec<SignatureDescriptor>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class with its parent and implemented interfaces.
    ///
    /// Parent and interface handles must already be registered; the hierarchy
    /// is built bottom-up and is acyclic by construction.
    pub fn register_class(
        &mut self,
        name: impl Into<String>,
        parent: Option<ClassId>,
        interfaces: Vec<ClassId>,
    ) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.push(ClassReflection {
            name: name.into(),
            parent,
            interfaces,
            native_methods: HashMap::new(),
        });
        id
    }

    /// Register a natively declared method on a class.
    ///
    /// The descriptor's declaring class is not cross-checked against `class`;
    /// wiring them up consistently is the engine's responsibility.
    pub fn add_native_method(
        &mut self,
        class: ClassId,
        descriptor: SignatureDescriptor,
    ) -> Result<MethodId> {
        let folded = fold_name(descriptor.name());
        let id = MethodId(self.methods.len());
        self.class_mut(class)?.native_methods.insert(folded, id);
        self.methods.push(descriptor);
        Ok(id)
    }

    /// Resolve a class handle
    pub fn class(&self, id: ClassId) -> Result<&ClassReflection> {
        self.classes.get(id.0).ok_or(Error::UnknownClass(id))
    }

    fn class_mut(&mut self, id: ClassId) -> Result<&mut ClassReflection> {
        self.classes.get_mut(id.0).ok_or(Error::UnknownClass(id))
    }

    /// Resolve a method handle
    pub fn method(&self, id: MethodId) -> Result<&SignatureDescriptor> {
        self.methods.get(id.0).ok_or(Error::UnknownMethod(id))
    }

    /// Find the nearest native declaration of `name` on the class or its
    /// ancestry.
    ///
    /// Fails with [`Error::MissingMethod`] when nothing in the ancestry
    /// declares the method.
    pub fn native_method(&self, class: ClassId, name: &str) -> Result<MethodId> {
        let folded = fold_name(name);
        match self.find_native(class, &folded)? {
            Some(id) => Ok(id),
            None => Err(Error::missing_method(self.class(class)?.name.as_str(), name)),
        }
    }

    /// Find the nearest native declaration of `name` on strict ancestors only
    /// (the parent chain, then interfaces), never on the class itself.
    ///
    /// Returns `Ok(None)` when no ancestor declares the method; errors are
    /// reserved for dangling handles.
    pub fn ancestor_native_method(&self, class: ClassId, name: &str) -> Result<Option<MethodId>> {
        let folded = fold_name(name);
        self.find_in_ancestors(self.class(class)?, &folded)
    }

    /// Resolve the prototype of a registered method: the most general ancestor
    /// declaration it overrides, or the method itself when it overrides
    /// nothing.
    ///
    /// The ancestry is acyclic, so the chase is bounded by its depth.
    pub fn prototype_of(&self, id: MethodId) -> Result<MethodId> {
        let method = self.method(id)?;
        match self.ancestor_native_method(method.declaring_class(), method.name())? {
            Some(overridden) => {
                log::trace!(
                    "method {} {} overrides {}, chasing prototype upward",
                    id,
                    method.name(),
                    overridden
                );
                self.prototype_of(overridden)
            }
            None => Ok(id),
        }
    }

    fn find_native(&self, class: ClassId, folded: &str) -> Result<Option<MethodId>> {
        let class_ref = self.class(class)?;
        if let Some(id) = class_ref.own_native_method(folded) {
            return Ok(Some(id));
        }
        self.find_in_ancestors(class_ref, folded)
    }

    // Lookup order: parent chain first, then interfaces in declaration order.
    fn find_in_ancestors(
        &self,
        class_ref: &ClassReflection,
        folded: &str,
    ) -> Result<Option<MethodId>> {
        if let Some(parent) = class_ref.parent {
            if let Some(id) = self.find_native(parent, folded)? {
                return Ok(Some(id));
            }
        }
        for &interface in &class_ref.interfaces {
            if let Some(id) = self.find_native(interface, folded)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}

/// Method names are case-insensitive in the modeled object model
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
