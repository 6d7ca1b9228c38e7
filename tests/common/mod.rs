// Test utility module for reflectmap integration tests
#![allow(dead_code)]

use reflectmap::{ClassId, MethodDeclaration, SignatureDescriptor, Type};
use std::collections::HashMap;

/// Route `log` output into the test harness capture
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builder over the full descriptor constructor so tests only spell out the
/// inputs they care about
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
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
}

impl DescriptorBuilder {
    pub fn method(declaring_class: ClassId, declaration: MethodDeclaration) -> Self {
        Self {
            declaring_class,
            declaration,
            template_types: HashMap::new(),
            native_param_types: HashMap::new(),
            doc_param_types: HashMap::new(),
            default_value_types: HashMap::new(),
            native_return_type_present: false,
            native_return_type: Type::Mixed,
            documented_return_type: None,
            thrown_type: None,
            deprecation_message: None,
            is_deprecated: false,
            is_internal: false,
            is_final: false,
        }
    }

    pub fn named(declaring_class: ClassId, name: &str) -> Self {
        Self::method(declaring_class, MethodDeclaration::new(name))
    }

    pub fn native_return(mut self, ty: Type) -> Self {
        self.native_return_type_present = true;
        self.native_return_type = ty;
        self
    }

    pub fn documented_return(mut self, ty: Type) -> Self {
        self.documented_return_type = Some(ty);
        self
    }

    pub fn native_param(mut self, name: &str, ty: Type) -> Self {
        self.native_param_types.insert(name.to_string(), ty);
        self
    }

    pub fn doc_param(mut self, name: &str, ty: Type) -> Self {
        self.doc_param_types.insert(name.to_string(), ty);
        self
    }

    pub fn default_value(mut self, name: &str, ty: Type) -> Self {
        self.default_value_types.insert(name.to_string(), ty);
        self
    }

    pub fn template_type(mut self, name: &str, ty: Type) -> Self {
        self.template_types.insert(name.to_string(), ty);
        self
    }

    pub fn thrown(mut self, ty: Type) -> Self {
        self.thrown_type = Some(ty);
        self
    }

    pub fn deprecated(mut self, message: Option<&str>) -> Self {
        self.is_deprecated = true;
        self.deprecation_message = message.map(str::to_string);
        self
    }

    pub fn internal(mut self) -> Self {
        self.is_internal = true;
        self
    }

    pub fn asserted_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn build(self) -> SignatureDescriptor {
        SignatureDescriptor::new(
            self.declaring_class,
            self.declaration,
            self.template_types,
            self.native_param_types,
            self.doc_param_types,
            self.default_value_types,
            self.native_return_type_present,
            self.native_return_type,
            self.documented_return_type,
            self.thrown_type,
            self.deprecation_message,
            self.is_deprecated,
            self.is_internal,
            self.is_final,
        )
    }
}
