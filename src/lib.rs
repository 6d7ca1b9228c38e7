// Export modules for library usage
pub mod core;
pub mod declaration;
pub mod hierarchy;
pub mod reflection;

// Re-export commonly used types
pub use crate::core::{Error, Result, Type, Visibility};

pub use crate::declaration::{MethodDeclaration, ParamDeclaration};

pub use crate::hierarchy::{ClassId, ClassReflection, ClassRegistry, MethodId};

pub use crate::reflection::{lifecycle_return_type, ParameterDescriptor, SignatureDescriptor};
