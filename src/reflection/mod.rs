//! Method reflection
//!
//! The queryable, merged view of a single method: native and documented types
//! reconciled per parameter and for the return value, lifecycle contracts
//! applied, and prototype resolution against the class hierarchy index.

pub mod signature;

pub use signature::{lifecycle_return_type, ParameterDescriptor, SignatureDescriptor};
