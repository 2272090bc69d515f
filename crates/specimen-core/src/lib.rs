//! Core document model for Specimen.
//!
//! This crate defines the typed Swagger 2.0 document shape consumed by the
//! synthesis engine, along with the shared error type.

pub mod document;
pub mod error;

pub use document::{
    AdditionalProperties, Operation, Parameter, ResponseObject, SchemaNode, SchemaType, SpecInfo,
    SwaggerSpec,
};
pub use error::{Error, Result};
