//! Modelos del contrato (CompositeResource, ComposedResourceSet, Input,...)

pub mod composed;
pub mod composite;
pub mod input;
pub mod request;

pub use composed::{stale_keys, ComposedResource, ComposedResourceSet, Ready};
pub use composite::{CompositeResource, ResourceMetadata};
pub use input::{Input, InputSource, InputSpec};
pub use request::{FunctionRequest, ObservedState, RequestMeta};
