//! Response de una invocación: builder acumulador + merge determinista.

pub mod builder;
pub mod merge;

pub use builder::{ConnectionDetails, FunctionResponse, ResponseBuilder};
pub use merge::deep_merge;
