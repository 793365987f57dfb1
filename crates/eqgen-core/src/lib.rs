//! Equality synthesis: decides whether a class gets generated `equals`,
//! `hashCode` and `canEqual`, and builds them as abstract method
//! specifications the code host splices in.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod generate;
pub mod policy;
pub mod render;
pub mod spec;
pub mod strategy;
pub mod synth;

#[cfg(test)]
mod tests;

pub use generate::generate;

///
/// Prelude
///
/// Everything a host needs to drive one generation pass.
///

pub mod prelude {
    pub use crate::{
        config::GenerationConfig,
        diagnostic::{Diagnostic, Severity},
        error::GenerateError,
        generate::{GeneratedMethods, GenerationResult, generate},
        render::JavaRenderer,
        spec::MethodSpec,
        synth::to_string::synthesize_to_string,
    };
}
