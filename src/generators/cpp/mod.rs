//! C++ header and source emission for the binding tree

pub mod aggregate;
pub mod class_writer;
pub mod field_emitter;
pub mod function_emitter;
pub mod routing;
pub mod walker;

pub use aggregate::AggregateHeaderAssembler;
pub use class_writer::{ClassFiles, ClassWriter};
pub use field_emitter::FieldEmitter;
pub use function_emitter::FunctionEmitter;
pub use routing::{route, Route};
pub use walker::{GeneratedInclude, GenerationContext, IncludeIndex, SkipReason, TreeWalker};
