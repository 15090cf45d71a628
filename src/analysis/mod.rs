pub mod classifier;
pub mod schema;

pub use classifier::{classify, ClassCategory};
pub use schema::{concat_schema_sources, load_binding_tree, parse_binding_tree, SchemaSources};
