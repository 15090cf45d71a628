use crate::error::{Error, Result};
use crate::models::BindingTree;
use std::fs;
use std::path::Path;

/// Raw schema text of the three binding sources, in the order the parser
/// expects them.
#[derive(Debug, Clone, Default)]
pub struct SchemaSources {
    /// Engine internals
    pub engine: String,
    /// Main application classes
    pub main: String,
    /// Auxiliary extras
    pub aux: String,
}

impl SchemaSources {
    /// Concatenate the sources for parsing: engine, main, then aux, each
    /// followed by a newline.
    pub fn concat(&self) -> String {
        concat_schema_sources(&self.engine, &self.main, &self.aux)
    }
}

pub fn concat_schema_sources(engine: &str, main: &str, aux: &str) -> String {
    let mut combined = String::with_capacity(engine.len() + main.len() + aux.len() + 3);
    for source in [engine, main, aux] {
        combined.push_str(source);
        combined.push('\n');
    }
    combined
}

impl BindingTree {
    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_binding_tree(json)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_binding_tree(path)
    }
}

/// Decode a binding tree from its JSON form
pub fn parse_binding_tree(json: &str) -> Result<BindingTree> {
    let tree: BindingTree = serde_json::from_str(json)?;
    Ok(tree)
}

/// Load a binding tree from a JSON file
pub fn load_binding_tree<P: AsRef<Path>>(path: P) -> Result<BindingTree> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Schema(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_binding_tree(&content)
}
