use crate::error::Result;
use crate::generators::base::templates::{create_template_engine, render};
use crate::generators::base::{CodeWriter, TypeTranslator};
use crate::generators::cpp::class_writer::{close_class, open_class};
use crate::generators::cpp::function_emitter::FunctionEmitter;
use crate::generators::cpp::walker::IncludeIndex;
use crate::models::ClassNode;
use serde::Serialize;
use tera::{Context, Tera};

const INCLUDES_TEMPLATE: &str = "cpp/includes.h.tera";

/// Enumerations shared by every generated class, emitted verbatim
pub const ENUM_TABLE: &str = include_str!("templates/enums.h");

/// Engine, formatting, audio and standard headers pulled in by the
/// aggregate header, in emission order
pub const EXTERNAL_HEADERS: [&str; 10] = [
    "cocos2d.h",
    "fmt/format.h",
    "fmod/fmod.h",
    "cstdlib",
    "cstring",
    "string",
    "map",
    "unordered_map",
    "unordered_set",
    "array",
];

#[derive(Debug, Serialize)]
struct DirectoryBlock<'a> {
    name: &'a str,
    headers: &'a [String],
}

/// Builds the master `includes.h`
pub struct AggregateHeaderAssembler {
    tera: Tera,
    translator: TypeTranslator,
}

impl AggregateHeaderAssembler {
    pub fn new() -> Result<Self> {
        let mut tera = create_template_engine();
        crate::template!(tera, INCLUDES_TEMPLATE, "templates/includes.h.tera");
        Ok(Self {
            tera,
            translator: TypeTranslator::new(),
        })
    }

    /// Inline interface declaration for a delegate: forward declarations,
    /// the class head and its functions in sorted order. Data members are
    /// not part of a delegate's rendering.
    pub fn render_delegate(&self, delegate: &ClassNode) -> String {
        let functions = FunctionEmitter::new(&delegate.name, &self.translator);
        let mut w = CodeWriter::new();
        open_class(&mut w, &delegate.name, &delegate.superclasses);
        functions.emit_declarations(&mut w, delegate);
        close_class(&mut w);
        w.finish().trim_end().to_string()
    }

    /// Directories in lexicographic order, headers in visitation order
    pub fn assemble(&self, includes: &IncludeIndex, delegates: &[&ClassNode]) -> Result<String> {
        let directories: Vec<DirectoryBlock> = includes
            .directories()
            .map(|(name, headers)| DirectoryBlock { name, headers })
            .collect();
        let delegates: Vec<String> = delegates
            .iter()
            .map(|delegate| self.render_delegate(delegate))
            .collect();

        let mut context = Context::new();
        context.insert("external_headers", &EXTERNAL_HEADERS);
        context.insert("directories", &directories);
        context.insert("delegates", &delegates);
        context.insert("enums", ENUM_TABLE.trim_end());

        render(&self.tera, INCLUDES_TEMPLATE, &context)
    }
}
