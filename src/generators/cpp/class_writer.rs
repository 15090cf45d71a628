use crate::analysis::classifier::ENGINE_NAMESPACE;
use crate::generators::base::{CodeWriter, TypeTranslator};
use crate::generators::cpp::field_emitter::FieldEmitter;
use crate::generators::cpp::function_emitter::FunctionEmitter;
use crate::models::{ClassNode, FieldNode};
use regex::Regex;
use std::sync::OnceLock;

/// Name of the aggregate header every generated file includes
pub const UMBRELLA_HEADER: &str = "includes.h";

/// Include spelling for the umbrella header from a file `depth` directories
/// below `headers/`
pub fn umbrella_include(depth: usize) -> String {
    format!("{}{}", "../".repeat(depth), UMBRELLA_HEADER)
}

/// `__GAMEMANAGER_H__`. Characters that cannot appear in a macro name
/// become underscores.
pub fn header_guard(class_name: &str) -> String {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    let invalid =
        INVALID.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid guard pattern"));
    format!(
        "__{}_H__",
        invalid.replace_all(&class_name.to_uppercase(), "_")
    )
}

/// Superclasses needing a forward declaration: everything outside the engine
/// namespace, first occurrence only
pub fn forward_declarations(superclasses: &[String]) -> Vec<&str> {
    let mut declared: Vec<&str> = Vec::new();
    for name in superclasses {
        if !name.starts_with(ENGINE_NAMESPACE) && !declared.contains(&name.as_str()) {
            declared.push(name.as_str());
        }
    }
    declared
}

/// Write `class Name : public A, public B {` followed by forward declarations
/// and the `public:` section opener
pub fn open_class(w: &mut CodeWriter, class_name: &str, superclasses: &[String]) {
    let forwards = forward_declarations(superclasses);
    if !forwards.is_empty() {
        w.comment("-- Predefined Subclasses --");
        w.newline();
        for name in forwards {
            w.putline(&format!("class {};", name));
        }
        w.newline();
    }

    w.put(&format!("class {}", class_name));
    if !superclasses.is_empty() {
        let bases: Vec<String> = superclasses
            .iter()
            .map(|name| format!("public {}", name))
            .collect();
        w.put(&format!(" : {}", bases.join(", ")));
    }
    w.put(" {");
    w.newline();
    w.putline("public:");
    w.indent();
}

pub fn close_class(w: &mut CodeWriter) {
    w.dedent();
    w.putline("};");
}

/// The header and source generated for one class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFiles {
    pub header_filename: String,
    pub source_filename: String,
    pub header: String,
    pub source: String,
}

/// Composes the field and function emitters into a header/source pair
pub struct ClassWriter<'a> {
    translator: &'a TypeTranslator,
}

impl<'a> ClassWriter<'a> {
    pub fn new(translator: &'a TypeTranslator) -> Self {
        Self { translator }
    }

    pub fn write(&self, class: &ClassNode) -> ClassFiles {
        ClassFiles {
            header_filename: format!("{}.h", class.name),
            source_filename: format!("{}.cpp", class.name),
            header: self.write_header(class),
            source: self.write_source(class),
        }
    }

    /// Header for a class living one directory below `headers/`. Fields are
    /// emitted in declaration order so virtuals keep their vtable order.
    pub fn write_header(&self, class: &ClassNode) -> String {
        let guard = header_guard(&class.name);
        let fields = FieldEmitter::new(self.translator);
        let functions = FunctionEmitter::new(&class.name, self.translator);

        let mut w = CodeWriter::new();
        w.putline(&format!("#ifndef {}", guard));
        w.putline(&format!("#define {}", guard));
        w.newline();
        w.include(&umbrella_include(1));
        w.newline();

        open_class(&mut w, &class.name, &class.superclasses);
        for field in &class.fields {
            match field {
                FieldNode::Member(member) => fields.emit_member(&mut w, member),
                FieldNode::Pad => fields.emit_pad(&mut w),
                FieldNode::FunctionBind(bind) => {
                    functions.emit_declaration(&mut w, &bind.prototype)
                }
            }
        }
        close_class(&mut w);

        w.newline();
        w.putline(&format!("#endif /* {} */", guard));
        w.finish()
    }

    /// Source file with a stub for every bound function, sorted by name
    pub fn write_source(&self, class: &ClassNode) -> String {
        let functions = FunctionEmitter::new(&class.name, self.translator);

        let mut w = CodeWriter::new();
        w.include(UMBRELLA_HEADER);
        w.newline();
        w.newline();
        functions.emit_stubs(&mut w, class);
        w.finish()
    }
}
