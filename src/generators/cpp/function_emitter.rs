use crate::generators::base::{CodeWriter, TypeTranslator};
use crate::models::{ClassNode, FunctionPrototype};

/// Return type placeholder for functions whose return type is not known yet
pub const UNKNOWN_RETURN: &str = "TodoReturn";

/// Renders member functions of one class, either as out-of-line stub
/// definitions or as in-class declarations.
pub struct FunctionEmitter<'a> {
    class_name: &'a str,
    translator: &'a TypeTranslator,
}

impl<'a> FunctionEmitter<'a> {
    pub fn new(class_name: &'a str, translator: &'a TypeTranslator) -> Self {
        Self {
            class_name,
            translator,
        }
    }

    pub fn is_unknown_return(proto: &FunctionPrototype) -> bool {
        proto.ret.name == UNKNOWN_RETURN
    }

    /// `struct CCPoint pos, std::string name`
    pub fn render_args(&self, proto: &FunctionPrototype) -> String {
        proto
            .args
            .iter()
            .map(|arg| {
                let qualifier = if arg.arg_type.is_struct { "struct " } else { "" };
                format!(
                    "{}{} {}",
                    qualifier,
                    self.translator.translate(&arg.arg_type.name),
                    arg.name
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn const_suffix(proto: &FunctionPrototype) -> &'static str {
        if proto.is_const {
            " const"
        } else {
            ""
        }
    }

    /// `Class::name(args)`, plus ` const` for const member functions
    fn qualified_signature(&self, proto: &FunctionPrototype) -> String {
        format!(
            "{}::{}({}){}",
            self.class_name,
            proto.name,
            self.render_args(proto),
            Self::const_suffix(proto)
        )
    }

    /// Out-of-line definition with a placeholder body. Unknown-return
    /// functions only leave a comment behind.
    pub fn emit_stub(&self, w: &mut CodeWriter, proto: &FunctionPrototype) {
        let signature = self.qualified_signature(proto);

        if Self::is_unknown_return(proto) {
            w.newline();
            w.comment(&format!("Unknown Return: {}", signature));
            w.newline();
            return;
        }

        let ret = self.translator.translate(&proto.ret.name);
        w.putline(&format!("{} {}", ret, signature));
        w.putline("{");
        for line in placeholder_body(&ret) {
            w.putline(&format!("    {}", line));
        }
        w.putline("}");
        w.newline();
    }

    /// In-class declaration: `virtual`/`static` from the prototype flags and a
    /// trailing `const` for const member functions
    pub fn emit_declaration(&self, w: &mut CodeWriter, proto: &FunctionPrototype) {
        let specifier = if proto.is_virtual {
            "virtual "
        } else if proto.is_static {
            "static "
        } else {
            ""
        };
        let declarator = format!(
            "{}({}){};",
            proto.name,
            self.render_args(proto),
            Self::const_suffix(proto)
        );

        if Self::is_unknown_return(proto) {
            w.comment(&format!("Unknown Return: {}{}", specifier, declarator));
            return;
        }

        let ret = self.translator.translate(&proto.ret.name);
        w.writeline(&format!("{}{} {}", specifier, ret, declarator));
    }

    /// Stubs for every function of `class`, sorted by name with declaration
    /// order as the tie-break
    pub fn emit_stubs(&self, w: &mut CodeWriter, class: &ClassNode) {
        for proto in class.sorted_functions() {
            self.emit_stub(w, proto);
        }
    }

    /// Declarations for every function of `class`, in the same order as
    /// `emit_stubs`
    pub fn emit_declarations(&self, w: &mut CodeWriter, class: &ClassNode) {
        for proto in class.sorted_functions() {
            self.emit_declaration(w, proto);
        }
    }
}

/// Body lines returning a placeholder of type `ret`. Reference returns bind
/// to a function-local static so the stub neither fails to compile nor
/// dangles.
fn placeholder_body(ret: &str) -> Vec<String> {
    if ret == "void" {
        return vec!["return;".to_string()];
    }
    let Some(referred) = ret.strip_suffix('&') else {
        return vec!["return {};".to_string()];
    };

    let rvalue = referred.ends_with('&');
    let referred = referred.trim_end_matches('&').trim_end();
    let value = if rvalue {
        format!("static_cast<{}>(placeholder)", ret)
    } else {
        "placeholder".to_string()
    };
    vec![
        format!("static {} placeholder{{}};", referred),
        format!("return {};", value),
    ]
}
