use serde::{Deserialize, Serialize};

/// The parsed class bindings for one run. Produced once by the upstream
/// parser and never mutated by the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BindingTree {
    #[serde(default)]
    pub classes: Vec<ClassNode>,
}

impl BindingTree {
    pub fn new(classes: Vec<ClassNode>) -> Self {
        Self { classes }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassNode {
    /// Class name, possibly namespace-qualified (e.g. `cocos2d::CCNode`)
    pub name: String,
    /// Base classes in declaration order; duplicates are kept as given
    #[serde(default)]
    pub superclasses: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldNode>,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclasses: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_superclass(mut self, name: impl Into<String>) -> Self {
        self.superclasses.push(name.into());
        self
    }

    pub fn with_field(mut self, field: FieldNode) -> Self {
        self.fields.push(field);
        self
    }

    /// Function prototypes in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionPrototype> {
        self.fields.iter().filter_map(|field| match field {
            FieldNode::FunctionBind(bind) => Some(&bind.prototype),
            FieldNode::Member(_) | FieldNode::Pad => None,
        })
    }

    /// Function prototypes sorted by name. The sort is stable, so
    /// overloads keep their declaration order.
    pub fn sorted_functions(&self) -> Vec<&FunctionPrototype> {
        let mut functions: Vec<&FunctionPrototype> = self.functions().collect();
        functions.sort_by(|a, b| a.name.cmp(&b.name));
        functions
    }
}

/// One entry of a class body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldNode {
    /// Ordinary data member
    Member(MemberField),
    /// Alignment marker with no name or type
    Pad,
    /// Member function signature
    FunctionBind(FunctionBindField),
}

impl FieldNode {
    pub fn member(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        FieldNode::Member(MemberField {
            name: name.into(),
            type_name: TypeName::new(type_name),
        })
    }

    pub fn function(prototype: FunctionPrototype) -> Self {
        FieldNode::FunctionBind(FunctionBindField { prototype })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBindField {
    pub prototype: FunctionPrototype,
}

/// A type spelling as recovered from the bindings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeName {
    pub name: String,
    /// Declared with an elaborated `struct` specifier
    #[serde(default)]
    pub is_struct: bool,
}

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_struct: false,
        }
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_struct: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: TypeName,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionPrototype {
    pub name: String,
    pub ret: TypeName,
    /// Arguments in call-signature order
    #[serde(default)]
    pub args: Vec<Argument>,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_const: bool,
}

impl FunctionPrototype {
    pub fn new(name: impl Into<String>, ret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ret: TypeName::new(ret),
            args: Vec::new(),
            is_virtual: false,
            is_static: false,
            is_const: false,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, arg_type: TypeName) -> Self {
        self.args.push(Argument {
            name: name.into(),
            arg_type,
        });
        self
    }

    pub fn virtual_fn(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    pub fn static_fn(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn const_fn(mut self) -> Self {
        self.is_const = true;
        self
    }
}
