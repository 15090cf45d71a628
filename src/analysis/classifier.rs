use crate::models::ClassNode;
use std::fmt;

/// Namespace prefix of the external engine. Classes carrying it ship with the
/// engine's own headers and are never generated or forward-declared.
pub const ENGINE_NAMESPACE: &str = "cocos2d::";

/// XML dictionary helper bundled with the engine headers
pub const LEGACY_DICTIONARY_CLASS: &str = "DS_Dictionary";

/// Prefixes of the table/list-view family
pub const CELL_PREFIXES: [&str; 2] = ["TableView", "BoomListView"];

/// The one tools class that does not follow the `*ToolBox` naming
pub const TOOLS_CLASS: &str = "LevelTools";

/// Architectural role of a class, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassCategory {
    Default,
    Manager,
    Delegate,
    /// A `CC`-prefixed class living outside the engine namespace
    CustomCC,
    /// Engine class, provided by the engine headers
    Cocos2d,
    Layer,
    Cell,
    ToolBox,
}

impl ClassCategory {
    pub fn of(class: &ClassNode) -> Self {
        classify(&class.name)
    }
}

impl fmt::Display for ClassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassCategory::Default => "default",
            ClassCategory::Manager => "manager",
            ClassCategory::Delegate => "delegate",
            ClassCategory::CustomCC => "custom-cc",
            ClassCategory::Cocos2d => "cocos2d",
            ClassCategory::Layer => "layer",
            ClassCategory::Cell => "cell",
            ClassCategory::ToolBox => "toolbox",
        };
        write!(f, "{}", name)
    }
}

/// Classify a class by name. Rules are checked top to bottom and the first
/// match wins; the order is significant.
pub fn classify(name: &str) -> ClassCategory {
    let lower = name.to_lowercase();

    if name.starts_with(ENGINE_NAMESPACE) || name == LEGACY_DICTIONARY_CLASS {
        ClassCategory::Cocos2d
    } else if lower.contains("delegate") {
        ClassCategory::Delegate
    } else if name.starts_with("CC") {
        ClassCategory::CustomCC
    } else if CELL_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) || lower.ends_with("cell")
    {
        ClassCategory::Cell
    } else if lower.ends_with("manager") {
        ClassCategory::Manager
    } else if lower.ends_with("layer") {
        ClassCategory::Layer
    } else if name == TOOLS_CLASS || lower.ends_with("toolbox") {
        ClassCategory::ToolBox
    } else {
        ClassCategory::Default
    }
}
