use crate::analysis::ClassCategory;

/// Where a class's generated files go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Emit under `headers/<dir>` and `src/<dir>`
    Directory(&'static str),
    /// No standalone file for this class
    Suppressed,
}

impl Route {
    pub fn directory(self) -> Option<&'static str> {
        match self {
            Route::Directory(dir) => Some(dir),
            Route::Suppressed => None,
        }
    }
}

pub fn route(category: ClassCategory) -> Route {
    match category {
        ClassCategory::Manager => Route::Directory("Managers"),
        ClassCategory::Cell => Route::Directory("Cells"),
        ClassCategory::ToolBox => Route::Directory("Tools"),
        ClassCategory::CustomCC => Route::Directory("CustomCCClasses"),
        ClassCategory::Layer => Route::Directory("Layers"),
        ClassCategory::Default => Route::Directory("Common"),
        // engine classes come from the engine headers, delegates are
        // rendered inline in the aggregate header
        ClassCategory::Cocos2d | ClassCategory::Delegate => Route::Suppressed,
    }
}
