use crate::analysis::ClassCategory;
use crate::generators::base::TypeTranslator;
use crate::generators::cpp::class_writer::{ClassFiles, ClassWriter};
use crate::generators::cpp::routing::{route, Route};
use crate::models::{BindingTree, ClassNode};
use std::collections::BTreeMap;

/// Generated header names containing this are dropped after generation
pub const DENYLIST_SUBSTRING: &str = "pugi::";

/// One registered header, relative to `headers/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInclude {
    pub directory: String,
    pub header_path: String,
}

/// Headers registered per directory. Directories iterate in lexicographic
/// order, headers within a directory in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeIndex {
    buckets: BTreeMap<String, Vec<String>>,
}

impl IncludeIndex {
    pub fn register(&mut self, directory: &str, header_path: &str) {
        self.buckets
            .entry(directory.to_string())
            .or_default()
            .push(header_path.to_string());
    }

    pub fn directories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(name, headers)| (name.as_str(), headers.as_slice()))
    }

    pub fn includes(&self) -> impl Iterator<Item = GeneratedInclude> + '_ {
        self.buckets.iter().flat_map(|(directory, headers)| {
            headers.iter().map(move |header_path| GeneratedInclude {
                directory: directory.clone(),
                header_path: header_path.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// A class that made it through routing and the denylist
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedClass {
    pub name: String,
    pub category: ClassCategory,
    pub directory: &'static str,
    pub files: ClassFiles,
}

/// Why a class produced no files of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Suppressed(ClassCategory),
    Denylisted,
}

/// State accumulated over one traversal of the binding tree
#[derive(Debug, Default)]
pub struct GenerationContext<'t> {
    /// Every class with its category, in visitation order
    pub visited: Vec<(String, ClassCategory)>,
    pub includes: IncludeIndex,
    pub delegates: Vec<&'t ClassNode>,
    pub classes: Vec<GeneratedClass>,
    pub skipped: Vec<(String, SkipReason)>,
}

impl GenerationContext<'_> {
    pub fn delegate_names(&self) -> Vec<String> {
        self.delegates.iter().map(|class| class.name.clone()).collect()
    }
}

pub fn is_denylisted(header_filename: &str) -> bool {
    header_filename.contains(DENYLIST_SUBSTRING)
}

pub struct TreeWalker {
    translator: TypeTranslator,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self {
            translator: TypeTranslator::new(),
        }
    }

    /// Visit every class once, in tree order
    pub fn walk<'t>(&self, tree: &'t BindingTree) -> GenerationContext<'t> {
        let mut context = GenerationContext::default();
        for class in &tree.classes {
            self.visit(class, &mut context);
        }
        context
    }

    fn visit<'t>(&self, class: &'t ClassNode, context: &mut GenerationContext<'t>) {
        let category = ClassCategory::of(class);
        context.visited.push((class.name.clone(), category));
        if category == ClassCategory::Delegate {
            context.delegates.push(class);
        }

        let directory = match route(category) {
            Route::Directory(directory) => directory,
            Route::Suppressed => {
                context
                    .skipped
                    .push((class.name.clone(), SkipReason::Suppressed(category)));
                return;
            }
        };

        let files = ClassWriter::new(&self.translator).write(class);
        if is_denylisted(&files.header_filename) {
            context
                .skipped
                .push((class.name.clone(), SkipReason::Denylisted));
            return;
        }

        context.includes.register(
            directory,
            &format!("{}/{}", directory, files.header_filename),
        );
        context.classes.push(GeneratedClass {
            name: class.name.clone(),
            category,
            directory,
            files,
        });
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}
