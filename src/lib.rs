//! # Decomp Stubgen
//!
//! Generate C++ header and stub source files from a tree of
//! reverse-engineered class bindings.
//!
//! Every class in the binding tree is classified by name, routed to an
//! output directory and written as a header (data members, padding markers
//! and function declarations in declaration order) plus a source file with
//! placeholder definitions. A single aggregate header, `headers/includes.h`,
//! ties everything together: external includes, helper macros, a `gd`
//! namespace alias, per-directory include blocks, inline delegate
//! interfaces and the shared enum table.
//!
//! ## Output layout
//!
//! ```text
//! headers/includes.h
//! headers/<Directory>/<Class>.h
//! src/<Directory>/<Class>.cpp
//! ```
//!
//! `<Directory>` is one of `Managers`, `Cells`, `Tools`, `CustomCCClasses`,
//! `Layers` or `Common`. Engine classes and delegates get no files of
//! their own.
//!
//! ## Quick Start
//!
//! ```bash
//! decomp-stubgen generate --input bindings.json --output ./decomp
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use decomp_stubgen::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     input_path: "./bindings.json".to_string(),
//!     output_path: "./decomp".to_string(),
//!     verbose: Some(true),
//!     ..Default::default()
//! };
//!
//! let files = generate_from_config(&config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Generation itself is pure and can be used without touching disk:
//!
//! ```rust
//! use decomp_stubgen::{generate, BindingTree, ClassNode, FieldNode};
//!
//! let tree = BindingTree::new(vec![
//!     ClassNode::new("GameManager").with_field(FieldNode::member("m_name", "gd::string")),
//! ]);
//! let output = generate(&tree)?;
//! let header = output.file("headers/Managers/GameManager.h").unwrap();
//! assert!(header.contents.contains("std::string m_name;"));
//! # Ok::<(), decomp_stubgen::Error>(())
//! ```

pub mod analysis;
mod error;
pub mod generators;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

pub use analysis::{classify, concat_schema_sources, load_binding_tree, ClassCategory};
pub use generators::{generate, GeneratedOutput, OutputFile};
pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
