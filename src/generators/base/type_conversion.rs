use regex::Regex;
use std::sync::OnceLock;

/// Namespace alias used by the bindings for standard library types
pub const DOMAIN_NAMESPACE: &str = "gd::";

/// Namespace the alias resolves to
pub const STANDARD_NAMESPACE: &str = "std::";

fn domain_namespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `gd::` only as a whole token, so `mygd::Foo` is left alone
    PATTERN.get_or_init(|| Regex::new(r"\bgd::").expect("valid namespace pattern"))
}

/// Rewrites domain type spellings to their standard equivalents.
///
/// Only the namespace token is substituted; anything it does not recognise
/// passes through unchanged and is left for the C++ compiler to judge.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeTranslator;

impl TypeTranslator {
    pub fn new() -> Self {
        Self
    }

    /// `gd::map<gd::string, int>` -> `std::map<std::string, int>`
    pub fn translate(&self, type_name: &str) -> String {
        domain_namespace_pattern()
            .replace_all(type_name, STANDARD_NAMESPACE)
            .into_owned()
    }
}
