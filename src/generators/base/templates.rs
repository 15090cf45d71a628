use crate::error::Result;
use tera::{Context, Tera};

/// Register templates embedded in the binary under their lookup names
#[macro_export]
macro_rules! template {
    ($tera:expr, $name:expr, $path:expr) => {
        $tera
            .add_raw_template($name, include_str!($path))
            .map_err(|e| {
                $crate::Error::CodeGeneration(format!("Failed to register {}: {}", $name, e))
            })?;
    };
}

/// Create a template engine with no templates registered. Template names
/// must not end in `.html`/`.xml`, so tera leaves autoescaping off.
pub fn create_template_engine() -> Tera {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera
}

/// Render a template with the given context
pub fn render(tera: &Tera, template_name: &str, context: &Context) -> Result<String> {
    Ok(tera.render(template_name, context)?)
}
