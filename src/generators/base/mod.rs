pub mod code_writer;
pub mod file_writer;
pub mod templates;
pub mod type_conversion;

pub use code_writer::CodeWriter;
pub use file_writer::FileWriter;
pub use type_conversion::TypeTranslator;
