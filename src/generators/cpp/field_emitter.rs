use crate::generators::base::{CodeWriter, TypeTranslator};
use crate::models::MemberField;

/// Type prefix of packed seed values; the letters after it name the parts
pub const SEED_VALUE_PREFIX: &str = "geode::SeedValue";

/// Storage type of each unpacked seed value part
const SEED_PART_TYPE: &str = "int";

/// One logical part of a packed seed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPart {
    Rand,
    Seed,
    Value,
}

impl SeedPart {
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(SeedPart::Rand),
            'S' => Some(SeedPart::Seed),
            'V' => Some(SeedPart::Value),
            _ => None,
        }
    }

    pub fn field_name(self, base: &str) -> String {
        match self {
            SeedPart::Rand => format!("{}Rand", base),
            SeedPart::Seed => format!("{}Seed", base),
            SeedPart::Value => base.to_string(),
        }
    }
}

/// Parts of a seed value type in the order their letters appear, or `None`
/// if the type is not a seed value. Letters other than R, S and V are ignored.
pub fn seed_value_parts(type_name: &str) -> Option<Vec<SeedPart>> {
    let suffix = type_name.strip_prefix(SEED_VALUE_PREFIX)?;
    Some(suffix.chars().filter_map(SeedPart::from_letter).collect())
}

/// Emits data members into a class body
pub struct FieldEmitter<'a> {
    translator: &'a TypeTranslator,
}

impl<'a> FieldEmitter<'a> {
    pub fn new(translator: &'a TypeTranslator) -> Self {
        Self { translator }
    }

    /// Emit a member; seed values expand into one `int` per part
    pub fn emit_member(&self, w: &mut CodeWriter, field: &MemberField) {
        match seed_value_parts(&field.type_name.name) {
            Some(parts) => {
                for part in parts {
                    self.write_member(w, SEED_PART_TYPE, &part.field_name(&field.name));
                }
            }
            None => {
                let type_name = self.translator.translate(&field.type_name.name);
                self.write_member(w, &type_name, &field.name);
            }
        }
    }

    /// Padding has no recovered size, so only a marker is emitted
    pub fn emit_pad(&self, w: &mut CodeWriter) {
        w.comment("PAD");
    }

    fn write_member(&self, w: &mut CodeWriter, type_name: &str, name: &str) {
        w.writeline(&format!("{} {};", type_name, name));
    }
}
