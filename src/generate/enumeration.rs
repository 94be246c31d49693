// Fri Feb 06 2026 - Alex

use crate::generate::arguments::{EnumerationArguments, EnumerationConstant};
use crate::generate::naming;
use crate::parser::EnumerationData;
use crate::types::{NativeType, TypeError, TypeMapper};

/// Turns parsed enumerations into template arguments and registers the
/// resulting int-backed type (plus its Flags companion for bitfields).
pub struct EnumerationGenerator;

impl EnumerationGenerator {
    pub fn generate(
        data: &EnumerationData,
        mapper: &mut TypeMapper,
    ) -> Result<EnumerationArguments, TypeError> {
        let class_name = data.name().to_string();
        let prefix = naming::constant_prefix(&class_name);
        let fallback = prefix
            .trim_end_matches('_')
            .rsplit('_')
            .next()
            .map(naming::pascal_case)
            .unwrap_or_default();

        let mut constants = Vec::with_capacity(data.len());
        for (raw, value) in data.values() {
            let stripped = raw.strip_prefix(&prefix).unwrap_or(raw.as_str());
            let mut name = naming::pascal_case(stripped);
            if name.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                // identifiers cannot start with a digit, re-attach the
                // last prefix word (`Count1Bit`)
                name = format!("{}{}", fallback, name);
            }
            constants.push(EnumerationConstant {
                name,
                value: *value as u32,
            });
        }

        mapper.add(&class_name, NativeType::enumeration(&class_name))?;

        let flags_name = naming::flags_name(&class_name);
        if let Some(flags) = &flags_name {
            if mapper.contains(flags) {
                log::debug!("flags companion '{}' already registered", flags);
            } else {
                mapper.add(flags, NativeType::bitmask(flags))?;
            }
        }

        Ok(EnumerationArguments {
            class_name,
            flags_name,
            constants,
        })
    }
}
