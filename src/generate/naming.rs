// Fri Feb 06 2026 - Alex

/// `VkSampleCountFlagBits` -> `VK_SAMPLE_COUNT_FLAG_BITS`.
pub fn screaming_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (index, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && index > 0 {
            let previous = chars[index - 1];
            let next_is_lower = chars
                .get(index + 1)
                .map(|n| n.is_ascii_lowercase())
                .unwrap_or(false);
            if previous.is_ascii_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// `CUBIC_IMG` -> `CubicImg`.
pub fn pascal_case(screaming: &str) -> String {
    screaming
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Shared constant prefix implied by the enum type name.
///
/// The `FlagBits` suffix is dropped first; Vulkan bit constants carry the
/// base name only (`VK_SAMPLE_COUNT_1_BIT`).
pub fn constant_prefix(enum_name: &str) -> String {
    let base = enum_name.strip_suffix("FlagBits").unwrap_or(enum_name);
    format!("{}_", screaming_snake(base))
}

/// Flags companion for a bitfield enum: strip trailing "Bits", append "s".
pub fn flags_name(enum_name: &str) -> Option<String> {
    enum_name
        .strip_suffix("Bits")
        .map(|base| format!("{}s", base))
}
