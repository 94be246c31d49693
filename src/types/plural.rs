// Thu Feb 05 2026 - Alex

/// Decides whether a pointer field holds one value or many.
///
/// Returns `Some(true)` for plural, `Some(false)` for singular, `None`
/// when the name matches no rule; callers flag `None` for manual
/// override instead of guessing.
pub type PluralityRule = Box<dyn Fn(&str) -> Option<bool>>;

/// English-pluralisation heuristic observed across the Vulkan headers.
///
/// The leading Hungarian pointer prefix (`p`, `pp`) is stripped before
/// testing suffixes. Latin-style `-is` endings are reported as ambiguous.
pub fn default_plurality(name: &str) -> Option<bool> {
    let trimmed = name.trim_start_matches('p');
    if trimmed.ends_with("ss") {
        return Some(false);
    }
    if trimmed.ends_with("is") {
        return None;
    }
    Some(trimmed.ends_with('s'))
}
