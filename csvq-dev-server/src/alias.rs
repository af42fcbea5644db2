use std::collections::BTreeMap;
use std::path::PathBuf;

/// Maps a module specifier like `@/views/query.js` onto the directory
/// the alias points at. Aliases only match a whole leading segment.
pub fn apply_alias(specifier: &str, aliases: &BTreeMap<String, String>) -> Option<PathBuf> {
    for (alias, dir) in aliases {
        if let Some(rest) = specifier.strip_prefix(alias.as_str()) {
            if rest.is_empty() {
                return Some(PathBuf::from(dir));
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return Some(PathBuf::from(dir).join(rest));
            }
        }
    }
    None
}
