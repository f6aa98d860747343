//! Namespaced packet names.
//!
//! A fully-qualified name is `<namespace>:<short name>`, e.g. `minecraft:hello`.

/// Namespace applied to every packet name unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Separator between namespace and short name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Build the fully-qualified name for `short` under `namespace`.
pub fn qualify(namespace: &str, short: &str) -> String {
    format!("{namespace}{NAMESPACE_SEPARATOR}{short}")
}

/// Strip `namespace:` from a fully-qualified name.
///
/// Returns `None` if the name belongs to a different namespace or has none.
pub fn strip_namespace<'a>(namespace: &str, qualified: &'a str) -> Option<&'a str> {
    qualified
        .strip_prefix(namespace)?
        .strip_prefix(NAMESPACE_SEPARATOR)
}

/// Short name of a fully-qualified name, whatever its namespace.
pub fn short_name(qualified: &str) -> &str {
    qualified
        .split_once(NAMESPACE_SEPARATOR)
        .map_or(qualified, |(_, short)| short)
}
