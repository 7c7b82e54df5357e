//! Type-directed default format selection, mirroring the bundled runtime's
//! `print_any` `_Generic` dispatch: each C type this compiler emits maps to
//! exactly one printf conversion.

/// Selects the default printf conversion for a C type name as produced by
/// [`super::typemap::map_type`]. Anything not covered here (struct
/// pointers, `void`, arrays) falls back to `%d`, matching `print_any`'s own
/// `default: "%d"` arm — documented as a fallback, not inferred.
pub fn default_format_for_c_type(c_type: &str) -> &'static str {
    match c_type {
        "int" => "%d",
        "long" => "%ld",
        "long long" => "%lld",
        "unsigned int" => "%u",
        "unsigned long" => "%lu",
        "unsigned long long" => "%llu",
        "short" => "%hd",
        "unsigned short" => "%hu",
        "signed char" => "%hhd",
        "unsigned char" => "%hhu",
        "size_t" => "%zu",
        "float" => "%f",
        "double" => "%lf",
        "long double" => "%Lf",
        "char*" | "sds" => "%s",
        "char" => "%c",
        _ => "%d",
    }
}
