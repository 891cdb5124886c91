//! Label casing for instruction names, account fields and program paths.

/// Uppercases the first character. Empty input stays empty.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `helloWorld` → `Hello World`.
///
/// A space goes before every ASCII uppercase letter except a leading one, so
/// `HelloWorld` also gives `Hello World`.
pub fn camel_to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for (i, c) in s.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    capitalize_first(&spaced)
}

/// `hello_world` / `hello-world` → `Hello World`.
///
/// Only a separator followed by a word character is replaced; trailing
/// separators are kept as they are.
pub fn snake_to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if matches!(c, '_' | '-') && (next.is_alphanumeric() || next == '_') => {
                out.push(' ');
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    capitalize_first(&out)
}

/// `foo_bar/baz_qux` → `FooBar/BazQux`.
pub fn snake_to_pascal(s: &str) -> String {
    s.split('/')
        .map(|segment| segment.split('_').map(capitalize_first).collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}
