//! Name casing helpers shared by templates and the generator

/// `innerHTML` → `inner_html`, `CoreModule` → `core_module`
pub fn decamelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut previous: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        previous = Some(c);
    }
    out
}

/// `CoreModule` → `core-module`, `app routing` → `app-routing`
pub fn dasherize(input: &str) -> String {
    decamelize(input).replace([' ', '_'], "-")
}

/// `app-routing` → `appRouting`, `Core_module` → `coreModule`
pub fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for c in input.chars() {
        if matches!(c, '-' | '_' | '.') || c.is_whitespace() {
            upper_next = !out.is_empty() || upper_next;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    lower_first(&out)
}

/// `app-routing` → `AppRouting`, `core` → `Core`
pub fn classify(input: &str) -> String {
    input
        .split('.')
        .map(|part| capitalize(&camelize(part)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Uppercase the first character
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => input.to_string(),
    }
}
