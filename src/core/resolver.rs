//! Path template expansion
//!
//! Templates are directory paths that may reference environment variables
//! as `$NAME` or `${NAME}`. Expansion never fails: an unset variable
//! contributes an empty string, the same way a shell would expand it.

use std::path::{Component, Path, PathBuf};

use crate::core::ports::Environment;

/// Substitute every variable reference in `template`
///
/// - `$NAME` consumes the longest run of ASCII alphanumerics and `_`
/// - `${NAME}` consumes everything up to the closing brace
/// - A `$` that starts neither form, or an unterminated `${`, is kept as-is
pub fn expand(template: &str, env: &dyn Environment) -> String {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        expanded.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                expanded.push_str(&lookup(env, &braced[..end]));
                rest = &braced[end + 1..];
                continue;
            }
        } else {
            let len = after
                .find(|c: char| !is_name_char(c))
                .unwrap_or(after.len());
            if len > 0 {
                expanded.push_str(&lookup(env, &after[..len]));
                rest = &after[len..];
                continue;
            }
        }

        expanded.push('$');
        rest = after;
    }

    expanded.push_str(rest);
    expanded
}

/// Build the full candidate path for one template
///
/// Joins the expanded directory, `prefix`, and `file_name` in that order and
/// normalizes the result lexically.
pub fn candidate_path(
    template: &str,
    prefix: &str,
    file_name: &str,
    env: &dyn Environment,
) -> PathBuf {
    let directory = expand(template, env);
    join_normalized(&[directory.as_str(), prefix, file_name])
}

fn lookup(env: &dyn Environment, name: &str) -> String {
    env.var(name).unwrap_or_default()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Join path segments the way a lexical `join` + `clean` would
///
/// Empty segments are ignored, duplicate separators and `.` are dropped,
/// and `..` removes the previous component. Only the first non-empty segment
/// may make the result absolute; a root in a later segment does not reset
/// what came before it.
fn join_normalized(segments: &[&str]) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for (index, segment) in segments.iter().filter(|s| !s.is_empty()).enumerate() {
        for component in Path::new(segment).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    if index == 0 {
                        normalized.push(component);
                    }
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    if depth > 0 {
                        normalized.pop();
                        depth -= 1;
                    } else if !normalized.has_root() {
                        normalized.push(component);
                    }
                }
                Component::Normal(name) => {
                    normalized.push(name);
                    depth += 1;
                }
            }
        }
    }

    normalized
}
