use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Substitute `${VAR}` and `${VAR:-fallback}` references in raw TOML
///
/// Runs before deserialization so config structs hold plain strings.
/// `$$` produces a literal `$`. Lines whose first non-blank character is
/// `#` are copied untouched, so commented-out settings never require
/// their variables to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"\$\$|\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut cursor = 0;
        for captures in pattern().captures_iter(line) {
            let whole = captures.get(0).expect("group 0 always matches");
            output.push_str(&line[cursor..whole.start()]);
            output.push_str(&substitute(&captures)?);
            cursor = whole.end();
        }
        output.push_str(&line[cursor..]);
    }

    Ok(output)
}

fn substitute(captures: &Captures<'_>) -> Result<String, String> {
    let Some(name) = captures.get(1) else {
        return Ok("$".to_string());
    };

    match (std::env::var(name.as_str()), captures.get(2)) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.as_str().to_string()),
        (Err(std::env::VarError::NotUnicode(_)), None) => {
            Err(format!("environment variable is not valid unicode: `{}`", name.as_str()))
        }
        (Err(std::env::VarError::NotPresent), None) => {
            Err(format!("environment variable not found: `{}`", name.as_str()))
        }
    }
}
