use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for PII redaction in log output.
///
/// All patterns are vetted literals; construction cannot fail at runtime.
struct PiiPatterns;

impl PiiPatterns {
    fn email() -> &'static Regex {
        static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL
    }

    /// Postgres constraint details: `Key (username)=(alice) already exists.`
    fn key_detail() -> &'static Regex {
        static KEY_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"Key \(([^)]*)\)=\(([^)]*)\)").unwrap()
        });
        &KEY_DETAIL
    }
}

/// Redacts user data from a string (typically a raw database error).
///
/// - Emails keep the first character of the local part and the full domain.
/// - Constraint detail values are replaced, column names are kept.
pub fn redact(input: &str) -> String {
    let emails = PiiPatterns::email().replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.find('@') {
            Some(0) | None => full.to_string(),
            Some(at) => format!("{}***{}", &full[..1], &full[at..]),
        }
    });

    PiiPatterns::key_detail()
        .replace_all(&emails, "Key ($1)=([REDACTED])")
        .to_string()
}

/// Wrapper that redacts its contents when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
