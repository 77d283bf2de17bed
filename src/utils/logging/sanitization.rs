//! Redaction of credentials in log output

use once_cell::sync::Lazy;
use regex::Regex;

static SENSITIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(bearer\s+)[a-zA-Z0-9\-_.=]+",
        r#"(?i)((?:access|refresh)?_?token["']?\s*[=:]\s*["']?)[a-zA-Z0-9\-_.]+"#,
        r#"(?i)(password["']?\s*[=:]\s*["']?)[^\s"'&,}]+"#,
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

pub struct Sanitization;

impl Sanitization {
    /// Replace bearer tokens, token fields and passwords with a marker
    pub fn sanitize_log_data(data: &str) -> String {
        let mut sanitized = data.to_string();

        for re in SENSITIVE_PATTERNS.iter() {
            sanitized = re.replace_all(&sanitized, "${1}***REDACTED***").to_string();
        }

        sanitized
    }

    /// Short fingerprint of a credential: first and last four characters
    pub fn mask_token(token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() <= 12 {
            return "***".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
