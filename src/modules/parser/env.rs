//! Environment variable substitution for profile files

use mongohook_core::MongoHookError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Expands `{{ env.NAME }}` placeholders in profile files.
///
/// Credentials are usually kept out of the profile file this way, e.g.
/// `password: "{{ env.MONGO_PASSWORD }}"`.
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a new substitutor with strict mode (fails on missing vars)
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a new substitutor with lenient mode (leaves placeholders for missing vars)
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn substitute(&self, content: &str) -> Result<String, MongoHookError> {
        let _ = dotenvy::dotenv();
        self.substitute_with(content, |name| std::env::var(name).ok())
    }

    /// Substitute placeholders using `lookup` to resolve variable names
    pub fn substitute_with<F>(&self, content: &str, lookup: F) -> Result<String, MongoHookError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let result = ENV_PATTERN.replace_all(content, |cap: &Captures<'_>| {
            let name = &cap[1];
            match lookup(name) {
                Some(value) => value,
                None => {
                    if self.strict && !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if !missing.is_empty() {
            return Err(MongoHookError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result.into_owned())
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_with_lookup() {
        let env = vars(&[("MONGO_USER", "app"), ("MONGO_PASSWORD", "s3cret")]);
        let result = EnvSubstitutor::new()
            .substitute_with(
                "login: {{ env.MONGO_USER }}\npassword: {{env.MONGO_PASSWORD}}",
                |name| env.get(name).cloned(),
            )
            .unwrap();
        assert_eq!(result, "login: app\npassword: s3cret");
    }

    #[test]
    fn test_substitute_from_process_env() {
        std::env::set_var("MONGOHOOK_TEST_HOST", "db.internal");
        let result = EnvSubstitutor::new()
            .substitute("host: {{ env.MONGOHOOK_TEST_HOST }}")
            .unwrap();
        assert_eq!(result, "host: db.internal");
        std::env::remove_var("MONGOHOOK_TEST_HOST");
    }

    #[test]
    fn test_missing_var_strict_lists_each_once() {
        let err = EnvSubstitutor::new()
            .substitute_with("{{ env.A }} {{ env.B }} {{ env.A }}", |_| None)
            .unwrap_err();
        match err {
            MongoHookError::EnvVarNotFound(names) => assert_eq!(names, "A, B"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_var_lenient() {
        let result = EnvSubstitutor::lenient()
            .substitute_with("{{ env.NONEXISTENT_VAR_12345 }}", |_| None)
            .unwrap();
        assert_eq!(result, "{{ env.NONEXISTENT_VAR_12345 }}");
    }
}
