// ── Session gate ──
//
// The dashboard never compares credentials itself; it asks an injected
// `CredentialVerifier`. The stock verifier is a fixed pair.

use secrecy::{ExposeSecret, SecretString};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

/// Decides whether a username/password pair opens a session.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Inline error shown under the login form after a rejection.
    fn rejection_message(&self) -> String {
        "Invalid credentials".into()
    }
}

/// A single fixed credential pair compared by equality.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: SecretString,
    hint: bool,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
            hint: false,
        }
    }

    /// The built-in demo pair. Its rejection message spells the pair out,
    /// since it is not a secret.
    pub fn demo() -> Self {
        Self {
            username: DEMO_USERNAME.into(),
            password: SecretString::from(DEMO_PASSWORD.to_string()),
            hint: true,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::demo()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }

    fn rejection_message(&self) -> String {
        if self.hint {
            format!(
                "Invalid credentials. Use {} / {}",
                self.username,
                self.password.expose_secret()
            )
        } else {
            "Invalid credentials".into()
        }
    }
}

/// Credential input buffers bound to the login form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.expose_secret().is_empty()
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password = SecretString::from(String::new());
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: SecretString::from(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_is_exact() {
        let creds = StaticCredentials::demo();
        assert!(creds.verify("admin", "admin123"));
        assert!(!creds.verify("admin", "wrong"));
        assert!(!creds.verify("Admin", "admin123"));
        assert!(!creds.verify("admin ", "admin123"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn demo_rejection_names_the_pair() {
        assert_eq!(
            StaticCredentials::demo().rejection_message(),
            "Invalid credentials. Use admin / admin123"
        );
    }

    #[test]
    fn configured_pair_does_not_leak_password() {
        let creds = StaticCredentials::new("ops", SecretString::from("s3cret".to_string()));
        assert!(creds.verify("ops", "s3cret"));
        assert_eq!(creds.rejection_message(), "Invalid credentials");
    }

    #[test]
    fn form_clear_empties_both_fields() {
        let mut form = LoginForm {
            username: "admin".into(),
            password: SecretString::from("admin123".to_string()),
        };
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }
}
