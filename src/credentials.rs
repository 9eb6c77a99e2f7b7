use std::sync::Mutex;

use inquire::Password;

// Capability for sourcing the API key, chosen once at startup and injected
// into the fetch service. The key is never logged or written anywhere.
pub trait CredentialProvider: Send + Sync {
    fn resolve(&self) -> Option<String>;
}

// Key already resolved from CONFIG_FILE or the environment.
pub struct ConfiguredCredentials {
    key: Option<String>,
}

impl ConfiguredCredentials {
    pub fn new(key: Option<String>) -> Self {
        Self {
            key: key.filter(|k| !k.trim().is_empty()),
        }
    }
}

impl CredentialProvider for ConfiguredCredentials {
    fn resolve(&self) -> Option<String> {
        self.key.clone()
    }
}

// Interactive fallback for the terminal session: ask once, keep the answer
// for the rest of the process.
pub struct PromptCredentials {
    cached: Mutex<Option<String>>,
}

impl PromptCredentials {
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }
}

impl Default for PromptCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for PromptCredentials {
    fn resolve(&self) -> Option<String> {
        let mut cached = self.cached.lock().ok()?;
        if cached.is_none() {
            *cached = Password::new("OpenAI APIキーを入力してください。")
                .without_confirmation()
                .prompt()
                .ok()
                .filter(|k| !k.trim().is_empty());
        }
        cached.clone()
    }
}
