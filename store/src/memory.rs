use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.values.lock().unwrap().get(TOKEN_KEY).cloned()
    }

    fn set_token(&self, token: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(TOKEN_KEY.to_string(), token.to_string());
    }

    fn user(&self) -> Option<String> {
        self.values.lock().unwrap().get(USER_KEY).cloned()
    }

    fn save(&self, token: &str, user_json: &str) {
        let mut values = self.values.lock().unwrap();
        values.insert(TOKEN_KEY.to_string(), token.to_string());
        values.insert(USER_KEY.to_string(), user_json.to_string());
    }

    fn clear(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(TOKEN_KEY);
        values.remove(USER_KEY);
    }
}
