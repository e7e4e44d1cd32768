#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use dish_assistant::config::AssistantSettings;
use dish_assistant::logging::EventLog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Keeps every event so tests can assert on what was logged.
#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<(Level, String)>>,
}

impl RecordingLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message)
            .collect()
    }
}

impl EventLog for RecordingLog {
    fn info(&self, message: &str) {
        self.events.lock().unwrap().push((Level::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push((Level::Error, message.to_string()));
    }
}

/// Settings pointing both upstreams at a local mock server.
pub fn settings_for(server_uri: &str) -> AssistantSettings {
    AssistantSettings {
        generative_api_key: Some("test-gemini-key".to_string()),
        generative_api_url: server_uri.to_string(),
        food_app_id: Some("test-app-id".to_string()),
        food_app_key: Some("test-app-key".to_string()),
        food_api_url: server_uri.to_string(),
        ..Default::default()
    }
}
