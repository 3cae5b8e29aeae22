// Shared helpers for unit tests

use once_cell::sync::Lazy;
use playfab_client::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Title configuration without credentials
pub static TITLE_CONFIG: Lazy<Config> = Lazy::new(|| Config::empty().with_title_id("ABCD"));

/// Transport recording every call and answering with canned payloads
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<ApiCall>>,
    responses: Mutex<HashMap<String, Value>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers calls to `path` with `data` instead of an empty object
    pub fn respond(self, path: &str, data: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), data);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> ApiCall {
        self.calls().pop().expect("no call recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn call(&self, call: ApiCall) -> Result<Value, AppError> {
        let response = self
            .responses
            .lock()
            .unwrap()
            .get(call.path)
            .cloned()
            .unwrap_or_else(|| json!({}));
        self.calls.lock().unwrap().push(call);
        Ok(response)
    }
}

pub fn client(config: Config) -> PlayFabClient<RecordingTransport> {
    PlayFabClient::with_transport(Arc::new(config), RecordingTransport::new())
}

pub fn client_with(config: Config, transport: RecordingTransport) -> PlayFabClient<RecordingTransport> {
    PlayFabClient::with_transport(Arc::new(config), transport)
}
