use serde::{ Serialize, Deserialize };

/// One finished exchange, serialized as `[user, assistant]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn(pub String, pub String);

impl Turn {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self(user.into(), assistant.into())
    }

    pub fn user(&self) -> &str {
        &self.0
    }

    pub fn assistant(&self) -> &str {
        &self.1
    }
}

/// Body posted to the inference endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictPayload {
    pub about_me: String,
    pub question: String,
    pub to_load_history: Vec<Turn>,
}

impl PredictPayload {
    pub fn new(message: &str, history: &[Turn], profile: &str) -> Self {
        Self {
            about_me: profile.to_string(),
            question: message.to_string(),
            to_load_history: history.to_vec(),
        }
    }
}

/// Accepted shapes of a successful endpoint body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BackendAnswer {
    Text(String),
    Object {
        answer: String,
    },
}

impl BackendAnswer {
    pub fn into_text(self) -> String {
        match self {
            BackendAnswer::Text(text) => text,
            BackendAnswer::Object { answer } => answer,
        }
    }
}
