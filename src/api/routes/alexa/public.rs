//! Public types for the voice assistant skill API
//!
//! Mirrors the subset of the Alexa Skills Kit request and response
//! envelopes the skill reads and writes. Fields the skill doesn't use
//! are ignored on input.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AlexaRequest {
    #[serde(default)]
    pub request: RequestBody,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    // `LaunchRequest`, `IntentRequest` or `SessionEndedRequest`
    #[serde(rename = "type", default)]
    pub kind: String,
    pub intent: Option<Intent>,
}

#[derive(Debug, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Value the user gave for `slot`, if any.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct Slot {
    pub value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AlexaResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: &str) -> Self {
        Self {
            kind: String::from("PlainText"),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl AlexaResponse {
    pub fn new(speech: &str, reprompt: Option<&str>, should_end_session: bool) -> Self {
        Self {
            version: String::from("1.0"),
            response: ResponseBody {
                output_speech: OutputSpeech::plain_text(speech),
                reprompt: reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session,
            },
        }
    }
}
