use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type Slots = HashMap<String, Option<String>>;
pub type SessionAttributes = HashMap<String, String>;

/// Lex (V1) code-hook input. Only the parts this bot reads are modelled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub current_intent: Option<CurrentIntent>,
    pub invocation_source: InvocationSource,
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
    pub dialog_action: DialogAction,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
        #[serde(skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    Delegate {
        slots: Slots,
    },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FulfillmentState {
    Fulfilled,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl Message {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub version: u8,
    pub content_type: String,
    pub generic_attachments: Vec<GenericAttachment>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenericAttachment {
    pub title: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Button {
    pub text: String,
    pub value: String,
}

impl ResponseCard {
    /// Single "Choose one:" card; each button sends its own label back.
    pub fn choices(options: &[&str]) -> Self {
        Self {
            version: 1,
            content_type: "application/vnd.amazonaws.card.generic".into(),
            generic_attachments: vec![GenericAttachment {
                title: "Choose one:".into(),
                buttons: options
                    .iter()
                    .map(|o| Button {
                        text: o.to_string(),
                        value: o.to_string(),
                    })
                    .collect(),
            }],
        }
    }
}
