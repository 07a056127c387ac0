
use serde::{Deserialize, Serialize};

use crate::workflow_dispatch::DispatchInputs;

// https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-object-interaction-type
const INTERACTION_PING: u64 = 1;
const INTERACTION_APPLICATION_COMMAND: u64 = 2;

// https://discord.com/developers/docs/interactions/receiving-and-responding#interaction-response-object-interaction-callback-type
const CALLBACK_PONG: u8 = 1;
const CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

// https://discord.com/developers/docs/resources/message#message-object-message-flags
const FLAG_EPHEMERAL: u64 = 1 << 6;

#[derive(Deserialize, Debug)]
struct TopLevelContent {
    r#type: u64,
    data: Option<CommandData>,
}

#[derive(Deserialize, Debug)]
struct CommandData {
    name: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum InteractionPayload {
    Ping,
    ApplicationCommand { name: String },
    Unsupported(u64),
}

impl InteractionPayload {
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        let content: TopLevelContent = serde_json::from_slice(body)?;
        let payload = match content.r#type {
            INTERACTION_PING => Self::Ping,
            INTERACTION_APPLICATION_COMMAND => {
                let name = content.data
                    .and_then(|data| data.name)
                    .unwrap_or_default()
                    .to_lowercase();
                Self::ApplicationCommand { name }
            }
            other => Self::Unsupported(other),
        };
        Ok(payload)
    }
}

// `/trigger` forces a fresh post, anything else (normally `/check`) does not.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlashCommand {
    Trigger,
    Check,
}

impl SlashCommand {
    pub fn from_name(name: &str) -> Self {
        match name {
            "trigger" => Self::Trigger,
            _ => Self::Check,
        }
    }

    pub fn inputs(self) -> DispatchInputs {
        match self {
            Self::Trigger => DispatchInputs::new().flag("force", true).flag("photo", true),
            Self::Check => DispatchInputs::new().flag("force", false).flag("photo", true),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct PongResponse {
    r#type: u8,
}

impl PongResponse {
    pub fn new() -> Self {
        Self { r#type: CALLBACK_PONG }
    }
}

#[derive(Serialize, Debug)]
pub struct EphemeralMessageResponse<'a> {
    r#type: u8,
    data: EphemeralMessageData<'a>,
}

#[derive(Serialize, Debug)]
struct EphemeralMessageData<'a> {
    flags: u64,
    content: &'a str,
}

impl<'a> EphemeralMessageResponse<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            r#type: CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE,
            data: EphemeralMessageData {
                flags: FLAG_EPHEMERAL,
                content,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ping() {
        assert_eq!(InteractionPayload::parse(br#"{"type":1}"#).unwrap(), InteractionPayload::Ping);
    }

    #[test]
    fn parses_command_name_case_insensitively() {
        let body = br#"{"type":2,"data":{"name":"TRIGGER","id":"1"}}"#;
        assert_eq!(
            InteractionPayload::parse(body).unwrap(),
            InteractionPayload::ApplicationCommand { name: "trigger".into() }
        );
    }

    #[test]
    fn command_without_name_has_empty_name() {
        assert_eq!(
            InteractionPayload::parse(br#"{"type":2}"#).unwrap(),
            InteractionPayload::ApplicationCommand { name: String::new() }
        );
    }

    #[test]
    fn other_types_are_unsupported() {
        assert_eq!(InteractionPayload::parse(br#"{"type":3}"#).unwrap(), InteractionPayload::Unsupported(3));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(InteractionPayload::parse(b"not json").is_err());
        assert!(InteractionPayload::parse(br#"{"type":"1"}"#).is_err());
        assert!(InteractionPayload::parse(b"{}").is_err());
    }

    #[test]
    fn trigger_forces_and_check_does_not() {
        let trigger = SlashCommand::from_name("trigger").inputs();
        assert_eq!(trigger.get("force"), Some("true"));
        assert_eq!(trigger.get("photo"), Some("true"));

        let check = SlashCommand::from_name("check").inputs();
        assert_eq!(check.get("force"), Some("false"));
        assert_eq!(check.get("photo"), Some("true"));

        assert_eq!(SlashCommand::from_name("whatever"), SlashCommand::Check);
    }

    #[test]
    fn response_shapes() {
        assert_eq!(serde_json::to_string(&PongResponse::new()).unwrap(), r#"{"type":1}"#);
        assert_eq!(
            serde_json::to_string(&EphemeralMessageResponse::new("done")).unwrap(),
            r#"{"type":4,"data":{"flags":64,"content":"done"}}"#
        );
    }
}
