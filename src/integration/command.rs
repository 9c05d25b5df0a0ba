//! Text-command layer: parses the short verbs arriving over the message
//! transport and formats the replies going back.

use tracing::info;

use crate::guidance::{GuidanceError, SessionStatus, SharedSession};

use super::{InventoryStore, SpeechChannel};

/// A recognized text command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Begin guiding toward the named item.
    Start(String),
    /// End the current guidance episode.
    Stop,
    /// Report whether guidance is running and for what.
    Status,
    /// Report items that are out of stock.
    Alert,
    /// Report the full inventory.
    List,
}

impl Command {
    /// Parse one incoming message. Matching is case-insensitive and
    /// whitespace-tolerant; `None` means the verb is unrecognized and the
    /// caller should reply with the command menu.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim().to_lowercase();
        if let Some(rest) = text.strip_prefix("start ") {
            let label = rest.trim();
            if !label.is_empty() {
                return Some(Command::Start(label.to_string()));
            }
        }
        match text.as_str() {
            "start" => Some(Command::Start(String::new())),
            "stop" => Some(Command::Stop),
            "status" => Some(Command::Status),
            "alert" => Some(Command::Alert),
            "list" => Some(Command::List),
            _ => None,
        }
    }
}

const HELP: &str = "Commands:\n\
    'start <item>' - begin guidance\n\
    'stop' - end guidance\n\
    'status' - guidance status\n\
    'alert' - items out of stock\n\
    'list' - full inventory";

/// Routes parsed commands to the shared session and the inventory seam,
/// producing the text reply for the message transport.
pub struct CommandRouter<I: InventoryStore> {
    session: SharedSession,
    inventory: I,
    speech: Option<SpeechChannel>,
}

impl<I: InventoryStore> CommandRouter<I> {
    pub fn new(session: SharedSession, inventory: I) -> Self {
        Self {
            session,
            inventory,
            speech: None,
        }
    }

    /// Also announce session starts through a speech channel.
    pub fn with_speech(mut self, speech: SpeechChannel) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Handle one incoming message and produce the reply text.
    pub fn handle(&self, text: &str) -> String {
        let Some(command) = Command::parse(text) else {
            info!(message = %text.trim(), "unrecognized command");
            return HELP.to_string();
        };

        match command {
            Command::Start(label) if label.is_empty() => "Usage: start <item>".to_string(),
            Command::Start(label) => match self.session.start(&label) {
                Ok(announcement) => {
                    if let Some(speech) = &self.speech {
                        speech.submit(announcement);
                    }
                    format!("Guidance started for: {label}\nSend 'stop' to end.")
                }
                Err(GuidanceError::AlreadyActive(label)) => format!("already guiding {label}"),
                Err(err) => err.to_string(),
            },
            Command::Stop => {
                self.session.stop();
                "Guidance stopped.".to_string()
            }
            Command::Status => match self.session.status() {
                SessionStatus::Idle => "idle".to_string(),
                SessionStatus::Active { label } => format!("guiding {label}"),
            },
            Command::Alert => self.alert_reply(),
            Command::List => self.list_reply(),
        }
    }

    fn alert_reply(&self) -> String {
        let mut zero_items: Vec<String> = self
            .inventory
            .snapshot()
            .into_iter()
            .filter(|(_, count)| *count == 0)
            .map(|(item, _)| item)
            .collect();
        zero_items.sort();

        match zero_items.len() {
            0 => "No items at zero quantity".to_string(),
            1 => format!("PANTRY ALERT\n\nOut of stock:\n- {}", zero_items[0]),
            n => format!(
                "PANTRY ALERT\n\nOut of stock ({n} items):\n- {}",
                zero_items.join("\n- ")
            ),
        }
    }

    fn list_reply(&self) -> String {
        let mut items = self.inventory.snapshot();
        if items.is_empty() {
            return "Inventory is empty. Scan items first.".to_string();
        }
        items.sort();

        let mut reply = format!("PANTRY INVENTORY\n\nTotal: {} items\n\n", items.len());
        for (item, count) in items {
            if count == 0 {
                reply.push_str(&format!("- {item}: OUT OF STOCK\n"));
            } else {
                reply.push_str(&format!("- {item}: {count}\n"));
            }
        }
        reply
    }
}
