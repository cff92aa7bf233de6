//! Application state
//!
//! All business data lives in one struct passed by reference into the
//! per-frame scene function, so multiple independent UI instances (and
//! tests) can each own their own state. Everything is seeded with fixed
//! sample data; there is no persistence and ids are literal strings.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Texture unit of the user's avatar, if one was loaded
    pub avatar_unit: Option<u32>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub member_ids: Vec<String>,
}

/// Process state for one chat window
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: Vec<User>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    /// Id of the conversation shown in the feed
    pub selected_conversation: Option<String>,
    /// Composer buffer
    pub compose_text: String,
    /// Search-modal query
    pub search_query: String,
    /// Conversation id whose row menu is open, if any
    pub open_menu: Option<String>,
    next_message_seq: u32,
}

impl AppState {
    /// Fixed sample data
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: "user-1".to_string(),
                first_name: "Olivier".to_string(),
                last_name: "Perron".to_string(),
                avatar_unit: None,
            },
            User {
                id: "user-2".to_string(),
                first_name: "Marc".to_string(),
                last_name: "Bum".to_string(),
                avatar_unit: None,
            },
            User {
                id: "user-3".to_string(),
                first_name: "Simon".to_string(),
                last_name: "Robichaud".to_string(),
                avatar_unit: None,
            },
        ];

        let conversations = vec![
            Conversation {
                id: "conversation-1".to_string(),
                name: "Marc Bum".to_string(),
                member_ids: vec!["user-1".to_string(), "user-2".to_string()],
            },
            Conversation {
                id: "conversation-2".to_string(),
                name: "Simon Robichaud".to_string(),
                member_ids: vec!["user-1".to_string(), "user-3".to_string()],
            },
        ];

        let messages = vec![
            Message {
                id: "message-1".to_string(),
                conversation_id: "conversation-1".to_string(),
                sender_id: "user-2".to_string(),
                text: "Hey, did you see the new build?".to_string(),
                created_at: "09:12".to_string(),
            },
            Message {
                id: "message-2".to_string(),
                conversation_id: "conversation-1".to_string(),
                sender_id: "user-1".to_string(),
                text: "Just pulled it, looks good so far.".to_string(),
                created_at: "09:14".to_string(),
            },
            Message {
                id: "message-3".to_string(),
                conversation_id: "conversation-2".to_string(),
                sender_id: "user-3".to_string(),
                text: "Lunch later?".to_string(),
                created_at: "11:02".to_string(),
            },
        ];

        Self {
            users,
            conversations,
            messages,
            selected_conversation: Some("conversation-1".to_string()),
            compose_text: String::new(),
            search_query: String::new(),
            open_menu: None,
            next_message_seq: 4,
        }
    }

    /// The local user sending composed messages
    pub fn local_user_id(&self) -> &str {
        "user-1"
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let selected = self.selected_conversation.as_deref()?;
        self.conversations.iter().find(|c| c.id == selected)
    }

    pub fn messages_for<'a>(
        &'a self,
        conversation_id: &'a str,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages
            .iter()
            .filter(move |m| m.conversation_id == conversation_id)
    }

    pub fn select_conversation(&mut self, id: &str) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.selected_conversation = Some(id.to_string());
        }
    }

    /// Append the composer buffer to the selected conversation and clear
    /// it. Returns false when the buffer is empty or nothing is selected.
    pub fn send_message(&mut self) -> bool {
        if self.compose_text.trim().is_empty() {
            return false;
        }
        let Some(conversation_id) = self.selected_conversation.clone() else {
            return false;
        };

        let id = format!("message-{}", self.next_message_seq);
        self.next_message_seq += 1;
        self.messages.push(Message {
            id,
            conversation_id,
            sender_id: self.local_user_id().to_string(),
            text: std::mem::take(&mut self.compose_text),
            created_at: chrono::Local::now().format("%H:%M").to_string(),
        });
        true
    }

    /// Remove a conversation and its messages. If it was selected, the
    /// remaining first conversation becomes selected (or nothing, when
    /// none remain).
    pub fn delete_conversation(&mut self, id: &str) {
        self.conversations.retain(|c| c.id != id);
        self.messages.retain(|m| m.conversation_id != id);
        if self.open_menu.as_deref() == Some(id) {
            self.open_menu = None;
        }
        if self.selected_conversation.as_deref() == Some(id) {
            self.selected_conversation = self.conversations.first().map(|c| c.id.clone());
        }
    }

    /// Case-insensitive substring search over first and last names.
    ///
    /// An empty query yields no suggestions at all.
    pub fn search_users(&self, query: &str) -> Vec<&User> {
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.first_name.to_lowercase().contains(&query)
                    || u.last_name.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn sender_name(&self, sender_id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == sender_id)
            .map(|u| u.full_name())
            .unwrap_or_else(|| sender_id.to_string())
    }
}
