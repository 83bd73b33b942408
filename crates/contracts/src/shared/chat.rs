//! Переписка студента и ментора с имитацией ответа собеседника

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ответы собеседника, выбираются по кругу
pub const CANNED_REPLIES: [&str; 5] = [
    "Thanks for the message! I'll take a look shortly.",
    "Good question. Let's go through it in our next session.",
    "Could you share a bit more detail about where you got stuck?",
    "Nice progress this week, keep it up!",
    "I've added a few resources to your course page.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatAuthor {
    Me,
    Peer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: ChatAuthor,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(author: ChatAuthor, text: String, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text,
            sent_at,
        }
    }

    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub peer_name: String,
    pub messages: Vec<ChatMessage>,
    /// Сообщения, на которые собеседник ещё не ответил
    #[serde(default)]
    pub pending_replies: u32,
}

impl Conversation {
    pub fn new(peer_name: impl Into<String>) -> Self {
        Self {
            peer_name: peer_name.into(),
            messages: Vec::new(),
            pending_replies: 0,
        }
    }

    /// Разговор с приветствием собеседника
    pub fn with_greeting(peer_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let mut conversation = Self::new(peer_name);
        let greeting = format!("Hi! I'm {}. How can I help today?", conversation.peer_name);
        conversation
            .messages
            .push(ChatMessage::new(ChatAuthor::Peer, greeting, now));
        conversation
    }

    /// Отправить сообщение; пустые сообщения игнорируются.
    /// Возвращает `true`, если сообщение добавлено и нужен автоответ.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages
            .push(ChatMessage::new(ChatAuthor::Me, text.to_string(), now));
        self.pending_replies += 1;
        true
    }

    /// Текст следующего автоответа: по номеру самого старого неотвеченного сообщения
    pub fn next_reply_text(&self) -> &'static str {
        let sent = self
            .messages
            .iter()
            .filter(|m| m.author == ChatAuthor::Me)
            .count();
        let answered = sent.saturating_sub(self.pending_replies as usize);
        CANNED_REPLIES[answered % CANNED_REPLIES.len()]
    }

    /// Собеседник "печатает", пока есть хотя бы один неотвеченный вопрос
    pub fn is_peer_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Добавить автоответ собеседника
    pub fn push_auto_reply(&mut self, now: DateTime<Utc>) {
        let text = self.next_reply_text().to_string();
        self.messages.push(ChatMessage::new(ChatAuthor::Peer, text, now));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T10:15:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut chat = Conversation::new("Elena");
        assert!(!chat.send("   ", now()));
        assert!(chat.messages.is_empty());
    }

    #[test]
    fn test_send_and_reply_cycle() {
        let mut chat = Conversation::with_greeting("Elena", now());
        assert_eq!(chat.messages.len(), 1);

        assert!(chat.send(" hello ", now()));
        assert_eq!(chat.messages[1].text, "hello");
        chat.push_auto_reply(now());
        assert_eq!(chat.messages[2].author, ChatAuthor::Peer);
        assert_eq!(chat.messages[2].text, CANNED_REPLIES[0]);

        chat.send("second", now());
        assert_eq!(chat.next_reply_text(), CANNED_REPLIES[1]);
    }

    #[test]
    fn test_replies_wrap_around() {
        let mut chat = Conversation::new("Elena");
        for i in 0..CANNED_REPLIES.len() + 1 {
            chat.send(&format!("msg {}", i), now());
        }
        assert_eq!(chat.next_reply_text(), CANNED_REPLIES[0]);
    }

    #[test]
    fn test_time_label() {
        let mut chat = Conversation::new("Elena");
        chat.send("hi", now());
        assert_eq!(chat.messages[0].time_label(), "10:15");
    }

    #[test]
    fn test_typing_lasts_until_last_reply() {
        let mut chat = Conversation::new("Elena");
        assert!(!chat.is_peer_typing());
        chat.send("first", now());
        chat.send("second", now());
        assert_eq!(chat.pending_replies, 2);

        chat.push_auto_reply(now());
        assert!(chat.is_peer_typing());
        assert_eq!(chat.messages[2].text, CANNED_REPLIES[0]);

        chat.push_auto_reply(now());
        assert!(!chat.is_peer_typing());
        assert_eq!(chat.messages[3].text, CANNED_REPLIES[1]);

        chat.push_auto_reply(now());
        assert_eq!(chat.pending_replies, 0);
    }
}
