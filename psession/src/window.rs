//! Bounded, oldest-first-evicting conversation memory.
//!
//! ```rust
//! use pprovider::Message;
//! use psession::ConversationWindow;
//!
//! let mut window = ConversationWindow::new(2);
//! window.push(Message::user("one"));
//! window.push(Message::assistant("two"));
//! let evicted = window.push(Message::user("three"));
//!
//! assert_eq!(evicted, Some(Message::user("one")));
//! assert_eq!(window.len(), 2);
//! ```

use std::collections::VecDeque;

use pprovider::Message;

pub const DEFAULT_WINDOW_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationWindow {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl ConversationWindow {
    /// Creates an empty window. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a message, returning the oldest one if it had to be evicted.
    pub fn push(&mut self, message: Message) -> Option<Message> {
        let evicted = if self.messages.len() == self.capacity {
            self.messages.pop_front()
        } else {
            None
        };

        self.messages.push_back(message);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use pprovider::Message;

    use super::{ConversationWindow, DEFAULT_WINDOW_SIZE};

    #[test]
    fn window_keeps_newest_messages_in_order() {
        let mut window = ConversationWindow::new(3);
        for index in 0..4 {
            window.push(Message::user(format!("m{index}")));
        }

        assert_eq!(window.len(), 3);
        let contents = window
            .iter()
            .map(|message| message.content.as_str())
            .collect::<Vec<_>>();
        assert_eq!(contents, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut window = ConversationWindow::default();
        assert_eq!(window.capacity(), DEFAULT_WINDOW_SIZE);

        for index in 0..(DEFAULT_WINDOW_SIZE * 3) {
            window.push(Message::assistant(index.to_string()));
            assert!(window.len() <= DEFAULT_WINDOW_SIZE);
        }

        assert_eq!(window.len(), DEFAULT_WINDOW_SIZE);
        assert_eq!(
            window.to_vec().first().map(|message| message.content.as_str()),
            Some("20")
        );
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut window = ConversationWindow::new(0);
        assert_eq!(window.capacity(), 1);

        assert_eq!(window.push(Message::user("a")), None);
        assert_eq!(window.push(Message::user("b")), Some(Message::user("a")));
        assert_eq!(window.to_vec(), vec![Message::user("b")]);

        window.clear();
        assert!(window.is_empty());
    }
}
