/// Tracks the messages produced during one assistant session, most recent last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationContext {
    messages: Vec<String>
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
