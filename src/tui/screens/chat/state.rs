//! Chat state management

use crate::inference::ParameterOverrides;

/// A single chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Chat session state
///
/// Owns the displayed conversation history and the pending parameter
/// overrides; the adapter never sees either. History lives only for the
/// duration of one interactive session.
pub struct ChatState {
    /// Message history
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, counted in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Currently selected model identifier
    pub model: String,
    /// Parameter overrides applied to every subsequent turn
    pub overrides: ParameterOverrides,
    /// Whether a request is in flight; input is locked while true
    pub loading: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl ChatState {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            model: model.into(),
            overrides: ParameterOverrides::default(),
            loading: false,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Add a message to history
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        // Auto-scroll to bottom
        self.scroll_to_bottom();
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Byte offset matching `cursor_pos`; the buffer may hold multi-byte
    /// characters, so the cursor must never index the string directly.
    fn cursor_byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte_offset();
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.cursor_byte_offset();
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            let at = self.cursor_byte_offset();
            self.input.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down; the render pass clamps the offset to the
    /// content height.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Clamped during render based on content height
        self.scroll_offset = u16::MAX;
    }

    /// Switch to another model; pending overrides are kept
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        self.status_message = Some(format!("Model: {}", self.model));
    }

    /// Clear the conversation
    pub fn reset(&mut self) {
        self.messages.clear();
        self.scroll_offset = 0;
        self.status_message = Some("Conversation cleared".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.loading {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }
}
