//! Chat state tests

use hfchat::tui::screens::chat::{ChatMessage, ChatState, MessageRole};

#[test]
fn message_constructors_set_roles() {
    assert_eq!(ChatMessage::user("hi").role, MessageRole::User);
    assert_eq!(ChatMessage::assistant("hello").role, MessageRole::Assistant);
    assert_eq!(ChatMessage::system("note").role, MessageRole::System);
}

#[test]
fn add_message_scrolls_to_bottom() {
    let mut state = ChatState::new("gpt2");
    state.scroll_offset = 3;
    state.add_message(ChatMessage::user("hi"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn take_input_clears_buffer_and_cursor() {
    let mut state = ChatState::new("gpt2");
    for c in "hello".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.cursor_pos, 5);

    let taken = state.take_input();
    assert_eq!(taken, "hello");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn cursor_editing_in_the_middle() {
    let mut state = ChatState::new("gpt2");
    for c in "abc".chars() {
        state.insert_char(c);
    }
    state.move_cursor_left();
    state.insert_char('X');
    assert_eq!(state.input, "abXc");

    state.delete_char();
    assert_eq!(state.input, "abc");
}

#[test]
fn multibyte_input_stays_on_char_boundaries() {
    let mut state = ChatState::new("gpt2");
    state.insert_char('é');
    state.insert_char('a');
    assert_eq!(state.input, "éa");
    assert_eq!(state.cursor_pos, 2);

    state.delete_char();
    assert_eq!(state.input, "é");
    state.delete_char();
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn editing_in_the_middle_of_multibyte_text() {
    let mut state = ChatState::new("gpt2");
    for c in "日本語".chars() {
        state.insert_char(c);
    }
    state.move_cursor_left();
    state.insert_char('x');
    assert_eq!(state.input, "日本x語");
    assert_eq!(state.cursor_pos, 3);

    state.delete_char_forward();
    assert_eq!(state.input, "日本x");

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 3);
    state.insert_char('🦀');
    assert_eq!(state.input, "日本x🦀");
}

#[test]
fn delete_at_start_is_a_no_op() {
    let mut state = ChatState::new("gpt2");
    state.insert_char('a');
    state.move_cursor_home();
    state.delete_char();
    assert_eq!(state.input, "a");
}

#[test]
fn set_model_updates_status() {
    let mut state = ChatState::new("gpt2");
    state.set_model("Qwen/Qwen-7B-Chat");
    assert_eq!(state.model, "Qwen/Qwen-7B-Chat");
    assert!(state.status_message.as_deref().unwrap().contains("Qwen"));
}

#[test]
fn reset_clears_history_but_keeps_model_and_overrides() {
    let mut state = ChatState::new("gpt2");
    state.overrides.temperature = Some(1.2);
    state.add_message(ChatMessage::user("hi"));
    state.add_message(ChatMessage::assistant("hello"));

    state.reset();
    assert!(state.messages.is_empty());
    assert_eq!(state.scroll_offset, 0);
    assert_eq!(state.model, "gpt2");
    assert_eq!(state.overrides.temperature, Some(1.2));
}

#[test]
fn scrolling_moves_one_line_at_a_time() {
    let mut state = ChatState::new("gpt2");
    state.scroll_down();
    state.scroll_down();
    assert_eq!(state.scroll_offset, 2);
    state.scroll_up();
    assert_eq!(state.scroll_offset, 1);
}

#[test]
fn command_detection() {
    let mut state = ChatState::new("gpt2");
    assert!(!state.is_command());
    state.insert_char('/');
    assert!(state.is_command());
}

#[test]
fn loading_frame_only_ticks_while_loading() {
    let mut state = ChatState::new("gpt2");
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);

    state.loading = true;
    state.tick_loading();
    assert_eq!(state.loading_frame, 1);
    state.tick_loading();
    state.tick_loading();
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}
