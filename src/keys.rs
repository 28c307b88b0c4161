use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Message};

/// A declarative keybinding map that can be composed and extended.
#[derive(Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Message)>,
}

impl Keymap {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding with no modifiers.
    pub fn bind(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::NONE, message));
        self
    }

    /// Add a key binding with Ctrl modifier.
    pub fn bind_ctrl(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::CONTROL, message));
        self
    }

    /// Look up a message for a key event.
    /// Modifiers must match exactly, except SHIFT, which terminals fold into uppercase letters.
    /// Later bindings take precedence over earlier ones.
    pub fn get(&self, event: &KeyEvent) -> Option<Message> {
        self.bindings
            .iter()
            .rev()
            .find(|(code, mods, _)| {
                *code == event.code && event.modifiers.difference(KeyModifiers::SHIFT) == *mods
            })
            .map(|(_, _, msg)| msg.clone())
    }

    /// Extend this keymap with another. The other keymap's bindings take precedence.
    pub fn extend(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// Find the first key bound to a specific message.
    pub fn find_key(&self, message: &Message) -> Option<(KeyCode, KeyModifiers)> {
        self.bindings
            .iter()
            .find(|(_, _, msg)| msg == message)
            .map(|(code, mods, _)| (*code, *mods))
    }
}

/// Format a key binding for display in help text.
pub fn format_key(code: KeyCode, mods: KeyModifiers) -> String {
    let key_str = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    };
    if mods.contains(KeyModifiers::CONTROL) {
        format!("C-{key_str}")
    } else {
        key_str
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keybindings that work everywhere outside popups.
pub fn global_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('q'), Message::Quit)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
        .bind(KeyCode::Char('`'), Message::ToggleDebug)
}

/// Keybindings for the region and category picker popups.
pub fn picker_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::PickerDown)
        .bind(KeyCode::Down, Message::PickerDown)
        .bind_ctrl(KeyCode::Char('n'), Message::PickerDown)
        .bind(KeyCode::Char('k'), Message::PickerUp)
        .bind(KeyCode::Up, Message::PickerUp)
        .bind_ctrl(KeyCode::Char('p'), Message::PickerUp)
        .bind(KeyCode::Enter, Message::ConfirmPicker)
        .bind(KeyCode::Esc, Message::ClosePicker)
        .bind(KeyCode::Char('q'), Message::ClosePicker)
        .bind_ctrl(KeyCode::Char('c'), Message::ClosePicker)
}

/// Keybindings for the help overlay popup.
fn help_overlay_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
        .bind(KeyCode::Esc, Message::ToggleHelp)
        .bind(KeyCode::Char('q'), Message::ToggleHelp)
        .bind_ctrl(KeyCode::Char('c'), Message::ToggleHelp)
}

/// Trending view keybindings.
pub fn trending_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::SelectNext)
        .bind(KeyCode::Down, Message::SelectNext)
        .bind(KeyCode::Right, Message::SelectNext)
        .bind(KeyCode::Char('k'), Message::SelectPrev)
        .bind(KeyCode::Up, Message::SelectPrev)
        .bind(KeyCode::Left, Message::SelectPrev)
        .bind(KeyCode::Char('g'), Message::SelectFirst)
        .bind(KeyCode::Char('G'), Message::SelectLast)
        .bind(KeyCode::Enter, Message::OpenVideo)
        .bind(KeyCode::Char('o'), Message::OpenVideo)
        .bind(KeyCode::Char('i'), Message::OpenThumbnail)
        .bind(KeyCode::Char('r'), Message::Refresh)
        .bind(KeyCode::Char('R'), Message::Refresh)
        .bind(KeyCode::Char('H'), Message::PrevRegion)
        .bind(KeyCode::Char('L'), Message::NextRegion)
        .bind(KeyCode::Char('['), Message::PrevCategory)
        .bind(KeyCode::Char(']'), Message::NextCategory)
        .bind(KeyCode::Char('c'), Message::OpenRegionPicker)
        .bind(KeyCode::Char('C'), Message::OpenCategoryPicker)
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
}

pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    // Picker takes priority when open
    if app.picker.is_some() {
        return picker_keymap().get(&key);
    }

    // Help overlay takes priority when open
    if app.help_overlay {
        return help_overlay_keymap().get(&key);
    }

    global_keymap().extend(trending_keymap()).get(&key)
}
