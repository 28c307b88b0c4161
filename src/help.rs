//! Dynamic help text generation from keymaps.

use crate::app::Message;
use crate::keys::{Keymap, format_key};

/// A single help item representing one or more related actions.
pub struct HelpItem {
    /// Messages to look up keys for. Keys are joined with "/".
    messages: Vec<Message>,
    label: &'static str,
}

impl HelpItem {
    pub fn new(message: Message, label: &'static str) -> Self {
        Self {
            messages: vec![message],
            label,
        }
    }

    /// Create a help item for paired actions (e.g., H/L for prev/next region).
    pub fn pair(first: Message, second: Message, label: &'static str) -> Self {
        Self {
            messages: vec![first, second],
            label,
        }
    }

    fn keys(&self, keymap: &Keymap) -> Option<String> {
        let keys: Vec<String> = self
            .messages
            .iter()
            .filter_map(|msg| {
                keymap
                    .find_key(msg)
                    .map(|(code, mods)| format_key(code, mods))
            })
            .collect();
        (!keys.is_empty()).then(|| keys.join("/"))
    }

    /// Format this help item using the given keymap.
    /// Returns None if no keys are bound for any of the messages.
    pub fn format(&self, keymap: &Keymap) -> Option<String> {
        self.keys(keymap)
            .map(|keys| format!("{}:{}", keys, self.label))
    }

    /// Returns (`keys_string`, label) for the overlay, or None if no keys are bound.
    pub fn format_for_overlay(&self, keymap: &Keymap) -> Option<(String, &'static str)> {
        self.keys(keymap).map(|keys| (keys, self.label))
    }
}

/// A collection of help items for a specific context.
pub struct HelpConfig {
    pub items: Vec<HelpItem>,
}

impl HelpConfig {
    pub fn format(&self, keymap: &Keymap) -> String {
        self.items
            .iter()
            .filter_map(|item| item.format(keymap))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Compact status bar help for the trending view.
pub fn trending_help() -> HelpConfig {
    use Message::{
        NextCategory, NextRegion, OpenVideo, PrevCategory, PrevRegion, Quit, ToggleHelp,
    };
    HelpConfig {
        items: vec![
            HelpItem::pair(PrevRegion, NextRegion, "country"),
            HelpItem::pair(PrevCategory, NextCategory, "category"),
            HelpItem::new(OpenVideo, "watch"),
            HelpItem::new(ToggleHelp, "help"),
            HelpItem::new(Quit, "quit"),
        ],
    }
}

/// Help configuration for the filter pickers.
pub fn picker_help() -> HelpConfig {
    use Message::{ClosePicker, ConfirmPicker, PickerDown, PickerUp};
    HelpConfig {
        items: vec![
            HelpItem::pair(PickerDown, PickerUp, "select"),
            HelpItem::new(ConfirmPicker, "confirm"),
            HelpItem::new(ClosePicker, "cancel"),
        ],
    }
}

/// Help items for the trending view overlay.
pub fn trending_overlay_items() -> Vec<HelpItem> {
    use Message::{
        NextCategory, NextRegion, OpenCategoryPicker, OpenRegionPicker, OpenThumbnail,
        OpenVideo, PrevCategory, PrevRegion, Quit, Refresh, SelectFirst, SelectLast, SelectNext,
        SelectPrev, ToggleDebug, ToggleHelp,
    };
    vec![
        HelpItem::pair(SelectNext, SelectPrev, "navigate"),
        HelpItem::pair(SelectFirst, SelectLast, "first/last"),
        HelpItem::new(OpenVideo, "watch video"),
        HelpItem::new(OpenThumbnail, "open thumbnail"),
        HelpItem::pair(PrevRegion, NextRegion, "switch country"),
        HelpItem::pair(PrevCategory, NextCategory, "switch category"),
        HelpItem::new(OpenRegionPicker, "choose country"),
        HelpItem::new(OpenCategoryPicker, "choose category"),
        HelpItem::new(Refresh, "refresh"),
        HelpItem::new(ToggleDebug, "debug"),
        HelpItem::new(Quit, "quit"),
        HelpItem::new(ToggleHelp, "close"),
    ]
}
