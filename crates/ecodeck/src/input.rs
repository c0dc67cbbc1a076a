use eframe::egui;

use crate::controller::Command;

/// A key press translated for the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deck(Command),
    ToggleFullscreen,
    ToggleHelp,
    CycleTransition,
    /// Close the help overlay if it is open, otherwise quit.
    Dismiss,
    Quit,
}

/// Map one key press to an action. Chorded presses are left to the OS.
pub fn action_for_key(
    key: egui::Key,
    modifiers: egui::Modifiers,
    slide_count: usize,
) -> Option<Action> {
    if modifiers.ctrl || modifiers.command || modifiers.alt {
        return None;
    }
    let action = match key {
        egui::Key::ArrowRight => Action::Deck(Command::Advance),
        egui::Key::ArrowLeft => Action::Deck(Command::Retreat),
        egui::Key::Space => Action::Deck(Command::ToggleAutoPlay),
        egui::Key::Home => Action::Deck(Command::Jump(0)),
        egui::Key::End => Action::Deck(Command::Jump(slide_count.saturating_sub(1))),
        egui::Key::F => Action::ToggleFullscreen,
        egui::Key::H => Action::ToggleHelp,
        egui::Key::T => Action::CycleTransition,
        egui::Key::Escape => Action::Dismiss,
        egui::Key::Q => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Actions for every key pressed this frame, in the order they arrived.
/// Held keys repeat, like a browser `keydown`.
pub fn collect_actions(input: &egui::InputState, slide_count: usize) -> Vec<Action> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => action_for_key(*key, *modifiers, slide_count),
            _ => None,
        })
        .collect()
}

/// Keyboard reference shown by the help overlay.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("\u{2192}", "Next slide"),
    ("\u{2190}", "Previous slide"),
    ("Space", "Toggle auto-play"),
    ("Home / End", "First / last slide"),
    ("T", "Cycle transition"),
    ("F", "Toggle fullscreen"),
    ("H", "Toggle this help"),
    ("Click", "Prev / Next / pagination"),
    ("Esc", "Close help / quit"),
    ("Q", "Quit"),
];
