//! Hotkey system
//!
//! Centralized hotkey management for the planner.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Step the chart to the next finer zoom level
    ChartZoomIn,
    /// Step the chart to the next coarser zoom level
    ChartZoomOut,
    /// Save the current plan.
    SavePlan,
    /// Export the chart as an SVG document.
    ExportSvg,
    /// Collapse or expand the selected summary task.
    ToggleExpandSelection,
}

/// Context information that affects which hotkeys are active.
///
/// Some hotkeys only make sense in certain contexts:
/// - Expand/collapse requires a selection
/// - Most hotkeys are suppressed while typing
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether any tasks are selected
    pub has_selection: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    // ═══════════════════════════════════════════════════════════════
    // Global Hotkeys (work regardless of context)
    // ═══════════════════════════════════════════════════════════════

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "s" || c == "S") => {
            return HotkeyResult::Action(HotkeyAction::SavePlan);
        }
        Key::Character(c) if (ctrl || meta) && (c == "e" || c == "E") => {
            return HotkeyResult::Action(HotkeyAction::ExportSvg);
        }
        // Chart zoom: +/- step the zoom level catalog
        Key::Character(c) if c == "+" => return HotkeyResult::Action(HotkeyAction::ChartZoomIn),
        Key::Character(c) if c == "-" => return HotkeyResult::Action(HotkeyAction::ChartZoomOut),
        _ => {}
    }

    // ═══════════════════════════════════════════════════════════════
    // Context-Specific Hotkeys
    // ═══════════════════════════════════════════════════════════════

    if context.has_selection {
        if let Key::Character(c) = key {
            if c == " " {
                return HotkeyResult::Action(HotkeyAction::ToggleExpandSelection);
            }
        }
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_zooms_in() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ChartZoomIn)));
    }

    #[test]
    fn test_minus_zooms_out() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ChartZoomOut)));
    }

    #[test]
    fn test_ctrl_s_saves_plan() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("s".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SavePlan)));
    }

    #[test]
    fn test_space_toggles_expansion_only_with_selection() {
        let no_selection = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &no_selection);
        assert!(matches!(result, HotkeyResult::NoMatch));

        let with_selection = HotkeyContext { has_selection: true, ..Default::default() };
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &with_selection);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ToggleExpandSelection)));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
            ..Default::default()
        };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
