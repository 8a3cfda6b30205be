//! Keyboard mapping for polytope selection
//!
//! Controls:
//! - 2-8: select dimension
//! - Tab / Right arrow: next family
//! - Left arrow: previous family
//! - +/-: adjust animation speed
//! - Space: pause/resume
//! - Backspace: reset the animation clock

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// A selection-surface command decoded from a key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionCommand {
    /// Switch the active object to this dimension
    SetDimension(usize),
    /// Cycle to the next family
    NextFamily,
    /// Cycle to the previous family
    PrevFamily,
    /// Nudge the time scale by this delta (positive or negative)
    AdjustTimeScale(f32),
    /// Pause or resume the animation clock
    TogglePause,
    /// Rewind the animation clock to zero
    ResetClock,
}

/// Decoder from winit keyboard events to [`SelectionCommand`]s.
pub struct SelectionInput {
    time_scale_step: f32,
}

impl Default for SelectionInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionInput {
    pub fn new() -> Self {
        Self {
            time_scale_step: 0.1,
        }
    }

    /// Set the increment used by the speed-adjust keys.
    pub fn with_time_scale_step(mut self, step: f32) -> Self {
        self.time_scale_step = step;
        self
    }

    /// Decode a keyboard event. Only key presses produce commands.
    pub fn process_keyboard(
        &self,
        key: KeyCode,
        state: ElementState,
    ) -> Option<SelectionCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Digit2 => Some(SelectionCommand::SetDimension(2)),
            KeyCode::Digit3 => Some(SelectionCommand::SetDimension(3)),
            KeyCode::Digit4 => Some(SelectionCommand::SetDimension(4)),
            KeyCode::Digit5 => Some(SelectionCommand::SetDimension(5)),
            KeyCode::Digit6 => Some(SelectionCommand::SetDimension(6)),
            KeyCode::Digit7 => Some(SelectionCommand::SetDimension(7)),
            KeyCode::Digit8 => Some(SelectionCommand::SetDimension(8)),
            KeyCode::Tab | KeyCode::ArrowRight => Some(SelectionCommand::NextFamily),
            KeyCode::ArrowLeft => Some(SelectionCommand::PrevFamily),
            KeyCode::Equal | KeyCode::NumpadAdd => {
                Some(SelectionCommand::AdjustTimeScale(self.time_scale_step))
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                Some(SelectionCommand::AdjustTimeScale(-self.time_scale_step))
            }
            KeyCode::Space => Some(SelectionCommand::TogglePause),
            KeyCode::Backspace => Some(SelectionCommand::ResetClock),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_dimensions() {
        let input = SelectionInput::new();
        assert_eq!(
            input.process_keyboard(KeyCode::Digit2, ElementState::Pressed),
            Some(SelectionCommand::SetDimension(2))
        );
        assert_eq!(
            input.process_keyboard(KeyCode::Digit8, ElementState::Pressed),
            Some(SelectionCommand::SetDimension(8))
        );
    }

    #[test]
    fn releases_are_ignored() {
        let input = SelectionInput::new();
        assert_eq!(
            input.process_keyboard(KeyCode::Digit4, ElementState::Released),
            None
        );
    }

    #[test]
    fn family_cycling_keys() {
        let input = SelectionInput::new();
        assert_eq!(
            input.process_keyboard(KeyCode::Tab, ElementState::Pressed),
            Some(SelectionCommand::NextFamily)
        );
        assert_eq!(
            input.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed),
            Some(SelectionCommand::PrevFamily)
        );
    }

    #[test]
    fn speed_keys_use_configured_step() {
        let input = SelectionInput::new().with_time_scale_step(0.25);
        assert_eq!(
            input.process_keyboard(KeyCode::Equal, ElementState::Pressed),
            Some(SelectionCommand::AdjustTimeScale(0.25))
        );
        assert_eq!(
            input.process_keyboard(KeyCode::Minus, ElementState::Pressed),
            Some(SelectionCommand::AdjustTimeScale(-0.25))
        );
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        let input = SelectionInput::new();
        assert_eq!(
            input.process_keyboard(KeyCode::KeyQ, ElementState::Pressed),
            None
        );
        assert_eq!(
            input.process_keyboard(KeyCode::Digit9, ElementState::Pressed),
            None
        );
    }
}
