// SPDX-License-Identifier: MPL-2.0
//! Text colors for the snackbar's message and action button.
//!
//! Colors are plain data: changing them never affects the lifecycle and they
//! are picked up on the next render.

use iced::widget::button;
use iced::Color;

/// Visual state of the action button that a text color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionState {
    Normal,
    Hovered,
    Pressed,
    Disabled,
}

impl ActionState {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            ActionState::Normal => 0,
            ActionState::Hovered => 1,
            ActionState::Pressed => 2,
            ActionState::Disabled => 3,
        }
    }
}

impl From<button::Status> for ActionState {
    fn from(status: button::Status) -> Self {
        match status {
            button::Status::Active => ActionState::Normal,
            button::Status::Hovered => ActionState::Hovered,
            button::Status::Pressed => ActionState::Pressed,
            button::Status::Disabled => ActionState::Disabled,
        }
    }
}

/// Color overrides for a single snackbar. Unset colors use the theme defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnackbarStyle {
    message_color: Option<Color>,
    action_colors: [Option<Color>; ActionState::COUNT],
}

impl SnackbarStyle {
    pub fn set_message_color(&mut self, color: Color) {
        self.message_color = Some(color);
    }

    pub fn set_action_color(&mut self, color: Color, state: ActionState) {
        self.action_colors[state.index()] = Some(color);
    }

    #[must_use]
    pub fn message_color(&self) -> Option<Color> {
        self.message_color
    }

    /// Returns the action text color for `state`.
    ///
    /// States without their own color inherit the `Normal` one.
    #[must_use]
    pub fn action_color(&self, state: ActionState) -> Option<Color> {
        self.action_colors[state.index()].or(self.action_colors[ActionState::Normal.index()])
    }
}
