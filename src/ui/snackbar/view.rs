// SPDX-License-Identifier: MPL-2.0
//! Rendering of the snackbar layer.
//!
//! The occupant of a [`Container`] is drawn as a dark card anchored to the
//! bottom center of the layer. While entering or leaving it slides and fades
//! according to the container's visibility factor.

use super::container::{Container, Message};
use super::model::{PresentationState, Snackbar};
use super::style::{ActionState, SnackbarStyle};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Container as Layer, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Renders the container's occupant, or an empty layer.
pub fn overlay(host: &Container) -> Element<'_, Message> {
    let Some(snackbar) = host.current() else {
        return Layer::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let visibility = ease_out(host.visibility());
    let body = card(snackbar, visibility);

    Layer::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            top: 0.0,
            right: spacing::MD,
            bottom: spacing::XS + sizing::SNACKBAR_SLIDE_DISTANCE * visibility,
            left: spacing::MD,
        })
        .into()
}

fn card(snackbar: &Snackbar, visibility: f32) -> Element<'_, Message> {
    let style = *snackbar.style();
    let interactive = snackbar.state() == PresentationState::Showing;
    let id = snackbar.id();

    let message_color = fade(style.message_color().unwrap_or(palette::WHITE), visibility);
    let message = Text::new(snackbar.message())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(message_color),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Layer::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(label) = snackbar.action_text() {
        let action = button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::XS])
            .style(move |theme: &Theme, status| action_button_style(theme, status, style, visibility));
        let action = if interactive {
            action.on_press(Message::ActionPressed(id))
        } else {
            action
        };
        content = content.push(action);
    }

    let body = Layer::new(content)
        .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
        .padding([spacing::SM, spacing::MD])
        .style(move |_theme: &Theme| surface_style(visibility));

    if interactive && snackbar.can_tap_to_dismiss() {
        // The action button captures its own presses, so taps on it never
        // reach this area.
        mouse_area(body).on_press(Message::BodyTapped(id)).into()
    } else {
        body.into()
    }
}

/// Cubic ease-out, so the card decelerates into place.
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility,
        ..color
    }
}

fn surface_style(visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE * visibility,
            ..palette::GRAY_800
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: if visibility > 0.0 {
            iced::Shadow {
                color: fade(shadow::MD.color, opacity::OVERLAY_MEDIUM * visibility),
                ..shadow::MD
            }
        } else {
            shadow::NONE
        },
        text_color: Some(fade(palette::WHITE, visibility)),
        ..Default::default()
    }
}

fn action_button_style(
    _theme: &Theme,
    status: button::Status,
    style: SnackbarStyle,
    visibility: f32,
) -> button::Style {
    let state = ActionState::from(status);
    let default_color = match state {
        ActionState::Normal => palette::PRIMARY_200,
        ActionState::Hovered | ActionState::Pressed => palette::PRIMARY_400,
        ActionState::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_200
        },
    };
    let text_color = fade(style.action_color(state).unwrap_or(default_color), visibility);

    let background = match state {
        ActionState::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * visibility,
            ..palette::GRAY_400
        })),
        ActionState::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * visibility,
            ..palette::GRAY_400
        })),
        ActionState::Normal | ActionState::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_is_bounded_and_monotonic() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        let mut previous = 0.0;
        for step in 1..=10 {
            let value = ease_out(step as f32 / 10.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn surface_fades_with_visibility() {
        let hidden = surface_style(0.0);
        let shown = surface_style(1.0);
        let alpha = |style: &container::Style| match style.background {
            Some(Background::Color(color)) => color.a,
            _ => panic!("expected solid background"),
        };
        assert_eq!(alpha(&hidden), 0.0);
        assert_eq!(alpha(&shown), opacity::SURFACE);
    }

    #[test]
    fn action_style_uses_custom_color() {
        let mut style = SnackbarStyle::default();
        style.set_action_color(palette::WHITE, ActionState::Normal);
        let rendered = action_button_style(&Theme::Dark, button::Status::Active, style, 1.0);
        assert_eq!(rendered.text_color, palette::WHITE);
    }

    #[test]
    fn action_style_falls_back_to_palette() {
        let rendered = action_button_style(
            &Theme::Dark,
            button::Status::Active,
            SnackbarStyle::default(),
            1.0,
        );
        assert_eq!(rendered.text_color, palette::PRIMARY_200);
        assert!(rendered.background.is_none());
    }
}
