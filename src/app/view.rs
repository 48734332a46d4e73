// SPDX-License-Identifier: MPL-2.0
//! Demo screen layout: buttons, an activity log, and the snackbar layer on top.

use super::message::{Demo, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::snackbar::Container as Snackbars;
use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snackbars: &'a Snackbars,
    pub activity: Vec<String>,
    pub diagnostics: String,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let demo_button = |key: &str, message: Message| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(message)
    };

    let buttons = Column::new()
        .spacing(spacing::XS)
        .push(demo_button("button-delete", Message::Show(Demo::Delete)))
        .push(demo_button("button-indefinite", Message::Show(Demo::Indefinite)))
        .push(demo_button("button-sync", Message::Show(Demo::LongRunning)))
        .push(demo_button("button-tap", Message::Show(Demo::TapToDismiss)))
        .push(demo_button("button-dismiss", Message::DismissCurrent))
        .push(demo_button("button-clear-diagnostics", Message::ClearDiagnostics));

    let activity = if ctx.activity.is_empty() {
        Column::new().push(text(i18n.tr("activity-empty")).size(typography::CAPTION))
    } else {
        ctx.activity.into_iter().fold(Column::new(), |column, line| {
            column.push(text(line).size(typography::CAPTION))
        })
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(text(i18n.tr("demo-intro")).size(typography::BODY))
        .push(buttons)
        .push(text(i18n.tr("activity-heading")).size(typography::BODY))
        .push(activity.spacing(spacing::XXS))
        .push(text(i18n.tr("diagnostics-heading")).size(typography::BODY))
        .push(text(ctx.diagnostics).size(typography::CAPTION));

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        )
        .push(ctx.snackbars.view().map(Message::Snackbar))
        .into()
}
