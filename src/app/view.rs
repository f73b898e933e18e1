// SPDX-License-Identifier: MPL-2.0
//! Control panel where the user composes and fires toasts.

use super::draft::Draft;
use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Category, Phase};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, checkbox, container, pick_list, text, text_input, Column, Row, Space};
use iced::{Element, Length};

/// Everything the panel needs besides the draft itself.
pub struct PanelContext {
    pub phase: Option<Phase>,
    pub taps: usize,
    pub actions: usize,
}

pub fn panel<'a>(draft: &'a Draft, ctx: PanelContext) -> Element<'a, Message> {
    let title = text("Toast playground").size(typography::TITLE_MD);

    let message_input = text_input("Message", &draft.message)
        .on_input(Message::MessageChanged)
        .padding(6)
        .size(typography::BODY)
        .width(Length::Fill);

    let category_picker = pick_list(
        Category::ALL,
        Some(draft.category),
        Message::CategorySelected,
    )
    .width(Length::Fill);

    let duration_input = text_input("Duration in ms, 0 keeps it", &draft.duration_input)
        .on_input(Message::DurationChanged)
        .padding(6)
        .size(typography::BODY)
        .width(Length::Fill);

    let duration_hint = if draft.duration().is_some() {
        text("")
    } else {
        text("Not a number, the configured default applies").size(typography::CAPTION)
    };

    let toggles = Column::new()
        .spacing(spacing::XS)
        .push(
            checkbox(draft.show_progress_bar)
                .label("Show progress bar")
                .on_toggle(Message::ProgressBarToggled),
        )
        .push(
            checkbox(draft.dismissible)
                .label("Dismissible")
                .on_toggle(Message::DismissibleToggled),
        )
        .push(
            checkbox(draft.with_action)
                .label("Undo action")
                .on_toggle(Message::ActionToggled),
        )
        .push(
            checkbox(draft.with_tap_callback)
                .label("Tap callback")
                .on_toggle(Message::TapCallbackToggled),
        );

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("Show").size(typography::BODY))
                .padding([6, 12])
                .style(iced::widget::button::primary)
                .on_press(Message::Show),
        )
        .push(
            button(text("Dismiss").size(typography::BODY))
                .padding([6, 12])
                .style(iced::widget::button::secondary)
                .on_press_maybe(ctx.phase.map(|_| Message::Dismiss)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("Save defaults").size(typography::BODY))
                .padding([6, 12])
                .style(iced::widget::button::text)
                .on_press(Message::SaveDefaults),
        );

    let phase = ctx
        .phase
        .map_or_else(|| "idle".to_string(), |phase| format!("{phase:?}"));
    let status = text(format!(
        "Toast: {phase} | taps: {} | actions: {}",
        ctx.taps, ctx.actions
    ))
    .size(typography::CAPTION);

    let form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::DEMO_PANEL_WIDTH))
        .push(title)
        .push(message_input)
        .push(category_picker)
        .push(duration_input)
        .push(duration_hint)
        .push(toggles)
        .push(buttons)
        .push(status);

    container(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}
