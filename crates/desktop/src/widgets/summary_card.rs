use iced::widget::{column, container, text, Space};
use iced::{Element, Length, Theme};

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

/// Card showing the meeting summary, or a fallback when the service
/// produced none.
pub fn view<'a>(summary: Option<&str>, fs: f32, theme: &Theme) -> Element<'a, Message> {
    let title = text("要約").size(scaled(16.0, fs)).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    });

    let body: Element<'a, Message> = match summary {
        Some(summary) => text(summary.to_owned()).size(scaled(13.0, fs)).into(),
        None => text("要約は利用できません。")
            .size(scaled(13.0, fs))
            .color(tertiary_color(theme))
            .into(),
    };

    container(column![title, Space::new().height(10), body])
        .padding(16)
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
