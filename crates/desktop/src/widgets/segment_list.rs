use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length, Theme};

use gijiroku_core::transcription::domain::transcript::SpeakerSegment;

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

/// Card listing one entry per diarized segment, in service order.
pub fn view<'a>(segments: &[SpeakerSegment], fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let primary = theme.palette().primary;

    let title = text("話者別ログ").size(scaled(16.0, fs)).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    });

    let body: Element<'a, Message> = if segments.is_empty() {
        text("セグメントが存在しません。")
            .size(scaled(13.0, fs))
            .color(tertiary)
            .into()
    } else {
        let mut entries = column![].spacing(14);
        for segment in segments {
            let header = row![
                text(segment.speaker.clone())
                    .size(scaled(13.0, fs))
                    .color(primary)
                    .font(iced::Font {
                        weight: iced::font::Weight::Semibold,
                        ..iced::Font::DEFAULT
                    }),
                Space::new().width(Length::Fill),
                text(segment.time_range())
                    .size(scaled(12.0, fs))
                    .color(tertiary),
            ]
            .align_y(iced::Alignment::Center);

            entries = entries.push(
                column![header, text(segment.text.clone()).size(scaled(13.0, fs))].spacing(4),
            );
        }
        entries.into()
    };

    container(column![title, Space::new().height(10), body])
        .padding(16)
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
