use iced::widget::{button, checkbox, column, pick_list, slider, text, text_input, Space};
use iced::Element;

use gijiroku_core::shared::constants::DEFAULT_SERVER_URL;

use crate::app::{scaled, Message};
use crate::settings::{Appearance, Settings};

pub fn view<'a>(fs: f32, settings: &Settings) -> Element<'a, Message> {
    let server_url = column![
        text("サーバーURL").size(scaled(12.0, fs)),
        text_input(DEFAULT_SERVER_URL, &settings.server_url)
            .on_input(Message::ServerUrlChanged)
            .size(scaled(14.0, fs)),
    ]
    .spacing(6);

    let language = column![
        text("言語コード").size(scaled(12.0, fs)),
        text_input("ja", &settings.language)
            .on_input(Message::LanguageChanged)
            .size(scaled(14.0, fs)),
    ]
    .spacing(6);

    let summarize = checkbox(settings.summarize)
        .label("会議の要約を生成する")
        .on_toggle(Message::SummarizeToggled)
        .size(scaled(16.0, fs))
        .text_size(scaled(13.0, fs));

    let appearance = column![
        text("外観").size(scaled(12.0, fs)),
        pick_list(
            Appearance::ALL,
            Some(settings.appearance),
            Message::AppearanceChanged,
        )
        .text_size(scaled(13.0, fs)),
    ]
    .spacing(6);

    let font_scale = column![
        text(format!("文字サイズ {:.0}%", settings.font_scale * 100.0)).size(scaled(12.0, fs)),
        slider(0.8..=1.5, settings.font_scale, Message::FontScaleChanged).step(0.05),
    ]
    .spacing(6);

    let restore = button(text("初期設定に戻す").size(scaled(13.0, fs)))
        .on_press(Message::RestoreDefaults)
        .padding([8, 16])
        .style(button::secondary);

    column![
        server_url,
        Space::new().height(14),
        language,
        Space::new().height(14),
        summarize,
        Space::new().height(20),
        appearance,
        Space::new().height(14),
        font_scale,
        Space::new().height(24),
        restore,
    ]
    .spacing(0)
    .into()
}
