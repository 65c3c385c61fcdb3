use std::path::Path;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length, Theme};

use crate::app::{scaled, Message, Phase, StatusMessage};
use crate::theme::tertiary_color;
use crate::upload::UploadController;
use crate::widgets::{segment_list, summary_card};

pub fn view<'a>(
    fs: f32,
    audio_path: Option<&Path>,
    status: &StatusMessage,
    upload: &UploadController,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let pending = upload.is_pending();

    let submit_label = if pending {
        "処理中..."
    } else {
        "アップロードして要約"
    };
    let mut submit = button(
        text(submit_label)
            .size(scaled(15.0, fs))
            .align_x(iced::Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill);
    if !pending {
        // Disabled while a request is in flight.
        submit = submit.on_press(Message::Submit);
    }

    let status_color = match status.phase {
        Phase::Error => theme.palette().danger,
        _ => tertiary,
    };
    let status_line = text(status.text.clone())
        .size(scaled(13.0, fs))
        .color(status_color);

    let mut col = column![
        file_row(fs, audio_path, theme),
        Space::new().height(14),
        submit,
        Space::new().height(10),
        status_line,
    ]
    .spacing(0);

    if let Some(response) = upload.response() {
        col = col
            .push(Space::new().height(20))
            .push(summary_card::view(
                response.metadata.summary_text(),
                fs,
                theme,
            ))
            .push(Space::new().height(12))
            .push(segment_list::view(&response.segments, fs, theme));
    }

    col.into()
}

fn file_row<'a>(fs: f32, path: Option<&Path>, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let display_text: Element<'a, Message> = if let Some(name) = path.and_then(|p| p.file_name()) {
        text(name.to_string_lossy().to_string())
            .size(scaled(15.0, fs))
            .into()
    } else {
        text("ファイルが選択されていません")
            .size(scaled(15.0, fs))
            .color(tertiary)
            .into()
    };

    let label_text = text("音声ファイル (wav, mp3, m4a, mp4)")
        .size(scaled(11.0, fs))
        .color(tertiary);

    let btn = button(text("選択").size(scaled(13.0, fs)))
        .padding([6, 14])
        .on_press(Message::SelectAudio)
        .style(button::secondary);

    let content = row![
        column![label_text, display_text].width(Length::Fill),
        btn
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(content)
        .padding([14, 16])
        .style(container::rounded_box)
        .width(Length::Fill)
        .into()
}
