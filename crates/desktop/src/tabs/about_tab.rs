use iced::widget::{column, text, Space};
use iced::{Element, Theme};

use crate::app::{scaled, Message};
use crate::theme::tertiary_color;

pub fn view<'a>(fs: f32, theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    column![
        text("ぎじろくさくせん").size(scaled(18.0, fs)).font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        }),
        Space::new().height(4),
        text(format!("バージョン {}", env!("CARGO_PKG_VERSION")))
            .size(scaled(12.0, fs))
            .color(tertiary),
        Space::new().height(16),
        text("会議の録音をアップロードすると、話者別の書き起こしと要約を自動生成します。")
            .size(scaled(13.0, fs)),
        Space::new().height(8),
        text("書き起こしと要約はサーバー側で実行されます。APIキーはバックエンドの .env.local に設定してください。")
            .size(scaled(12.0, fs))
            .color(tertiary),
    ]
    .spacing(0)
    .into()
}
