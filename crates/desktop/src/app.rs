use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use gijiroku_core::shared::constants::AUDIO_EXTENSIONS;
use gijiroku_core::transcription::domain::job::TranscriptionJob;
use gijiroku_core::transcription::domain::transcript::TranscriptionResponse;
use gijiroku_core::transcription::infrastructure::api_client::TranscriptionApiClient;

use crate::settings::{Appearance, Settings};
use crate::tabs;
use crate::theme;
use crate::upload::UploadController;

const MSG_INITIAL: &str = "音声ファイルをアップロードしてください。";
const MSG_UPLOADING: &str = "アップロード中...";
const MSG_DONE: &str = "完了しました。";
const MSG_SELECT_FILE: &str = "ファイルを選択してください。";

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    Settings,
    About,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Main, Tab::Settings, Tab::About];

    fn label(self) -> &'static str {
        match self {
            Tab::Main => "メイン",
            Tab::Settings => "設定",
            Tab::About => "情報",
        }
    }
}

// ---------------------------------------------------------------------------
// Status message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Uploading,
    Error,
}

/// The one-line status shown under the submit button. Rebuilt on every
/// phase transition, never mutated in place.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub phase: Phase,
    pub text: String,
}

impl StatusMessage {
    fn idle(text: &str) -> Self {
        Self {
            phase: Phase::Idle,
            text: text.to_string(),
        }
    }

    fn uploading() -> Self {
        Self {
            phase: Phase::Uploading,
            text: MSG_UPLOADING.to_string(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            phase: Phase::Error,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    SelectAudio,
    AudioSelected(Option<PathBuf>),
    Submit,
    UploadFinished(Result<TranscriptionResponse, String>),
    ServerUrlChanged(String),
    LanguageChanged(String),
    SummarizeToggled(bool),
    AppearanceChanged(Appearance),
    FontScaleChanged(f32),
    RestoreDefaults,
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    pub settings: Settings,
    pub audio_path: Option<PathBuf>,
    pub status: StatusMessage,
    pub upload: UploadController,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::Main,
                settings: Settings::load(),
                audio_path: None,
                status: StatusMessage::idle(MSG_INITIAL),
                upload: UploadController::new(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::SelectAudio => {
                return Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("音声ファイルを選択")
                            .add_filter("音声ファイル", AUDIO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::AudioSelected,
                );
            }
            Message::AudioSelected(Some(path)) => {
                self.audio_path = Some(path);
            }
            Message::AudioSelected(None) => {}
            Message::Submit => {
                let Some(path) = self.audio_path.clone() else {
                    self.status = StatusMessage::error(MSG_SELECT_FILE);
                    return Task::none();
                };
                if !self.upload.begin() {
                    return Task::none();
                }
                self.status = StatusMessage::uploading();

                let server_url = self.settings.server_url.clone();
                let job = TranscriptionJob {
                    language: self.settings.language.clone(),
                    summarize: self.settings.summarize,
                };
                return Task::perform(
                    async move {
                        let client =
                            TranscriptionApiClient::new(server_url).map_err(|e| e.to_string())?;
                        client
                            .transcribe_path(&path, job)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::UploadFinished,
                );
            }
            Message::UploadFinished(result) => {
                self.status = match &result {
                    Ok(_) => StatusMessage::idle(MSG_DONE),
                    Err(message) => StatusMessage::error(message.clone()),
                };
                self.upload.settle(result);
            }
            Message::ServerUrlChanged(url) => {
                self.settings.server_url = url;
                self.settings.save();
            }
            Message::LanguageChanged(language) => {
                self.settings.language = language;
                self.settings.save();
            }
            Message::SummarizeToggled(summarize) => {
                self.settings.summarize = summarize;
                self.settings.save();
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::FontScaleChanged(scale) => {
                self.settings.font_scale = scale;
                self.settings.save();
            }
            Message::RestoreDefaults => {
                let defaults = Settings::default();
                self.settings.server_url = defaults.server_url;
                self.settings.language = defaults.language;
                self.settings.summarize = defaults.summarize;
                self.settings.save();
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fs = self.settings.font_scale;
        let theme = self.theme();

        // Tab bar
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let label = text(tab.label()).size(scaled(13.0, fs));
                let btn = button(label)
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        // Tab content
        let content: Element<'_, Message> = match self.active_tab {
            Tab::Main => tabs::main_tab::view(
                fs,
                self.audio_path.as_deref(),
                &self.status,
                &self.upload,
                &theme,
            ),
            Tab::Settings => tabs::settings_tab::view(fs, &self.settings),
            Tab::About => tabs::about_tab::view(fs, &theme),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.settings.appearance == Appearance::System {
            iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme)
        } else {
            Subscription::none()
        }
    }
}

/// Scale a base font size by the user's font_scale setting.
pub fn scaled(base: f32, font_scale: f32) -> f32 {
    (base * font_scale).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gijiroku_core::transcription::domain::transcript::{
        SpeakerSegment, TranscriptMetadata,
    };

    fn app() -> App {
        App {
            active_tab: Tab::Main,
            settings: Settings::default(),
            audio_path: None,
            status: StatusMessage::idle(MSG_INITIAL),
            upload: UploadController::new(),
        }
    }

    fn sample_response() -> TranscriptionResponse {
        TranscriptionResponse {
            segments: vec![
                SpeakerSegment {
                    speaker: "SPEAKER_00".to_string(),
                    start: 0.0,
                    end: 4.5,
                    text: "本日の議題です。".to_string(),
                },
                SpeakerSegment {
                    speaker: "SPEAKER_01".to_string(),
                    start: 4.5,
                    end: 9.0,
                    text: "承知しました。".to_string(),
                },
            ],
            metadata: TranscriptMetadata {
                language: "ja".to_string(),
                duration: 9.0,
                summary: Some("議題の確認。".to_string()),
            },
        }
    }

    #[test]
    fn test_starts_idle_with_initial_prompt() {
        let app = app();
        assert_eq!(app.status.phase, Phase::Idle);
        assert_eq!(app.status.text, MSG_INITIAL);
        assert!(!app.upload.is_pending());
    }

    #[test]
    fn test_submit_without_file_is_rejected_locally() {
        let mut app = app();
        let _ = app.update(Message::Submit);
        assert_eq!(app.status.phase, Phase::Error);
        assert_eq!(app.status.text, MSG_SELECT_FILE);
        // The request was never started.
        assert!(!app.upload.is_pending());
    }

    #[test]
    fn test_submit_with_file_enters_uploading() {
        let mut app = app();
        let _ = app.update(Message::AudioSelected(Some(PathBuf::from("meeting.wav"))));
        let _ = app.update(Message::Submit);
        assert_eq!(app.status.phase, Phase::Uploading);
        assert_eq!(app.status.text, MSG_UPLOADING);
        assert!(app.upload.is_pending());
    }

    #[test]
    fn test_second_submit_while_pending_changes_nothing() {
        let mut app = app();
        let _ = app.update(Message::AudioSelected(Some(PathBuf::from("meeting.wav"))));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::Submit);
        assert_eq!(app.status.phase, Phase::Uploading);
        assert!(app.upload.is_pending());
    }

    #[test]
    fn test_successful_upload_returns_to_idle_with_results() {
        let mut app = app();
        let _ = app.update(Message::AudioSelected(Some(PathBuf::from("meeting.wav"))));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::UploadFinished(Ok(sample_response())));

        assert_eq!(app.status.phase, Phase::Idle);
        assert_eq!(app.status.text, MSG_DONE);
        let response = app.upload.response().expect("response should be kept");
        assert_eq!(response.segments.len(), 2);
        assert_eq!(response.metadata.summary_text(), Some("議題の確認。"));
    }

    #[test]
    fn test_failed_upload_surfaces_error_text_verbatim() {
        let mut app = app();
        let _ = app.update(Message::AudioSelected(Some(PathBuf::from("meeting.wav"))));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::UploadFinished(Err("timeout".to_string())));

        assert_eq!(app.status.phase, Phase::Error);
        assert_eq!(app.status.text, "timeout");
        assert!(app.upload.response().is_none());
    }

    #[test]
    fn test_resubmit_after_failure_is_allowed() {
        let mut app = app();
        let _ = app.update(Message::AudioSelected(Some(PathBuf::from("meeting.wav"))));
        let _ = app.update(Message::Submit);
        let _ = app.update(Message::UploadFinished(Err("timeout".to_string())));
        let _ = app.update(Message::Submit);
        assert_eq!(app.status.phase, Phase::Uploading);
        assert!(app.upload.is_pending());
    }
}
