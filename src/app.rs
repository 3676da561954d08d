use crate::api::GeminiClient;
use crate::config::get_config;
use crate::errors::KarirResult;
use crate::models::{Chat, Message};
use crate::status_indicator::StatusIndicator;
use crate::store::{self, ChatStore};
use crate::theme::Theme;
use crate::typewriter::Typewriter;
use chrono::Utc;
use log::{error, info};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    QuitConfirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Sidebar,
}

/// Owns the active conversation, the chat collection, and the in-flight
/// generation. One exchange runs at a time; the input side blocks a second
/// send while `is_generating` is set.
pub struct App {
    pub screen: AppScreen,
    pub focus: Focus,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub sidebar_selected: usize,
    pub chats: Vec<Chat>,
    pub current_chat_id: Option<String>,
    pub messages: Vec<Message>,
    pub input: String,
    pub is_generating: bool,
    pub generation: Option<JoinHandle<()>>,
    pub typewriter: Option<Typewriter>,
    pub chat_scroll: u16,
    pub status: StatusIndicator,
    pub store: ChatStore,
    pub client: GeminiClient,
}

impl App {
    pub fn new(store: ChatStore, client: GeminiClient) -> KarirResult<Self> {
        let chats = store.load()?;
        Ok(App {
            screen: AppScreen::Chat,
            focus: Focus::Input,
            theme: Theme::Dark,
            sidebar_open: true,
            sidebar_selected: 0,
            chats,
            current_chat_id: None,
            messages: Vec::new(),
            input: String::new(),
            is_generating: false,
            generation: None,
            typewriter: None,
            chat_scroll: 0,
            status: StatusIndicator::new(),
            store,
            client,
        })
    }

    /// Per-frame housekeeping: spinner and typewriter advance.
    pub fn tick(&mut self) {
        if self.is_generating {
            self.status.update_spinner();
        }
        if let Some(tw) = self.typewriter.as_mut() {
            tw.tick();
        }
    }

    pub fn new_chat(&mut self) {
        self.messages.clear();
        self.current_chat_id = None;
        self.typewriter = None;
        self.chat_scroll = 0;
    }

    /// Activates a stored chat. Unknown ids are ignored.
    pub fn select_chat(&mut self, id: &str) {
        if let Some(chat) = self.chats.iter().find(|c| c.id == id) {
            self.messages = chat.messages.clone();
            self.current_chat_id = Some(chat.id.clone());
            self.typewriter = None;
            self.chat_scroll = 0;
        }
    }

    pub fn delete_chat(&mut self, id: &str) {
        let before = self.chats.len();
        self.chats.retain(|c| c.id != id);
        if self.chats.len() == before {
            return;
        }

        if let Err(e) = self.store.save(&self.chats) {
            error!("failed to persist chats after delete: {}", e);
        }

        if self.current_chat_id.as_deref() == Some(id) {
            self.messages.clear();
            self.current_chat_id = None;
            self.typewriter = None;
            self.chat_scroll = 0;
        }

        if self.sidebar_selected >= self.chats.len() && !self.chats.is_empty() {
            self.sidebar_selected = self.chats.len() - 1;
        }
    }

    /// Aborts the in-flight generation, if any. Always clears the flag;
    /// cancellation is logged, never shown in the conversation.
    pub fn stop(&mut self) {
        if let Some(handle) = self.generation.take() {
            handle.abort();
            info!("generation cancelled by user");
        }
        self.is_generating = false;
        self.status.set_thinking(false);
    }

    /// Reconciles the active message list into the chat collection and
    /// rewrites the store. Called only at the end of a successful exchange.
    pub fn commit_exchange(&mut self) {
        let id = self
            .current_chat_id
            .clone()
            .unwrap_or_else(store::new_chat_id);

        let chat = Chat {
            id: id.clone(),
            title: Chat::derive_title(&self.messages),
            messages: self.messages.clone(),
            created_at: Utc::now(),
        };

        self.chats.retain(|c| c.id != id);
        self.chats.push(chat);
        self.current_chat_id = Some(id);

        if let Err(e) = self.store.save(&self.chats) {
            error!("failed to persist chats: {}", e);
        }
    }

    pub fn finish_generation(&mut self) {
        self.is_generating = false;
        self.generation = None;
        self.status.set_thinking(false);
    }

    pub fn start_typewriter(&mut self, content: &str) {
        let delay = Duration::from_millis(get_config().typewriter_ms);
        self.typewriter = Some(Typewriter::new(content, delay));
    }

    /// `chat_scroll` counts lines up from the bottom of the transcript, so 0
    /// keeps the view pinned to the newest message.
    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_selected = self.sidebar_selected.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_selected + 1 < self.chats.len() {
            self.sidebar_selected += 1;
        }
    }

    pub fn selected_chat_id(&self) -> Option<String> {
        self.chats.get(self.sidebar_selected).map(|c| c.id.clone())
    }
}
