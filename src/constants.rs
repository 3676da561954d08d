// API Constants
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Instruction prefix sent with every question. Keeps the assistant on the
/// career domain; off-topic questions are declined politely.
pub const COACH_INSTRUCTION: &str = "Kamu adalah Career Coach AI, seorang asisten karir profesional. \
Jawablah pertanyaan ini hanya jika berkaitan dengan karir, pekerjaan, wawancara, pengembangan diri, CV, \
atau hal-hal seputar dunia kerja. Jika pertanyaannya di luar topik tersebut, tolak dengan sopan dan beri \
tahu bahwa kamu hanya bisa menjawab topik seputar karir.\n\n\
Jawablah dengan gaya santai seperti ngobrol dengan teman. Ini pertanyaannya: ";

/// Shown in-band when the API call fails for any reason other than a
/// user-initiated cancel. Never persisted as part of a chat.
pub const FALLBACK_REPLY: &str = "Maaf, terjadi kesalahan. Silakan coba lagi.";

pub const DEFAULT_CHAT_TITLE: &str = "Chat Baru";
pub const TITLE_MAX_CHARS: usize = 30;

pub const APP_TITLE: &str = "Career Coach AI";
pub const APP_SUBTITLE: &str = "Asisten Karir & Simulator Interview";
