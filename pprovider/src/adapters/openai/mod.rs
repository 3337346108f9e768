mod auth;
mod model;
mod serde_api;
mod transport;
mod types;

pub(crate) use model::CompatibleChat;
pub use model::{OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL, OpenAiChatModel};
pub use transport::{OpenAiHttpTransport, OpenAiTransport};
pub use types::{
    OpenAiFinishReason, OpenAiMessage, OpenAiRequest, OpenAiResponse, OpenAiRole, OpenAiUsage,
    build_chat_request,
};
