mod bridge;

pub use bridge::ConversationBridge;
