mod assistant;
mod context;

pub use assistant::Assistant;
pub use context::ConversationContext;
