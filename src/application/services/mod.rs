mod capabilities;
mod query_router;
mod voice_session;

pub use capabilities::{Capabilities, ReadinessSnapshot};
pub use query_router::{QueryRouter, RouteError, RoutedReply};
pub use voice_session::{SessionError, VoiceSessionService};
