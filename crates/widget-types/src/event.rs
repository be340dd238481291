use serde::{Deserialize, Serialize};

use crate::message::Role;

/// Events emitted by the conversation controller.
/// The UI drains these each frame to drive repaint and auto-scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// The transcript was rehydrated wholesale from server history
    HistoryLoaded { count: usize },

    /// The opening assistant message arrived (or its fallback was used)
    GreetingLoaded,

    /// The server reported a display name for the business
    BusinessNameLoaded { name: String },

    /// One message was appended to the transcript
    MessageAppended { role: Role },

    /// The active input surface changed
    SurfaceChanged { input_type: String },

    /// The session was rotated and the transcript cleared
    SessionReset,

    /// A transport call failed; the UI already shows the fallback text
    TransportFailed { context: String },
}
