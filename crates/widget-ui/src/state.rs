//! Shell-level UI state that drives rendering.
//! Updated each frame by draining the controller's event bus.

use widget_types::event::WidgetEvent;

pub struct ShellState {
    /// Text input field content
    pub input_text: String,
    /// Reset button is armed and waiting for confirmation
    pub confirm_reset: bool,
    /// Force-scroll the transcript on the next frame
    pub scroll_to_bottom: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            confirm_reset: false,
            scroll_to_bottom: false,
        }
    }

    /// Apply controller events. Returns true when a repaint is needed.
    pub fn process_events(&mut self, events: Vec<WidgetEvent>) -> bool {
        let mut changed = false;
        for event in events {
            changed = true;
            match event {
                WidgetEvent::HistoryLoaded { .. }
                | WidgetEvent::GreetingLoaded
                | WidgetEvent::MessageAppended { .. }
                | WidgetEvent::SurfaceChanged { .. } => {
                    self.scroll_to_bottom = true;
                }
                WidgetEvent::SessionReset => {
                    self.confirm_reset = false;
                    self.input_text.clear();
                    self.scroll_to_bottom = true;
                }
                WidgetEvent::BusinessNameLoaded { .. } | WidgetEvent::TransportFailed { .. } => {}
            }
        }
        changed
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
