use egui::Context;

/// An application driven by the platform event loop.
///
/// `ui` is called once per frame on the event-loop thread and must run to
/// completion without blocking.
pub trait UiApp {
    /// Window title.
    fn title(&self) -> &str;

    fn ui(&mut self, ctx: &Context);
}
