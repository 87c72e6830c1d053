//! Window host: a winit event loop that draws one [`UiApp`] with egui.
//!
//! All app code runs on the event-loop thread. A helper thread only posts
//! redraw ticks at the configured interval.

mod error;
mod renderer;

pub use error::PlatformError;
pub use renderer::Renderer;

use app_api::UiApp;
use std::sync::Arc;
use std::{thread, time::Duration};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

enum UserEvent {
    Tick,
}

/// Open a window and run `app` until the window is closed.
pub fn run<A: UiApp>(app: A, frame_interval: Duration) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .map_err(PlatformError::EventLoop)?;

    let mut host = Host {
        proxy: Some(event_loop.create_proxy()),
        app,
        frame_interval,
        window: None,
        renderer: None,
        ticker_started: false,
        failure: None,
    };
    event_loop
        .run_app(&mut host)
        .map_err(PlatformError::EventLoop)?;

    match host.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Host<A> {
    app: A,
    proxy: Option<EventLoopProxy<UserEvent>>,
    frame_interval: Duration,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    ticker_started: bool,
    failure: Option<PlatformError>,
}

impl<A: UiApp> Host<A> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        log::error!(target: "platform", "{err}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.take() {
            let frame = self.frame_interval;
            thread::spawn(move || {
                while proxy.send_event(UserEvent::Tick).is_ok() {
                    thread::sleep(frame);
                }
            });
        }
    }
}

impl<A: UiApp> ApplicationHandler<UserEvent> for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes().with_title(self.app.title());
            let window = match event_loop.create_window(attributes) {
                Ok(window) => Arc::new(window),
                Err(err) => {
                    self.fail(event_loop, PlatformError::Window(err.to_string()));
                    return;
                }
            };
            match Renderer::new(Arc::clone(&window)) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(err) => {
                    self.fail(event_loop, err);
                    return;
                }
            }
            log::info!(target: "platform", "window ready: {}", self.app.title());
            self.window = Some(window);
        }

        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };
        let repaint = renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                renderer.render(window, |ctx| app.ui(ctx));
            }
            _ => {
                if repaint {
                    window.request_redraw();
                }
            }
        }
    }
}
