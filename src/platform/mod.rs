//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges Winit (OS-level events) with the core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │  ↓               │
//  │  InputProcessor          │    │  InputMapper     │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   └─ Tracks cursor       │    │  Session         │
//  │   ↓                      │    │                  │
//  │  InputBuffer             │    └──────────────────┘
//  │   ├─ discrete: Vec<>     │             ↑   │
//  │   └─ continuous: Set<>   │             │   │ drops shutdown
//  │   ↓                      │             │   │ sender on exit
//  │  RedrawRequested (flush) ┼─────────────┘   │
//  │  shutdown.try_recv() ◄───┼─────────────────┘
//  └──────────────────────────┘
// ```
//
// Cursor positions reach the core in logical units, the same space as
// the configured window size.
//
// RedrawRequested is the frame boundary: buffered input is sent as one
// PlatformEvent and empty frames are not sent. If the core thread is gone
// (send fails or the shutdown signal disconnects) the window closes.
//
// The window only collects input. Drawing belongs to whoever consumes
// the snapshot channel.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::config::WindowConfig;
use crate::core::error::PlatformError;
use crate::core::platform_bridge::PlatformEvent;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Not `Send`.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
    window_config: WindowConfig,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    /// Disconnects when the core thread ends.
    core_shutdown: Receiver<()>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window itself is created in `resumed()`.
    pub fn new(
        event_sender: Sender<PlatformEvent>,
        core_shutdown: Receiver<()>,
        window_config: WindowConfig,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            event_sender,
            core_shutdown,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// [`PlatformError::EventLoopCreation`] if no event loop can be
    /// created (no display, not the main thread), and
    /// [`PlatformError::EventLoopExecution`] if the loop fails.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core thread.
    ///
    /// Returns `false` if the core thread is gone.
    fn flush_input_buffer(&mut self) -> bool {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return true;
        };

        let discrete_count = discrete.len();
        let continuous_count = continuous.len();

        trace!(
            target: "platform::input",
            "Flushing {} discrete + {} continuous events",
            discrete_count,
            continuous_count
        );

        if self
            .event_sender
            .send(PlatformEvent::Inputs { discrete, continuous })
            .is_err()
        {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                discrete_count + continuous_count
            );
            return false;
        }
        true
    }

    fn core_alive(&self) -> bool {
        !matches!(self.core_shutdown.try_recv(), Err(TryRecvError::Disconnected))
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        self.window = None;
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on startup (and on mobile resume if missing).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.window_config.width as f64,
                self.window_config.height as f64,
            ))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.close(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.close(event_loop);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale_factor = self.window.as_ref().map_or(1.0, Window::scale_factor);
                let event = self.input_processor.process_cursor_moved(*position, scale_factor);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                if !self.flush_input_buffer() || !self.core_alive() {
                    info!(target: "platform", "Core thread finished, closing window");
                    self.close(event_loop);
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{InputEvent, KeyCode};
    use crossbeam_channel::{bounded, unbounded};

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<()>) {
        let (tx, rx) = unbounded();
        let (shutdown_tx, shutdown_rx) = bounded(0);
        (Platform::new(tx, shutdown_rx, WindowConfig::default()), rx, shutdown_tx)
    }

    #[test]
    fn window_is_created_lazily() {
        let (platform, _rx, _shutdown) = platform();
        assert!(platform.window.is_none());
    }

    #[test]
    fn flush_empty_buffer_sends_nothing() {
        let (mut platform, rx, _shutdown) = platform();

        assert!(platform.flush_input_buffer());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (mut platform, rx, _shutdown) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        platform
            .buffer
            .push_continuous(platform.input_processor.process_mouse_move(5.0, 6.0));

        assert!(platform.flush_input_buffer());
        assert!(platform.flush_input_buffer());

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::KeyDown(KeyCode::Space)]);
                assert_eq!(continuous.len(), 1);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_reports_disconnected_core() {
        let (mut platform, rx, _shutdown) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown(KeyCode::Space));
        drop(rx);

        assert!(!platform.flush_input_buffer());
    }

    #[test]
    fn core_alive_until_shutdown_sender_dropped() {
        let (platform, _rx, shutdown) = platform();
        assert!(platform.core_alive());

        drop(shutdown);
        assert!(!platform.core_alive());
    }
}
