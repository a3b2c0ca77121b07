//! Desktop binding: winit window + keyboard, wgpu presentation
//!
//! The event loop is pumped once per frame instead of handed control, so the
//! game keeps its own synchronous poll -> simulate -> present loop.

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::{FrameEvents, InputSource};
use crate::consts::{WIN_HEIGHT, WIN_WIDTH};
use crate::error::PlatformError;
use crate::renderer::BlitRenderer;
use crate::settings::Settings;
use crate::sim::TickInput;

/// How long startup waits for the first resume before giving up
const STARTUP_PUMPS: u32 = 200;

/// Collects window events between pumps
struct WindowHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    create_error: Option<OsError>,
    held: TickInput,
    quit: bool,
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                self.create_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.quit = true;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                match code {
                    KeyCode::ArrowUp => self.held.up = pressed,
                    KeyCode::ArrowDown => self.held.down = pressed,
                    KeyCode::Space => self.held.serve = pressed,
                    KeyCode::Escape if pressed => self.quit = true,
                    _ => {}
                }
            }
            // Releases are lost while unfocused
            WindowEvent::Focused(false) => {
                self.held = TickInput::default();
            }
            _ => {}
        }
    }
}

/// Keyboard + quit polling for the native window
pub struct NativeInput {
    event_loop: EventLoop<()>,
    handler: WindowHandler,
}

impl InputSource for NativeInput {
    fn poll(&mut self) -> Result<FrameEvents, PlatformError> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        let quit = self.handler.quit || matches!(status, PumpStatus::Exit(_));
        Ok(FrameEvents {
            input: self.handler.held,
            quit,
        })
    }
}

/// Open the game window and its GPU presenter.
///
/// Any failure here is fatal; there is nothing to retry.
pub fn open(settings: &Settings) -> Result<(NativeInput, BlitRenderer), PlatformError> {
    let event_loop = EventLoop::new()?;

    let scale = settings.scale();
    let attributes = Window::default_attributes()
        .with_title(settings.window_title.clone())
        .with_inner_size(LogicalSize::new(
            (WIN_WIDTH as u32 * scale) as f64,
            (WIN_HEIGHT as u32 * scale) as f64,
        ))
        .with_resizable(false);

    let mut input = NativeInput {
        event_loop,
        handler: WindowHandler {
            attributes,
            window: None,
            create_error: None,
            held: TickInput::default(),
            quit: false,
        },
    };

    // The window is created on the first resume
    for _ in 0..STARTUP_PUMPS {
        if input.handler.window.is_some() || input.handler.create_error.is_some() {
            break;
        }
        let status = input
            .event_loop
            .pump_app_events(Some(Duration::from_millis(10)), &mut input.handler);
        if let PumpStatus::Exit(code) = status {
            log::warn!("Event loop exited during startup (code {})", code);
            break;
        }
    }

    if let Some(e) = input.handler.create_error.take() {
        return Err(e.into());
    }
    let window = input.handler.window.clone().ok_or(PlatformError::NoWindow)?;
    log::info!(
        "Window open: {:?} ({}x{} logical)",
        window.inner_size(),
        WIN_WIDTH as u32 * scale,
        WIN_HEIGHT as u32 * scale
    );

    let renderer = pollster::block_on(BlitRenderer::new(
        window,
        WIN_WIDTH as u32,
        WIN_HEIGHT as u32,
        settings.vsync,
    ))?;

    Ok((input, renderer))
}
