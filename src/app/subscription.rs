// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse wheel, window) to app messages and
//! runs the animation tick while something on screen is moving.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Frame interval of the animation tick.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the native event subscription.
///
/// Wheel events are reported even when the scrollable captured them, since
/// that is exactly when a running anchor scroll must stop. Escape and Tab
/// are reported whatever the focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size))
        | event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized {
                width: size.width,
                height: size.height,
            })
        }
        event::Event::Mouse(mouse::Event::WheelScrolled { .. }) => Some(Message::WheelScrolled),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match named {
            Named::Escape => Some(Message::EscapePressed),
            Named::Tab => Some(Message::TabPressed),
            _ => None,
        },
        _ => None,
    })
}

/// Creates the animation tick, active only while `animating`.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
