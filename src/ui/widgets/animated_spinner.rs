// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.
//!
//! Drawn like the busy indicator in the submit button: a faint full ring
//! with a quarter arc that turns once per period.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

/// Opacity of the background ring.
const RING_ALPHA: f32 = 0.25;

/// Animated spinner that rotates smoothly.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Rotation angle after `elapsed` for a spinner turning once per `period`.
#[must_use]
pub fn rotation_at(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let turns = elapsed.as_secs_f32() / period.as_secs_f32();
    turns.fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                // r=10 in a 24 box
                let radius = frame.width().min(frame.height()) * 10.0 / 24.0;
                let stroke_width = (frame.width() / 12.0).max(1.5);

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(stroke_width).with_color(Color {
                        a: RING_ALPHA * self.color.a,
                        ..self.color
                    }),
                );

                // Quarter arc starting at twelve o'clock
                let start_angle = self.rotation - FRAC_PI_2;
                let end_angle = start_angle + FRAC_PI_2;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 16;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_each_period() {
        let period = Duration::from_secs(1);
        assert!(rotation_at(Duration::ZERO, period).abs() < 1e-6);
        let half = rotation_at(Duration::from_millis(1500), period);
        assert!((half - std::f32::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn zero_period_does_not_divide() {
        assert_eq!(rotation_at(Duration::from_secs(3), Duration::ZERO), 0.0);
    }
}
