// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! The toast is a small card with a category-colored accent, an animated
//! icon, the message, an optional action button, an optional close button
//! and an optional countdown bar. Every animated value comes from the
//! [`VisualFrame`] of the notification, so the widget itself holds no state.

use super::lifecycle::ActiveNotification;
use super::manager::{Gesture, Manager, Message};
use super::notification::{Category, Icon};
use super::overlay::{Mounted, OverlayHost};
use super::timeline::VisualFrame;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, Path, Stroke};
use iced::widget::{button, container, mouse_area, text, Column, Container, Image, Row, Svg, Text};
use iced::{
    alignment, mouse, Color, Element, Length, Padding, Point, Radians, Rectangle, Renderer,
    Rotation, Shadow, Theme, Vector,
};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the notification at the given frame, resting at `mounted.top`.
    pub fn view<'a>(
        notification: &'a ActiveNotification,
        frame: VisualFrame,
        mounted: Mounted,
    ) -> Element<'a, Message> {
        let spec = notification.spec();
        let generation = notification.generation();
        let accent = spec.category().color();
        let alpha = frame.opacity;

        let icon: Element<'a, Message> = match spec.icon_override() {
            Some(Icon::Svg(handle)) => Svg::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD))
                .rotation(Rotation::Floating(Radians(frame.icon_rotation)))
                .opacity(alpha)
                .into(),
            Some(Icon::Image(handle)) => Image::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD))
                .rotation(Rotation::Floating(Radians(frame.icon_rotation)))
                .opacity(alpha)
                .into(),
            None => GlyphBadge::new(spec.category(), frame.icon_rotation, alpha).into_element(),
        };

        let message_widget =
            Text::new(spec.message())
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: alpha,
                        ..theme.palette().text
                    }),
                });

        // Layout: [icon] [message] [action] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(label) = spec.action_label() {
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(Message::Gesture(generation, Gesture::Action))
                    .padding(spacing::XXS)
                    .style(move |theme, status| action_button_style(theme, status, accent, alpha)),
            );
        }

        if spec.is_dismissible() {
            content = content.push(
                button(Text::new("\u{2715}").size(typography::BODY_SM))
                    .on_press(Message::Gesture(generation, Gesture::Close))
                    .padding(spacing::XXS)
                    .style(move |theme, status| dismiss_button_style(theme, status, alpha)),
            );
        }

        let width = sizing::TOAST_WIDTH * frame.scale;
        let mut body = Column::new().push(Container::new(content).padding(spacing::SM));
        if let Some(fill) = frame.progress_fill {
            body = body.push(
                Container::new(Row::new())
                    .width(Length::Fixed(width * fill))
                    .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
                    .style(move |_theme: &Theme| progress_bar_style(accent, alpha)),
            );
        }

        let card = Container::new(body)
            .width(Length::Fixed(width))
            .clip(true)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha));

        // Pointer press/release on the body covers both tap and swipe.
        // The card moves with the drag, so positions are shifted back to a
        // fixed reference before they reach the notification.
        let drag = frame.drag_offset;
        let card = mouse_area(card)
            .on_press(Message::Gesture(generation, Gesture::PointerPressed))
            .on_release(Message::Gesture(generation, Gesture::PointerReleased))
            .on_exit(Message::Gesture(generation, Gesture::PointerLeft))
            .on_move(move |point: Point| {
                Message::Gesture(generation, Gesture::PointerMoved(point.x + drag))
            })
            .interaction(mouse::Interaction::Pointer);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: (mounted.top + frame.offset_y).max(0.0),
                right: spacing::MD + (-2.0 * drag).max(0.0),
                bottom: 0.0,
                left: spacing::MD + (2.0 * drag).max(0.0),
            })
            .into()
    }

    /// Renders the overlay layer: the active notification if it is the one
    /// currently mounted, nothing otherwise.
    pub fn view_overlay<'a>(
        manager: &'a Manager<OverlayHost>,
        host: &'a OverlayHost,
        now: Instant,
    ) -> Element<'a, Message> {
        match (manager.active(), host.mounted()) {
            (Some(notification), Some(mounted))
                if mounted.generation == notification.generation() =>
            {
                Self::view(notification, notification.frame(now), *mounted)
            }
            _ => {
                // Return an empty container that takes no space
                Container::new(text(""))
                    .width(Length::Shrink)
                    .height(Length::Shrink)
                    .into()
            }
        }
    }
}

/// Category glyph on a filled disc, drawn rotated by the entrance curve.
pub struct GlyphBadge {
    category: Category,
    rotation: f32, // Rotation angle in radians
    opacity: f32,
    size: f32,
}

impl GlyphBadge {
    #[must_use]
    pub fn new(category: Category, rotation: f32, opacity: f32) -> Self {
        Self {
            category,
            rotation,
            opacity: opacity.clamp(0.0, 1.0),
            size: sizing::ICON_MD,
        }
    }

    /// Creates a Canvas widget from this badge.
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for GlyphBadge {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Redrawn every frame, the rotation changes continuously.
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0;

        frame.fill(
            &Path::circle(center, radius),
            Color {
                a: self.opacity,
                ..self.category.color()
            },
        );

        let stroke = Stroke::default()
            .with_width(2.0)
            .with_line_cap(LineCap::Round)
            .with_color(Color {
                a: self.opacity,
                ..palette::WHITE
            });

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.rotation);
            frame.stroke(&glyph_path(self.category, radius * 0.55), stroke);
        });

        vec![frame.into_geometry()]
    }
}

/// Glyph outline centered on the origin, `r` being its half-extent.
fn glyph_path(category: Category, r: f32) -> Path {
    Path::new(|b| match category {
        Category::Success => {
            b.move_to(Point::new(-r * 0.7, 0.0));
            b.line_to(Point::new(-r * 0.2, r * 0.5));
            b.line_to(Point::new(r * 0.7, -r * 0.5));
        }
        Category::Info => {
            b.move_to(Point::new(0.0, -r * 0.1));
            b.line_to(Point::new(0.0, r * 0.7));
            b.circle(Point::new(0.0, -r * 0.6), r * 0.08);
        }
        Category::Warning => {
            b.move_to(Point::new(0.0, -r * 0.7));
            b.line_to(Point::new(0.0, r * 0.2));
            b.circle(Point::new(0.0, r * 0.6), r * 0.08);
        }
        Category::Error => {
            b.move_to(Point::new(-r * 0.5, -r * 0.5));
            b.line_to(Point::new(r * 0.5, r * 0.5));
            b.move_to(Point::new(r * 0.5, -r * 0.5));
            b.line_to(Point::new(-r * 0.5, r * 0.5));
        }
    })
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn progress_bar_style(accent_color: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..accent_color
        })),
        ..Default::default()
    }
}

/// Style function for the action button: accent-colored text, subtle hover.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    accent_color: Color,
    alpha: f32,
) -> button::Style {
    let text_color = Color {
        a: alpha,
        ..accent_color
    };
    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a: a * alpha,
            ..accent_color
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: if matches!(status, button::Status::Disabled) {
            theme.extended_palette().background.strong.text
        } else {
            text_color
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = Color {
        a: alpha,
        ..base.text
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::GRAY_400
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..palette::GRAY_400
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn toast_container_fades_with_opacity() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, palette::INFO_500, 0.25);

        assert_eq!(style.border.color.a, 0.25);
        match style.background {
            Some(iced::Background::Color(color)) => assert!(color.a <= 0.25),
            _ => panic!("expected a solid background"),
        }
    }

    #[test]
    fn dismiss_button_is_transparent_at_rest() {
        let style = dismiss_button_style(&Theme::Dark, button::Status::Active, 1.0);
        assert!(style.background.is_none());
    }

    #[test]
    fn action_button_uses_accent_text() {
        let accent = palette::WARNING_500;
        let style = action_button_style(&Theme::Dark, button::Status::Hovered, accent, 1.0);
        assert_eq!(style.text_color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn glyph_paths_are_defined() {
        // Just verify paths build without panicking
        for category in Category::ALL {
            let _ = glyph_path(category, 8.0);
        }
    }

    #[test]
    fn glyph_badge_clamps_opacity() {
        let badge = GlyphBadge::new(Category::Error, 0.0, 3.0);
        assert_eq!(badge.opacity, 1.0);
    }
}
