// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the scrolling page, the open menu panel, the fixed
//! header, and the toast.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::page::{self, ViewContext as PageViewContext};
use crate::ui::widgets::scroll_lock;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Id, Scrollable, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let page = page::view(&PageViewContext {
        i18n: &app.i18n,
        reveal: &app.reveal,
        area_map: &app.area_map,
        form: &app.form,
        now,
    })
    .map(Message::Page);

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        });

    let navbar_ctx = NavbarViewContext {
        i18n: &app.i18n,
        menu_open: app.menu_open,
        header: app.header,
        window_width: app.window_width,
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scroll_lock(scrollable).locked(app.menu_open));

    if let Some(menu) = navbar::menu_overlay(&navbar_ctx) {
        layers = layers.push(menu.map(Message::Navbar));
    }

    layers = layers.push(navbar::view(&navbar_ctx).map(Message::Navbar));

    if let Some(toast) = Toast::view_overlay(&app.notifications, &app.i18n, now) {
        layers = layers.push(toast.map(Message::Notification));
    }

    layers.into()
}
