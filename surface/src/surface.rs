//! Per-frame draw operations and layout queries
//!
//! One method per widget kind plus layout primitives. Style overrides are
//! applied inside `ui.scope(..)` so they are restored on every exit path,
//! including early returns from nested content closures. Interaction state
//! is computed per call from the emitted response and returned, never
//! stored beyond the call.

use std::collections::HashMap;

use geom::{Rect, Vec2};

use crate::convert::{
    from_egui_pos2, from_egui_rect, from_egui_vec2, to_color32, to_egui_pos2, to_egui_rect,
    to_egui_vec2,
};
use crate::menu::{hit_row, menu_layout};
use crate::modal::ModalRegistry;
use crate::widget::{
    Button, Container, DropDownMenu, Image, ImageButton, Modal, Node, Text, TextInput, TreeNode,
    Window,
};

/// Ephemeral interaction flags for one widget, one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub clicked: bool,
    pub hovered: bool,
}

/// Dropdown interaction for one frame. A click on a row takes priority
/// over hover-only effects in the same row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuInteraction {
    /// Index of the row clicked this frame
    pub clicked: Option<usize>,
    /// Index of the row under the pointer
    pub hovered: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ScrollInfo {
    offset_x: f32,
    offset_y: f32,
    max_offset_x: f32,
    max_offset_y: f32,
}

/// The layout/composition facade.
///
/// Holds the only cross-frame state the facade needs: the open-modal
/// registry, per-container scroll bookkeeping, and the last drawn item's
/// bounding box (used to anchor dropdown menus and inline flow).
#[derive(Default)]
pub struct Surface {
    modals: ModalRegistry,
    scroll: HashMap<String, ScrollInfo>,
    last_rect: Option<Rect>,
    next_pos_x: Option<f32>,
    next_pos_y: Option<f32>,
    inline_pending: bool,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen-space bounding box of the last drawn item
    pub fn last_rect(&self) -> Option<Rect> {
        self.last_rect
    }

    // ------------------------------------------------------------------
    // Modal registry
    // ------------------------------------------------------------------

    /// Mark a modal as open; its popup renders on subsequent frames
    pub fn open_modal(&mut self, id: &str) {
        self.modals.open(id);
    }

    /// Dismiss a modal
    pub fn close_modal(&mut self, id: &str) {
        self.modals.close(id);
    }

    pub fn is_modal_open(&self, id: &str) -> bool {
        self.modals.is_open(id)
    }

    pub fn are_any_modals_open(&self) -> bool {
        self.modals.any_open()
    }

    // ------------------------------------------------------------------
    // Layout queries and mutations
    // ------------------------------------------------------------------

    pub fn available_space(&self, ui: &egui::Ui) -> Vec2 {
        from_egui_vec2(ui.available_size())
    }

    /// Cursor position relative to the current region's origin
    pub fn position(&self, ui: &egui::Ui) -> Vec2 {
        from_egui_vec2(ui.cursor().min - ui.max_rect().min)
    }

    pub fn position_x(&self, ui: &egui::Ui) -> f32 {
        self.position(ui).x
    }

    pub fn position_y(&self, ui: &egui::Ui) -> f32 {
        self.position(ui).y
    }

    /// Place the next widget at `position`, relative to the current
    /// region's origin
    pub fn set_position(&mut self, position: Vec2) {
        self.next_pos_x = Some(position.x);
        self.next_pos_y = Some(position.y);
    }

    pub fn set_position_x(&mut self, x: f32) {
        self.next_pos_x = Some(x);
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.next_pos_y = Some(y);
    }

    /// Keep the next widget on the same line as the previous one
    pub fn display_inline(&mut self) {
        self.inline_pending = true;
    }

    pub fn align_center(&mut self, ui: &egui::Ui, element_size: Vec2) {
        let offset = center_offset(self.available_space(ui), element_size);
        let position = self.position(ui);
        self.set_position(position + offset);
    }

    pub fn align_center_x(&mut self, ui: &egui::Ui, element_width: f32) {
        let available = self.available_space(ui);
        self.set_position_x(self.position_x(ui) + (available.x - element_width) * 0.5);
    }

    pub fn align_center_y(&mut self, ui: &egui::Ui, element_height: f32) {
        let available = self.available_space(ui);
        self.set_position_y(self.position_y(ui) + (available.y - element_height) * 0.5);
    }

    // ------------------------------------------------------------------
    // Scroll state
    //
    // Values reflect the named scrollable container as of the last time
    // it was drawn, so a query issued before the container this frame
    // reads the previous frame's position ("capture before, act after").
    // ------------------------------------------------------------------

    pub fn scroll_position_y(&self, container_id: &str) -> f32 {
        self.scroll.get(container_id).map_or(0.0, |s| s.offset_y)
    }

    pub fn max_scroll_position_y(&self, container_id: &str) -> f32 {
        self.scroll.get(container_id).map_or(0.0, |s| s.max_offset_y)
    }

    pub fn scroll_position_x(&self, container_id: &str) -> f32 {
        self.scroll.get(container_id).map_or(0.0, |s| s.offset_x)
    }

    pub fn max_scroll_position_x(&self, container_id: &str) -> f32 {
        self.scroll.get(container_id).map_or(0.0, |s| s.max_offset_x)
    }

    /// Scroll the enclosing scroll region so the current cursor sits at
    /// the bottom. Call after declaring content.
    pub fn scroll_to_bottom(&self, ui: &mut egui::Ui) {
        ui.scroll_to_cursor(Some(egui::Align::Max));
    }

    // ------------------------------------------------------------------
    // Draw operations
    // ------------------------------------------------------------------

    pub fn draw_button(&mut self, ui: &mut egui::Ui, button: &Button) -> Interaction {
        let desired = to_egui_vec2(button.size);
        let response = self.with_placement(ui, desired, |_, ui| {
            ui.scope(|ui| {
                apply_button_style(ui.style_mut(), button);

                let label = egui::RichText::new(button.label.as_str());
                let widget = egui::Button::new(label);
                if button.size == Vec2::ZERO {
                    ui.add_enabled(!button.is_disabled, widget)
                } else {
                    ui.add_enabled_ui(!button.is_disabled, |ui| ui.add_sized(desired, widget))
                        .inner
                }
            })
            .inner
        });
        self.finish(response)
    }

    pub fn draw_container(
        &mut self,
        ui: &mut egui::Ui,
        container: &Container,
        content: impl FnOnce(&mut Surface, &mut egui::Ui),
    ) -> Interaction {
        let desired = resolve_size(ui, container.size);
        let response = self.with_placement(ui, desired, |surface, ui| {
            ui.scope(|ui| surface.container_body(ui, container, desired, content))
                .response
        });
        self.finish(response)
    }

    fn container_body(
        &mut self,
        ui: &mut egui::Ui,
        container: &Container,
        desired: egui::Vec2,
        content: impl FnOnce(&mut Surface, &mut egui::Ui),
    ) {
        let mut frame = egui::Frame::new()
            .inner_margin(egui::Margin::symmetric(
                container.padding.x as i8,
                container.padding.y as i8,
            ))
            .corner_radius(container.corner_rounding);
        if !container.bg_color.is_empty() {
            frame = frame.fill(to_color32(container.bg_color));
        }
        if container.border_size > 0.0 {
            let color = if container.border_color.is_empty() {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            } else {
                to_color32(container.border_color)
            };
            frame = frame.stroke(egui::Stroke::new(container.border_size, color));
        }

        frame.show(ui, |ui| {
            let inner = (desired - to_egui_vec2(container.padding) * 2.0).max(egui::Vec2::ZERO);
            // Auto-resize wins over the declared size on its axis
            if !container.is_auto_resizable_x {
                ui.set_min_width(inner.x);
                ui.set_max_width(inner.x);
            }
            if !container.is_auto_resizable_y {
                ui.set_min_height(inner.y);
                ui.set_max_height(inner.y);
            }

            if container.is_scrollable {
                let output = egui::ScrollArea::vertical()
                    .id_salt(container.id.as_str())
                    .auto_shrink([false, false])
                    .show(ui, |ui| content(self, ui));
                self.record_scroll(&container.id, &output);
            } else {
                content(self, ui);
            }
        });
    }

    fn record_scroll<R>(&mut self, id: &str, output: &egui::scroll_area::ScrollAreaOutput<R>) {
        let info = ScrollInfo {
            offset_x: output.state.offset.x,
            offset_y: output.state.offset.y,
            max_offset_x: (output.content_size.x - output.inner_rect.width()).max(0.0),
            max_offset_y: (output.content_size.y - output.inner_rect.height()).max(0.0),
        };
        self.scroll.insert(id.to_string(), info);
    }

    pub fn draw_text(&mut self, ui: &mut egui::Ui, text: &Text) -> Interaction {
        let response =
            self.with_placement(ui, egui::Vec2::ZERO, |_, ui| ui.add(rich_label(text).extend()));
        self.finish(response)
    }

    pub fn draw_text_wrapped(&mut self, ui: &mut egui::Ui, text: &Text) -> Interaction {
        let response =
            self.with_placement(ui, egui::Vec2::ZERO, |_, ui| ui.add(rich_label(text).wrap()));
        self.finish(response)
    }

    /// Draw an image through the window painter at the current cursor
    /// screen position, without advancing the layout cursor.
    ///
    /// The window painter (not the foreground layer) keeps the image
    /// clipped when it scrolls out of sight.
    pub fn draw_image(&mut self, ui: &mut egui::Ui, image: &Image) {
        let position = ui.cursor().min;
        let rect = egui::Rect::from_min_size(position, to_egui_vec2(image.size));
        if let Some(texture) = image.texture {
            ui.painter().image(texture, rect, uv_full(), egui::Color32::WHITE);
        }
        self.last_rect = Some(from_egui_rect(rect));
    }

    /// Clickable image at an explicit position relative to the current
    /// region's origin
    pub fn draw_image_button(&mut self, ui: &mut egui::Ui, button: &ImageButton) -> Interaction {
        let origin = ui.max_rect().min;
        let rect = egui::Rect::from_min_size(
            origin + to_egui_vec2(button.position),
            to_egui_vec2(button.size),
        );
        let response = ui.interact(rect, ui.id().with(button.id.as_str()), egui::Sense::click());

        if response.hovered() && !button.bg_color_hovered.is_empty() {
            ui.painter().rect_filled(
                rect.expand(2.0),
                button.corner_rounding,
                to_color32(button.bg_color_hovered),
            );
        }
        if let Some(texture) = button.texture {
            ui.painter().image(texture, rect, uv_full(), egui::Color32::WHITE);
        }
        self.finish(response)
    }

    pub fn draw_text_input_singleline(
        &mut self,
        ui: &mut egui::Ui,
        value: &mut String,
        input: &TextInput,
    ) -> Interaction {
        self.text_input_body(ui, value, input, false)
    }

    pub fn draw_text_input_multiline(
        &mut self,
        ui: &mut egui::Ui,
        value: &mut String,
        input: &TextInput,
    ) -> Interaction {
        self.text_input_body(ui, value, input, true)
    }

    fn text_input_body(
        &mut self,
        ui: &mut egui::Ui,
        value: &mut String,
        input: &TextInput,
        multiline: bool,
    ) -> Interaction {
        let desired = resolve_size(ui, input.size);
        let response = self.with_placement(ui, desired, |_, ui| {
            ui.scope(|ui| {
                apply_text_input_style(ui.style_mut(), input);

                let edit = if multiline {
                    egui::TextEdit::multiline(value)
                } else {
                    egui::TextEdit::singleline(value)
                };
                let edit = edit
                    .id_salt(input.id.as_str())
                    .frame(true)
                    .margin(egui::Margin::symmetric(
                        input.padding.x as i8,
                        input.padding.y as i8,
                    ));
                ui.add_sized(desired, edit)
            })
            .inner
        });

        // Inline placeholder over the empty field, on the foreground
        // layer so the field's own frame never covers it
        if value.is_empty() && !input.placeholder.is_empty() {
            let painter = ui.ctx().layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new(("placeholder", input.id.as_str())),
            ));
            let position = response.rect.min + to_egui_vec2(input.padding);
            let color = if input.placeholder_color.is_empty() {
                ui.visuals().weak_text_color()
            } else {
                to_color32(input.placeholder_color)
            };
            let font_id = egui::TextStyle::Body.resolve(ui.style());
            painter.text(
                position,
                egui::Align2::LEFT_TOP,
                input.placeholder.as_str(),
                font_id,
                color,
            );
        }

        self.finish(response)
    }

    pub fn draw_tree_node(&mut self, ui: &mut egui::Ui, node: &TreeNode) {
        egui::CollapsingHeader::new(node.name.as_str())
            .default_open(node.is_default_open)
            .show(ui, |ui| {
                for child in &node.children {
                    self.draw_tree_node(ui, child);
                }
            });
    }

    pub fn draw_node(&mut self, ui: &mut egui::Ui, node: &Node) -> Interaction {
        let response = self.with_placement(ui, egui::Vec2::ZERO, |_, ui| {
            ui.selectable_label(node.is_selected, node.label.as_str())
        });
        self.finish(response)
    }

    pub fn draw_divider(&mut self, ui: &mut egui::Ui) {
        ui.separator();
    }

    pub fn draw_window(
        &mut self,
        ctx: &egui::Context,
        window: &Window,
        content: impl FnOnce(&mut Surface, &mut egui::Ui),
    ) {
        let mut frame = egui::Frame::new().inner_margin(egui::Margin::symmetric(
            window.padding.x as i8,
            window.padding.y as i8,
        ));
        if !window.bg_color.is_empty() {
            frame = frame.fill(to_color32(window.bg_color));
        }

        egui::Window::new(window.name.as_str())
            .title_bar(window.is_titlebar_visible)
            .resizable(window.is_resizable)
            .movable(window.is_movable)
            .collapsible(window.is_collapsible)
            .scroll([window.is_scrollbar_visible, window.is_scrollbar_visible])
            .frame(frame)
            .fixed_pos(to_egui_pos2(window.position))
            .fixed_size(to_egui_vec2(window.size))
            .show(ctx, |ui| content(self, ui));
    }

    /// Render a modal's popup if (and only if) its id is registered as
    /// open. A dismissal gesture closes it within the same frame.
    /// Returns whether the modal is still open afterwards.
    pub fn draw_modal(
        &mut self,
        ctx: &egui::Context,
        modal: &Modal,
        content: impl FnOnce(&mut Surface, &mut egui::Ui),
    ) -> bool {
        if !self.modals.is_open(&modal.id) {
            return false;
        }

        let mut frame = egui::Frame::popup(&ctx.style())
            .inner_margin(egui::Margin::symmetric(
                modal.padding.x as i8,
                modal.padding.y as i8,
            ))
            .corner_radius(modal.corner_rounding);
        if !modal.bg_color.is_empty() {
            frame = frame.fill(to_color32(modal.bg_color));
        }

        let response = egui::Modal::new(egui::Id::new(modal.id.clone()))
            .frame(frame)
            .show(ctx, |ui| {
                if modal.size.x > 0.0 {
                    ui.set_width(modal.size.x);
                }
                if modal.size.y > 0.0 {
                    ui.set_min_height(modal.size.y);
                }
                content(self, ui);
            });

        if response.should_close() {
            self.modals.close(&modal.id);
            return false;
        }
        true
    }

    /// Draw a dropdown anchored to the last drawn widget's bounding box.
    ///
    /// Rows render in registration order, top to bottom, on the
    /// foreground layer; hit-testing is manual rectangle-contains-point.
    /// When a row is both clicked and hovered this frame, `clicked` takes
    /// priority.
    pub fn draw_drop_down_menu(&mut self, ui: &mut egui::Ui, menu: &DropDownMenu) -> MenuInteraction {
        let Some(trigger) = self.last_rect else {
            return MenuInteraction::default();
        };

        let layout = menu_layout(
            trigger,
            menu.origin_offset,
            menu.outer_padding,
            menu.item_size,
            menu.items.len(),
        );

        let painter = ui.ctx().layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new(("dropdown", menu.id.as_str())),
        ));

        if !menu.bg_color.is_empty() {
            painter.rect_filled(
                to_egui_rect(layout.outer),
                menu.corner_rounding,
                to_color32(menu.bg_color),
            );
        }

        let (pointer, clicked_now) = ui.input(|i| (i.pointer.interact_pos(), i.pointer.primary_clicked()));
        let hovered = pointer.and_then(|p| hit_row(&layout.rows, from_egui_pos2(p)));
        let clicked = if clicked_now { hovered } else { None };

        let font_id = egui::TextStyle::Body.resolve(ui.style());
        let text_color = if menu.text_color.is_empty() {
            ui.visuals().text_color()
        } else {
            to_color32(menu.text_color)
        };

        for (index, (label, row)) in menu.items.iter().zip(&layout.rows).enumerate() {
            if hovered == Some(index) && !menu.hover_color.is_empty() {
                painter.rect_filled(
                    to_egui_rect(*row),
                    menu.corner_rounding,
                    to_color32(menu.hover_color),
                );
            }
            let anchor = egui::pos2(row.min.x + 6.0, (row.min.y + row.max.y) * 0.5);
            painter.text(
                anchor,
                egui::Align2::LEFT_CENTER,
                label.as_str(),
                font_id.clone(),
                text_color,
            );
        }

        MenuInteraction { clicked, hovered }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Run `add` either in normal flow or, when a position override or
    /// inline flag is pending, inside a child region at the computed
    /// placement rect
    fn with_placement<R>(
        &mut self,
        ui: &mut egui::Ui,
        desired: egui::Vec2,
        add: impl FnOnce(&mut Self, &mut egui::Ui) -> R,
    ) -> R {
        match self.take_placement(ui, desired) {
            Some(rect) => {
                ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| add(self, ui))
                    .inner
            }
            None => add(self, ui),
        }
    }

    fn take_placement(&mut self, ui: &egui::Ui, desired: egui::Vec2) -> Option<egui::Rect> {
        let inline = std::mem::take(&mut self.inline_pending);
        let pos_x = self.next_pos_x.take();
        let pos_y = self.next_pos_y.take();
        if !inline && pos_x.is_none() && pos_y.is_none() {
            return None;
        }

        let origin = ui.max_rect().min;
        let cursor = ui.cursor().min;
        let spacing = ui.spacing().item_spacing.x;
        let previous = self.last_rect.map(to_egui_rect);

        let x = pos_x.map(|x| origin.x + x).unwrap_or_else(|| {
            if inline {
                previous.map_or(cursor.x, |r| r.max.x + spacing)
            } else {
                cursor.x
            }
        });
        let y = pos_y.map(|y| origin.y + y).unwrap_or_else(|| {
            if inline {
                previous.map_or(cursor.y, |r| r.min.y)
            } else {
                cursor.y
            }
        });

        let min = egui::pos2(x, y);
        let max_rect = ui.max_rect();
        let max = egui::pos2(
            max_rect.max.x.max(min.x + desired.x),
            max_rect.max.y.max(min.y + desired.y),
        );
        Some(egui::Rect::from_min_max(min, max))
    }

    fn finish(&mut self, response: egui::Response) -> Interaction {
        self.last_rect = Some(from_egui_rect(response.rect));
        Interaction {
            clicked: response.clicked(),
            hovered: response.hovered(),
        }
    }
}

/// Offset that centers an element of `size` within `available`
fn center_offset(available: Vec2, size: Vec2) -> Vec2 {
    (available - size) * 0.5
}

/// A zero size component means "use the available space" on that axis
fn resolve_size(ui: &egui::Ui, size: Vec2) -> egui::Vec2 {
    let available = ui.available_size();
    egui::vec2(
        if size.x > 0.0 { size.x } else { available.x },
        if size.y > 0.0 { size.y } else { available.y },
    )
}

fn uv_full() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn rich_label(text: &Text) -> egui::Label {
    let mut rich = egui::RichText::new(text.value.as_str());
    if text.size > 0.0 {
        rich = rich.size(text.size);
    }
    if !text.color.is_empty() {
        rich = rich.color(to_color32(text.color));
    }
    egui::Label::new(rich)
}

fn apply_button_style(style: &mut egui::Style, button: &Button) {
    if button.padding != Vec2::ZERO {
        style.spacing.button_padding = to_egui_vec2(button.padding);
    }
    if !button.text_color.is_empty() {
        style.visuals.override_text_color = Some(to_color32(button.text_color));
    }

    let radius = egui::CornerRadius::from(button.corner_rounding);
    let widgets = &mut style.visuals.widgets;
    for visuals in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
        visuals.corner_radius = radius;
        if button.border_size > 0.0 && !button.border_color.is_empty() {
            visuals.bg_stroke = egui::Stroke::new(button.border_size, to_color32(button.border_color));
        }
    }
    // Empty colors skip the override entirely instead of rendering black
    if !button.color.is_empty() {
        widgets.inactive.weak_bg_fill = to_color32(button.color);
    }
    if !button.color_hovered.is_empty() {
        widgets.hovered.weak_bg_fill = to_color32(button.color_hovered);
    }
    if !button.color_active.is_empty() {
        widgets.active.weak_bg_fill = to_color32(button.color_active);
    }
}

fn apply_text_input_style(style: &mut egui::Style, input: &TextInput) {
    if !input.bg_color.is_empty() {
        style.visuals.extreme_bg_color = to_color32(input.bg_color);
    }
    if !input.text_color.is_empty() {
        style.visuals.override_text_color = Some(to_color32(input.text_color));
    }

    let radius = egui::CornerRadius::from(input.corner_rounding);
    let widgets = &mut style.visuals.widgets;
    for visuals in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
        visuals.corner_radius = radius;
        if input.border_size > 0.0 {
            visuals.bg_stroke = egui::Stroke::new(input.border_size, visuals.bg_stroke.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom::Rgba;

    fn run_frame(mut body: impl FnMut(&mut Surface, &mut egui::Ui)) -> Surface {
        let ctx = egui::Context::default();
        let mut surface = Surface::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| body(&mut surface, ui));
        });
        surface
    }

    fn text_rows(surface: &mut Surface, ui: &mut egui::Ui, count: usize) {
        for i in 0..count {
            surface.draw_text(
                ui,
                &Text {
                    value: format!("row {i}"),
                    ..Default::default()
                },
            );
        }
    }

    fn auto_resize_container(id: &str, declared_height: f32) -> Container {
        Container {
            id: id.to_string(),
            size: Vec2::new(240.0, declared_height),
            is_auto_resizable_y: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_resize_y_height_tracks_content() {
        let mut short = 0.0;
        let mut tall = 0.0;
        run_frame(|surface, ui| {
            surface.draw_container(ui, &auto_resize_container("short", 10.0), |s, ui| {
                text_rows(s, ui, 2);
            });
            short = surface.last_rect().unwrap().height();

            surface.draw_container(ui, &auto_resize_container("tall", 10.0), |s, ui| {
                text_rows(s, ui, 8);
            });
            tall = surface.last_rect().unwrap().height();
        });
        assert!(tall > short, "tall={tall} short={short}");
    }

    #[test]
    fn test_auto_resize_y_ignores_declared_height() {
        let mut with_small_decl = 0.0;
        let mut with_large_decl = 0.0;
        run_frame(|surface, ui| {
            surface.draw_container(ui, &auto_resize_container("small", 5.0), |s, ui| {
                text_rows(s, ui, 3);
            });
            with_small_decl = surface.last_rect().unwrap().height();

            surface.draw_container(ui, &auto_resize_container("large", 500.0), |s, ui| {
                text_rows(s, ui, 3);
            });
            with_large_decl = surface.last_rect().unwrap().height();
        });
        assert!((with_small_decl - with_large_decl).abs() < 0.5);
    }

    #[test]
    fn test_fixed_container_respects_declared_size() {
        let mut height = 0.0;
        run_frame(|surface, ui| {
            let container = Container {
                id: "fixed".to_string(),
                size: Vec2::new(200.0, 120.0),
                ..Default::default()
            };
            surface.draw_container(ui, &container, |s, ui| text_rows(s, ui, 1));
            height = surface.last_rect().unwrap().height();
        });
        assert!((height - 120.0).abs() < 1.0, "height={height}");
    }

    #[test]
    fn test_button_records_last_rect() {
        let mut surface = run_frame(|surface, ui| {
            let button = Button {
                label: "Send".to_string(),
                size: Vec2::new(80.0, 24.0),
                color: Rgba::new(200, 50, 50, 255),
                ..Default::default()
            };
            let interaction = surface.draw_button(ui, &button);
            assert!(!interaction.clicked);
        });
        let rect = surface.last_rect.take().unwrap();
        assert!(rect.width() >= 80.0);
    }

    #[test]
    fn test_modal_registry_via_surface() {
        let mut surface = Surface::new();
        assert!(!surface.are_any_modals_open());
        surface.open_modal("SearchModal");
        assert!(surface.are_any_modals_open());
        assert!(surface.is_modal_open("SearchModal"));
        surface.close_modal("SearchModal");
        assert!(!surface.are_any_modals_open());
    }

    #[test]
    fn test_center_offset_math() {
        let offset = center_offset(Vec2::new(100.0, 60.0), Vec2::new(40.0, 20.0));
        assert_eq!(offset, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn test_scroll_queries_default_to_zero() {
        let surface = Surface::new();
        assert_eq!(surface.scroll_position_y("never-drawn"), 0.0);
        assert_eq!(surface.max_scroll_position_y("never-drawn"), 0.0);
    }

    #[test]
    fn test_scrollable_container_records_scroll_state() {
        let mut surface = Surface::new();
        let ctx = egui::Context::default();
        // Two frames: scroll state written on the first is readable
        // before the container is drawn again on the second
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let container = Container {
                        id: "feed".to_string(),
                        size: Vec2::new(200.0, 60.0),
                        is_scrollable: true,
                        ..Default::default()
                    };
                    surface.draw_container(ui, &container, |s, ui| text_rows(s, ui, 20));
                });
            });
        }
        // 20 rows cannot fit in 60px, so there is scrollable overflow
        assert!(surface.max_scroll_position_y("feed") > 0.0);
        assert_eq!(surface.scroll_position_y("feed"), 0.0);
    }

    #[test]
    fn test_image_does_not_advance_cursor() {
        run_frame(|surface, ui| {
            let before = surface.position(ui);
            // A failed load leaves no texture; the draw is a no-op apart
            // from recording the would-be rect
            let image = crate::widget::Image {
                texture: None,
                size: Vec2::new(64.0, 64.0),
                corner_rounding: 0.0,
            };
            surface.draw_image(ui, &image);
            let after = surface.position(ui);
            assert_eq!(before, after);
            assert_eq!(surface.last_rect().unwrap().size(), Vec2::new(64.0, 64.0));
        });
    }

    #[test]
    fn test_image_button_places_at_explicit_position() {
        run_frame(|surface, ui| {
            let origin = ui.max_rect().min;
            let button = ImageButton {
                id: "avatar-button".to_string(),
                texture: None,
                position: Vec2::new(30.0, 40.0),
                size: Vec2::new(24.0, 24.0),
                ..Default::default()
            };
            surface.draw_image_button(ui, &button);
            let rect = surface.last_rect().unwrap();
            assert_eq!(rect.min, Vec2::new(origin.x + 30.0, origin.y + 40.0));
        });
    }

    #[test]
    fn test_text_input_declares_with_placeholder() {
        run_frame(|surface, ui| {
            let input = TextInput {
                id: "compose".to_string(),
                placeholder: "Enter message here...".to_string(),
                size: Vec2::new(200.0, 40.0),
                placeholder_color: Rgba::new(120, 125, 172, 255),
                ..Default::default()
            };
            let mut value = String::new();
            surface.draw_text_input_multiline(ui, &mut value, &input);
            assert!(value.is_empty());
            assert!(surface.last_rect().unwrap().width() >= 199.0);
        });
    }

    #[test]
    fn test_tree_node_declares_recursively() {
        run_frame(|surface, ui| {
            let tree = TreeNode {
                name: "Direct Messages".to_string(),
                is_default_open: true,
                children: vec![
                    TreeNode::leaf("Direct Message 1"),
                    TreeNode::leaf("Direct Message 2"),
                    TreeNode {
                        name: "Archived".to_string(),
                        children: vec![TreeNode::leaf("Old thread")],
                        ..Default::default()
                    },
                ],
            };
            surface.draw_tree_node(ui, &tree);
        });
    }

    #[test]
    fn test_dropdown_without_trigger_is_noop() {
        run_frame(|surface, ui| {
            // No widget drawn yet, so there is no trigger rect
            let menu = DropDownMenu {
                id: "orphan".to_string(),
                items: vec!["a".to_string()],
                item_size: Vec2::new(100.0, 20.0),
                ..Default::default()
            };
            let interaction = surface.draw_drop_down_menu(ui, &menu);
            assert_eq!(interaction, MenuInteraction::default());
        });
    }

    #[test]
    fn test_inline_placement_follows_previous_item() {
        run_frame(|surface, ui| {
            surface.draw_button(
                ui,
                &Button {
                    label: "first".to_string(),
                    size: Vec2::new(60.0, 20.0),
                    ..Default::default()
                },
            );
            let first = surface.last_rect().unwrap();

            surface.display_inline();
            surface.draw_button(
                ui,
                &Button {
                    label: "second".to_string(),
                    size: Vec2::new(60.0, 20.0),
                    ..Default::default()
                },
            );
            let second = surface.last_rect().unwrap();

            assert!(second.min.x > first.max.x - 0.5);
            assert!((second.min.y - first.min.y).abs() < 0.5);
        });
    }
}
