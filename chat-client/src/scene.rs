//! Per-frame scene composition
//!
//! Declares the full widget tree for the chat window once per frame,
//! using only the surface facade: navbar, conversation list, message
//! feed, composer, send button and the search modal. Proportions are
//! percentages of the available space, matching the prototype layout.

use geom::{Rgba, Vec2};
use surface::{
    Button, Container, DropDownMenu, Image, Modal, Node, Surface, Text, TextInput, Texture, Window,
};

use crate::state::AppState;

/// Textures the scene draws, loaded once at startup
pub struct Assets {
    pub avatar: Texture,
}

pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

const SEARCH_MODAL_ID: &str = "SearchModal";
const FEED_ID: &str = "MessagesContainer";

// Prototype palette
const WINDOW_BG: Rgba = Rgba { r: 26, g: 30, b: 67, a: 255 };
const PANEL_BG: Rgba = Rgba { r: 50, g: 56, b: 102, a: 255 };
const INPUT_BG: Rgba = Rgba { r: 43, g: 50, b: 94, a: 255 };
const PLACEHOLDER: Rgba = Rgba { r: 120, g: 125, b: 172, a: 255 };

/// Tracks whether the feed was scrolled to the bottom before new rows
/// were declared, so appended messages only pull the view down when the
/// user was already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedScroll {
    was_at_bottom: bool,
}

impl FeedScroll {
    /// Scroll offsets are animated and fractional, so the pin check
    /// carries a one-pixel tolerance
    const BOTTOM_TOLERANCE: f32 = 1.0;

    /// Capture before drawing feed content
    pub fn capture(offset: f32, max_offset: f32) -> Self {
        Self {
            was_at_bottom: offset >= max_offset - Self::BOTTOM_TOLERANCE,
        }
    }

    /// Whether to force-scroll to the new bottom after drawing
    pub fn should_follow(&self) -> bool {
        self.was_at_bottom
    }
}

/// Declare the whole chat window for this frame
pub fn draw_scene(
    surface: &mut Surface,
    ctx: &egui::Context,
    state: &mut AppState,
    assets: &Assets,
) {
    let window = Window {
        name: "MainWindow".to_string(),
        size: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        position: Vec2::ZERO,
        bg_color: WINDOW_BG,
        ..Default::default()
    };

    surface.draw_window(ctx, &window, |surface, ui| {
        let available = surface.available_space(ui);

        draw_navbar(surface, ui, assets, available);
        draw_conversation_list(surface, ui, state, available);

        surface.display_inline();
        surface.set_position_x(available.x * 0.25);
        draw_message_feed(surface, ui, state, available);

        surface.set_position_x(available.x * 0.25);
        surface.set_position_y(available.y * 0.85);
        draw_composer(surface, ui, state, available);

        surface.display_inline();
        surface.set_position_x(available.x * 0.85);
        draw_send_button(surface, ui, state, available);
    });

    draw_search_modal(surface, ctx, state);
}

fn draw_navbar(surface: &mut Surface, ui: &mut egui::Ui, assets: &Assets, available: Vec2) {
    let outer = Container {
        id: "NavbarContainer".to_string(),
        size: Vec2::new(available.x, available.y * 0.15),
        padding: Vec2::new(15.0, 15.0),
        bg_color: Rgba::transparent(),
        ..Default::default()
    };

    surface.draw_container(ui, &outer, |surface, ui| {
        let navbar = Container {
            id: "Navbar".to_string(),
            corner_rounding: 10.0,
            bg_color: PANEL_BG,
            padding: Vec2::new(15.0, 15.0),
            ..Default::default()
        };
        surface.draw_container(ui, &navbar, |surface, ui| {
            let inner = surface.available_space(ui);

            // Painter-drawn avatar does not advance the cursor, so the
            // title is shifted past it explicitly
            let avatar = Image {
                texture: assets.avatar.id(),
                size: Vec2::new(32.0, 32.0),
                corner_rounding: 16.0,
            };
            surface.draw_image(ui, &avatar);
            surface.set_position_x(surface.position_x(ui) + 42.0);

            surface.align_center_y(ui, 24.0);
            surface.draw_text(
                ui,
                &Text {
                    value: "Chat Client".to_string(),
                    size: 20.0,
                    ..Default::default()
                },
            );

            surface.display_inline();
            surface.set_position_x(inner.x - 110.0);
            let search_button = Button {
                label: "Search".to_string(),
                size: Vec2::new(100.0, 28.0),
                color: INPUT_BG,
                color_hovered: Rgba::new(60, 68, 120, 255),
                corner_rounding: 10.0,
                ..Default::default()
            };
            if surface.draw_button(ui, &search_button).clicked {
                surface.open_modal(SEARCH_MODAL_ID);
            }
        });
    });
}

fn draw_conversation_list(
    surface: &mut Surface,
    ui: &mut egui::Ui,
    state: &mut AppState,
    available: Vec2,
) {
    let outer = Container {
        id: "ConversationsContainer".to_string(),
        size: Vec2::new(available.x * 0.25, available.y * 0.85),
        padding: Vec2::new(15.0, 15.0),
        bg_color: Rgba::transparent(),
        ..Default::default()
    };

    surface.draw_container(ui, &outer, |surface, ui| {
        let list = Container {
            id: "DirectMessagesContainer".to_string(),
            corner_rounding: 10.0,
            bg_color: PANEL_BG,
            padding: Vec2::new(10.0, 10.0),
            is_scrollable: true,
            ..Default::default()
        };

        surface.draw_container(ui, &list, |surface, ui| {
            let rows: Vec<(String, String, bool)> = state
                .conversations
                .iter()
                .map(|c| {
                    (
                        c.id.clone(),
                        c.name.clone(),
                        state.selected_conversation.as_deref() == Some(c.id.as_str()),
                    )
                })
                .collect();

            let mut pending_select: Option<String> = None;
            let mut pending_delete: Option<String> = None;

            for (id, name, is_selected) in rows {
                let node = Node {
                    id: format!("Conversation{id}"),
                    label: name,
                    is_selected,
                };
                if surface.draw_node(ui, &node).clicked {
                    pending_select = Some(id.clone());
                }

                surface.display_inline();
                let menu_button = Button {
                    label: "...".to_string(),
                    size: Vec2::new(24.0, 18.0),
                    color: Rgba::transparent(),
                    color_hovered: INPUT_BG,
                    corner_rounding: 4.0,
                    ..Default::default()
                };
                if surface.draw_button(ui, &menu_button).clicked {
                    state.open_menu = match state.open_menu.as_deref() {
                        Some(open) if open == id => None,
                        _ => Some(id.clone()),
                    };
                }

                if state.open_menu.as_deref() == Some(id.as_str()) {
                    // Anchored to the menu button, the last drawn widget
                    let menu = DropDownMenu {
                        id: format!("ConversationMenu{id}"),
                        items: vec!["Mark as read".to_string(), "Delete".to_string()],
                        item_size: Vec2::new(120.0, 22.0),
                        origin_offset: Vec2::new(0.0, 2.0),
                        outer_padding: Vec2::new(6.0, 6.0),
                        bg_color: INPUT_BG,
                        hover_color: PANEL_BG,
                        corner_rounding: 6.0,
                        ..Default::default()
                    };
                    let interaction = surface.draw_drop_down_menu(ui, &menu);
                    if let Some(row) = interaction.clicked {
                        if row == 1 {
                            pending_delete = Some(id.clone());
                        }
                        state.open_menu = None;
                    }
                }

                surface.display_inline();
                let close_button = Button {
                    label: "x".to_string(),
                    size: Vec2::new(18.0, 18.0),
                    color: Rgba::transparent(),
                    color_hovered: Rgba::new(150, 50, 50, 255),
                    corner_rounding: 4.0,
                    ..Default::default()
                };
                if surface.draw_button(ui, &close_button).clicked {
                    pending_delete = Some(id.clone());
                }
            }

            if let Some(id) = pending_select {
                state.select_conversation(&id);
            }
            if let Some(id) = pending_delete {
                state.delete_conversation(&id);
            }
        });
    });
}

fn draw_message_feed(
    surface: &mut Surface,
    ui: &mut egui::Ui,
    state: &mut AppState,
    available: Vec2,
) {
    let outer = Container {
        id: "SelectedConversationContainer".to_string(),
        size: Vec2::new(available.x * 0.75, available.y * 0.70),
        padding: Vec2::new(15.0, 15.0),
        bg_color: Rgba::transparent(),
        ..Default::default()
    };

    // Capture before drawing content, act after: a user who scrolled up
    // to read history must never be pulled back down
    let feed = FeedScroll::capture(
        surface.scroll_position_y(FEED_ID),
        surface.max_scroll_position_y(FEED_ID),
    );

    surface.draw_container(ui, &outer, |surface, ui| {
        let feed_container = Container {
            id: FEED_ID.to_string(),
            corner_rounding: 10.0,
            bg_color: PANEL_BG,
            padding: Vec2::new(15.0, 15.0),
            is_scrollable: true,
            ..Default::default()
        };

        surface.draw_container(ui, &feed_container, |surface, ui| {
            let rows: Vec<(String, String, String)> = state
                .selected_conversation()
                .map(|conversation| {
                    state
                        .messages_for(&conversation.id)
                        .map(|m| {
                            (
                                state.sender_name(&m.sender_id),
                                m.created_at.clone(),
                                m.text.clone(),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();

            for (sender, created_at, text) in rows {
                surface.draw_text(
                    ui,
                    &Text {
                        value: format!("{sender}  [{created_at}]"),
                        color: PLACEHOLDER,
                        size: 12.0,
                    },
                );
                surface.draw_text_wrapped(
                    ui,
                    &Text {
                        value: text,
                        ..Default::default()
                    },
                );
                surface.draw_divider(ui);
            }

            if feed.should_follow() {
                surface.scroll_to_bottom(ui);
            }
        });
    });
}

fn draw_composer(
    surface: &mut Surface,
    ui: &mut egui::Ui,
    state: &mut AppState,
    available: Vec2,
) {
    let outer = Container {
        id: "TextInputContainer".to_string(),
        size: Vec2::new(available.x * 0.60, available.y * 0.15),
        padding: Vec2::new(15.0, 15.0),
        bg_color: Rgba::transparent(),
        ..Default::default()
    };

    surface.draw_container(ui, &outer, |surface, ui| {
        let input = TextInput {
            id: "MessageTextInput".to_string(),
            placeholder: "Enter message here...".to_string(),
            padding: Vec2::new(15.0, 15.0),
            corner_rounding: 10.0,
            bg_color: INPUT_BG,
            placeholder_color: PLACEHOLDER,
            ..Default::default()
        };
        surface.draw_text_input_multiline(ui, &mut state.compose_text, &input);
    });
}

fn draw_send_button(
    surface: &mut Surface,
    ui: &mut egui::Ui,
    state: &mut AppState,
    available: Vec2,
) {
    let outer = Container {
        id: "SendButtonContainer".to_string(),
        size: Vec2::new(available.x * 0.15, available.y * 0.15),
        padding: Vec2::new(15.0, 15.0),
        bg_color: Rgba::transparent(),
        ..Default::default()
    };

    surface.draw_container(ui, &outer, |surface, ui| {
        let space = surface.available_space(ui);
        let size = Vec2::new(space.x * 0.70, space.y * 0.40);
        surface.align_center(ui, size);

        let send_button = Button {
            label: "Send".to_string(),
            size,
            color: Rgba::new(204, 51, 51, 255),
            color_active: Rgba::new(153, 0, 0, 255),
            color_hovered: Rgba::new(255, 102, 102, 255),
            corner_rounding: 10.0,
            is_disabled: state.compose_text.is_empty(),
            ..Default::default()
        };
        if surface.draw_button(ui, &send_button).clicked {
            state.send_message();
        }
    });
}

fn draw_search_modal(surface: &mut Surface, ctx: &egui::Context, state: &mut AppState) {
    let modal = Modal {
        id: SEARCH_MODAL_ID.to_string(),
        size: Vec2::new(420.0, 0.0),
        padding: Vec2::new(15.0, 15.0),
        bg_color: PANEL_BG,
        corner_rounding: 10.0,
    };

    surface.draw_modal(ctx, &modal, |surface, ui| {
        surface.draw_text(
            ui,
            &Text {
                value: "Search people".to_string(),
                size: 16.0,
                ..Default::default()
            },
        );
        surface.draw_divider(ui);

        let input = TextInput {
            id: "SearchInput".to_string(),
            placeholder: "Type a name...".to_string(),
            size: Vec2::new(390.0, 28.0),
            padding: Vec2::new(8.0, 6.0),
            corner_rounding: 6.0,
            bg_color: INPUT_BG,
            placeholder_color: PLACEHOLDER,
            ..Default::default()
        };
        surface.draw_text_input_singleline(ui, &mut state.search_query, &input);

        // An empty query renders no suggestion rows at all
        if !state.search_query.is_empty() {
            let names: Vec<String> = state
                .search_users(&state.search_query)
                .iter()
                .map(|u| u.full_name())
                .collect();
            for name in names {
                let node = Node {
                    id: format!("SearchResult{name}"),
                    label: name,
                    is_selected: false,
                };
                surface.draw_node(ui, &node);
            }
        }

        surface.draw_divider(ui);
        let close_button = Button {
            label: "Close".to_string(),
            size: Vec2::new(80.0, 24.0),
            color: INPUT_BG,
            corner_rounding: 6.0,
            ..Default::default()
        };
        if surface.draw_button(ui, &close_button).clicked {
            surface.close_modal(SEARCH_MODAL_ID);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_follows_when_at_bottom() {
        let feed = FeedScroll::capture(300.0, 300.0);
        assert!(feed.should_follow());
    }

    #[test]
    fn test_feed_follows_when_past_bottom() {
        // Offsets can momentarily exceed the maximum while content shrinks
        let feed = FeedScroll::capture(320.0, 300.0);
        assert!(feed.should_follow());
    }

    #[test]
    fn test_feed_follows_within_tolerance_of_bottom() {
        // A fractional-pixel shortfall from animated offsets still counts
        // as pinned
        let feed = FeedScroll::capture(299.5, 300.0);
        assert!(feed.should_follow());
    }

    #[test]
    fn test_feed_stays_put_when_scrolled_up() {
        let feed = FeedScroll::capture(120.0, 300.0);
        assert!(!feed.should_follow());
    }

    #[test]
    fn test_feed_stays_put_just_past_tolerance() {
        let feed = FeedScroll::capture(298.9, 300.0);
        assert!(!feed.should_follow());
    }

    #[test]
    fn test_empty_feed_counts_as_bottom() {
        let feed = FeedScroll::capture(0.0, 0.0);
        assert!(feed.should_follow());
    }

    #[test]
    fn test_scene_declares_without_panicking() {
        // Headless frame: the whole widget tree must declare cleanly
        // against a default context
        let ctx = egui::Context::default();
        let mut surface = Surface::new();
        let mut state = AppState::seeded();
        let assets = Assets { avatar: Texture::unset(0) };
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            draw_scene(&mut surface, ctx, &mut state, &assets);
        });
        assert!(!surface.are_any_modals_open());
    }

    #[test]
    fn test_scene_with_open_modal_keeps_registry_in_sync() {
        let ctx = egui::Context::default();
        let mut surface = Surface::new();
        let mut state = AppState::seeded();
        let assets = Assets { avatar: Texture::unset(0) };
        surface.open_modal("SearchModal");
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            draw_scene(&mut surface, ctx, &mut state, &assets);
        });
        // No dismissal gesture happened, so the modal stays open
        assert!(surface.are_any_modals_open());
    }
}
