//! Widget descriptors
//!
//! Plain value structs describing geometry, style and behavior flags for
//! one frame. A color left at [`Rgba::EMPTY`] means "no override": the
//! corresponding style push is skipped entirely rather than rendering
//! black. Every descriptor id must be unique within its drawing scope.

use geom::{Rgba, Vec2};
use serde::{Deserialize, Serialize};

/// Push button
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Button {
    pub label: String,
    pub size: Vec2,
    pub padding: Vec2,
    /// Base background; skipped when empty
    pub color: Rgba,
    /// Background while hovered; skipped when empty
    pub color_hovered: Rgba,
    /// Background while pressed; skipped when empty
    pub color_active: Rgba,
    pub text_color: Rgba,
    pub border_color: Rgba,
    pub border_size: f32,
    pub corner_rounding: f32,
    pub is_disabled: bool,
}

/// Rectangular layout region with background, padding and nested content
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Container {
    pub id: String,
    /// Fixed extent per axis; a zero component means "use the available
    /// space" on that axis
    pub size: Vec2,
    pub padding: Vec2,
    pub bg_color: Rgba,
    pub border_color: Rgba,
    pub border_size: f32,
    pub corner_rounding: f32,
    /// Let content dictate the horizontal extent, overriding `size.x`
    pub is_auto_resizable_x: bool,
    /// Let content dictate the vertical extent, overriding `size.y`
    pub is_auto_resizable_y: bool,
    /// Scroll overflowing content; scroll state persists under `id`
    pub is_scrollable: bool,
}

/// Unformatted text run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Text {
    pub value: String,
    pub color: Rgba,
    /// Font size in points; zero means the default size
    pub size: f32,
}

/// Image drawn through the window painter at the current cursor position,
/// without advancing the layout cursor
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Image {
    /// Texture to sample; `None` (load failure) draws nothing
    #[serde(skip)]
    pub texture: Option<egui::TextureId>,
    pub size: Vec2,
    pub corner_rounding: f32,
}

/// Clickable image placed at an explicit position within the current
/// region
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageButton {
    pub id: String,
    #[serde(skip)]
    pub texture: Option<egui::TextureId>,
    /// Position relative to the current region's origin
    pub position: Vec2,
    pub size: Vec2,
    pub corner_rounding: f32,
    /// Painted under the image while hovered; skipped when empty
    pub bg_color_hovered: Rgba,
}

/// Single- or multi-line text input
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TextInput {
    pub id: String,
    /// Rendered inline over the field while the value is empty
    pub placeholder: String,
    pub size: Vec2,
    pub padding: Vec2,
    pub bg_color: Rgba,
    pub text_color: Rgba,
    pub placeholder_color: Rgba,
    pub border_size: f32,
    pub corner_rounding: f32,
}

/// Collapsible tree entry; children render recursively
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
    pub is_default_open: bool,
}

impl TreeNode {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Selectable leaf row
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub is_selected: bool,
}

/// Top-level window with explicit chrome flags
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Window {
    pub name: String,
    pub size: Vec2,
    pub position: Vec2,
    pub padding: Vec2,
    pub bg_color: Rgba,
    pub is_titlebar_visible: bool,
    pub is_scrollbar_visible: bool,
    pub is_resizable: bool,
    pub is_collapsible: bool,
    pub is_movable: bool,
}

/// Popup overlay blocking interaction with underlying content.
///
/// Renders only while its id is present in the open-modal registry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Modal {
    pub id: String,
    pub size: Vec2,
    pub padding: Vec2,
    pub bg_color: Rgba,
    pub corner_rounding: f32,
}

/// Floating menu anchored to the last drawn widget, with manually
/// hit-tested rows
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DropDownMenu {
    pub id: String,
    /// Row labels, rendered top to bottom in this order
    pub items: Vec<String>,
    /// Size of one clickable row
    pub item_size: Vec2,
    /// Offset of the content origin from the trigger's bottom-left corner
    pub origin_offset: Vec2,
    /// Padding between the content rectangle and the painted outer
    /// rectangle
    pub outer_padding: Vec2,
    pub bg_color: Rgba,
    pub text_color: Rgba,
    /// Row background while hovered; skipped when empty
    pub hover_color: Rgba,
    pub corner_rounding: f32,
}
