//! Layout/composition facade over an immediate-mode UI library
//!
//! Wraps `egui` with declarative, data-described widgets and a handful of
//! retained-style extras the library does not provide natively:
//!
//! - container fixed-sizing with per-axis auto-resize
//! - positioned image overlay through the window painter (no cursor
//!   advance)
//! - dropdown menus with manual per-row hit regions on the foreground
//!   layer
//! - an open-modal registry answering "is any modal open"
//! - inline placeholder rendering over empty text inputs
//!
//! Widget descriptors are plain serializable values; interactions are
//! returned per draw call, and nested content is passed as a closure
//! argument, never stored inside a descriptor.

mod convert;
mod fonts;
mod menu;
mod modal;
mod surface;
mod texture;
mod widget;

pub use fonts::install_font;
pub use menu::{hit_row, menu_layout, MenuLayout};
pub use modal::ModalRegistry;
pub use surface::{Interaction, MenuInteraction, Surface};
pub use texture::Texture;
pub use widget::{
    Button, Container, DropDownMenu, Image, ImageButton, Modal, Node, Text, TextInput, TreeNode,
    Window,
};
