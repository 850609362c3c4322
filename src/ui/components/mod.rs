//! UI components

pub mod container_table;
pub mod dialog;

pub use container_table::ContainerTableWidget;
pub use dialog::render_dialog;
