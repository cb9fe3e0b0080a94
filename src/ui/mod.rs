pub mod control_view;
pub mod echo;
pub mod header_bar;
pub mod status_bar;
