//! Picking a project from the entries beside the launcher.

pub mod entries;
pub mod menu;
pub mod root;
pub mod selection;
