pub mod favorites_panel;
pub mod mood_list;
pub mod track_list;
