pub mod click_event;
pub mod map_surface;
