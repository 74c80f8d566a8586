pub mod event_listeners;
pub mod spawn_events;
pub mod spawn_macro;
