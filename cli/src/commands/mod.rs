mod events;

pub use events::handle_events;
