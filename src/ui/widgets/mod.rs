pub mod counter_card;
pub mod footer;
pub mod header;
pub mod intro;
pub mod surprise_modal;
