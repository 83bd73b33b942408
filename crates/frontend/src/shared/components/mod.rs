pub mod card_animated;
pub mod copy_button;
pub mod data_view_parts;
pub mod date_input;
pub mod form_field;
pub mod pagination_controls;
pub mod progress_ring;
pub mod stat_card;
pub mod status_badge;
