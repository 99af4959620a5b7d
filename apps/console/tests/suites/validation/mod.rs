mod fixtures;
mod form_state;
