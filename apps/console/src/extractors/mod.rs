pub mod current_session;
pub mod validated_form;
pub mod validated_json;

pub use current_session::CurrentSession;
pub use validated_form::{ensure_valid, FormRejection, ValidatedForm};
pub use validated_json::ValidatedJson;
