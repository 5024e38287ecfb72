// Brand module
// Form fields, partial updates, the summary template and its wire types

mod form;
mod template;
mod types;

pub use form::{FormError, FormField, FormPatch, FormState};
pub use template::render_summary;
pub use types::{SummaryResponse, SummaryText};
