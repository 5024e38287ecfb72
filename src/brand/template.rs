// Summary template
//
// The summary is a plain string interpolation of the four brand fields into a
// fixed multi-line template. Missing fields become empty strings; rendering
// never fails.

use super::form::{FormField, FormState};

/// Render the brand summary for `form`
pub fn render_summary(form: &FormState) -> String {
    let name = form.get(FormField::BusinessName);
    let audience = form.get(FormField::Audience);
    let color = form.get(FormField::Color);
    let tone = form.get(FormField::Tone);

    format!(
        "Brand: {name}\n\
         Audience: {audience}\n\
         Primary color: {color}\n\
         Communication tone: {tone}\n\
         \n\
         Summary:\n\
         {name} is a brand created for {audience}, with a visual identity based on \
         the color {color} and communication in a {tone} tone.\n"
    )
}
