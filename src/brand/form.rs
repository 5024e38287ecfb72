// Brand form - the fields collected by the wizard
//
// FormState is a fixed-shape record: every field is optional and reads as the
// empty string when absent. Edits arrive as FormPatch values and are merged
// shallowly, so a patch only ever touches the fields it names.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// One of the fields a brand form is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    BusinessName,
    Audience,
    Color,
    Tone,
}

impl FormField {
    /// All fields, in the order the wizard asks for them
    pub const ALL: [FormField; 4] = [
        FormField::BusinessName,
        FormField::Audience,
        FormField::Color,
        FormField::Tone,
    ];

    /// Key used on the wire (JSON body of `POST /brand`)
    pub fn key(self) -> &'static str {
        match self {
            FormField::BusinessName => "businessName",
            FormField::Audience => "audience",
            FormField::Color => "color",
            FormField::Tone => "tone",
        }
    }

    /// Short label used in summaries and input boxes
    pub fn label(self) -> &'static str {
        match self {
            FormField::BusinessName => "Business name",
            FormField::Audience => "Target audience",
            FormField::Color => "Primary color",
            FormField::Tone => "Communication tone",
        }
    }

    /// Question shown on the wizard step that collects this field
    pub fn prompt(self) -> &'static str {
        match self {
            FormField::BusinessName => "What is your business called?",
            FormField::Audience => "Who is your target audience?",
            FormField::Color => "What is the primary color of your brand?",
            FormField::Tone => "Which tone should your communication have? (e.g. playful, formal)",
        }
    }

    /// Older wire name still accepted on input
    fn legacy_key(self) -> Option<&'static str> {
        match self {
            FormField::Audience => Some("target"),
            FormField::Color => Some("palette"),
            _ => None,
        }
    }

    /// Maximum length in characters
    pub fn max_len(self) -> usize {
        match self {
            FormField::Audience => 200,
            _ => 100,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is too long ({len} characters, at most {max} allowed)")]
    TooLong {
        field: FormField,
        len: usize,
        max: usize,
    },
}

fn check_len(field: FormField, value: &str) -> Result<(), FormError> {
    let len = value.chars().count();
    if len > field.max_len() {
        return Err(FormError::TooLong {
            field,
            len,
            max: field.max_len(),
        });
    }
    Ok(())
}

/// Accumulated answers of one wizard session
///
/// Deserialization also accepts the older field names `target` (audience)
/// and `palette` (color); any other unknown key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business_name: Option<String>,
    #[serde(default, alias = "target", skip_serializing_if = "Option::is_none")]
    audience: Option<String>,
    #[serde(default, alias = "palette", skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tone: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::BusinessName => &self.business_name,
            FormField::Audience => &self.audience,
            FormField::Color => &self.color,
            FormField::Tone => &self.tone,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::BusinessName => &mut self.business_name,
            FormField::Audience => &mut self.audience,
            FormField::Color => &mut self.color,
            FormField::Tone => &mut self.tone,
        }
    }

    /// Value of `field`, or "" when it was never set
    pub fn get(&self, field: FormField) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    /// True if `field` has been set (even to an empty string)
    pub fn contains(&self, field: FormField) -> bool {
        self.slot(field).is_some()
    }

    /// True if no field has been set
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| !self.contains(*f))
    }

    /// True if every field holds a non-blank value
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    /// Shallow merge: fields named by `patch` are replaced, all others kept.
    pub fn merge(&mut self, patch: &FormPatch) {
        for (field, value) in patch.iter() {
            *self.slot_mut(field) = Some(value.to_string());
        }
    }

    /// Lenient read of an arbitrary JSON body.
    ///
    /// Anything that is not an object reads as an empty form. Strings are
    /// taken as-is, other scalars and nested values use their JSON text, and
    /// `null` counts as absent. The canonical key wins over its legacy alias.
    pub fn from_json(body: &Value) -> Self {
        let mut form = Self::new();
        let Some(object) = body.as_object() else {
            return form;
        };

        for field in FormField::ALL {
            let value = object
                .get(field.key())
                .filter(|v| !v.is_null())
                .or_else(|| {
                    field
                        .legacy_key()
                        .and_then(|key| object.get(key))
                        .filter(|v| !v.is_null())
                });
            *form.slot_mut(field) = value.map(|v| match v {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            });
        }
        form
    }

    /// Builder-style merge, mostly useful for fixtures
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            check_len(field, self.get(field))?;
        }
        Ok(())
    }
}

/// A partial form: the fields a single edit wants to change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    entries: Vec<(FormField, String)>,
}

impl FormPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch touching exactly one field
    pub fn single(field: FormField, value: impl Into<String>) -> Self {
        Self::new().set(field, value)
    }

    /// Add (or overwrite) a field in the patch
    pub fn set(mut self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in self.iter() {
            check_len(field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reads_as_blank() {
        let form = FormState::new();
        assert!(form.is_empty());
        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
            assert!(!form.contains(field));
        }
    }

    #[test]
    fn test_merge_preserves_other_fields() {
        let mut form = FormState::new()
            .with(FormField::BusinessName, "Acme")
            .with(FormField::Audience, "devs")
            .with(FormField::Color, "blue");
        let before = form.clone();

        form.merge(&FormPatch::single(FormField::Tone, "fun"));

        assert_eq!(form.get(FormField::Tone), "fun");
        for field in [FormField::BusinessName, FormField::Audience, FormField::Color] {
            assert_eq!(form.get(field), before.get(field), "{field} changed");
        }
    }

    #[test]
    fn test_merge_replaces_named_field() {
        let mut form = FormState::new().with(FormField::Color, "blue");
        form.merge(&FormPatch::single(FormField::Color, "red"));
        assert_eq!(form.get(FormField::Color), "red");
    }

    #[test]
    fn test_patch_set_overwrites_duplicate_field() {
        let patch = FormPatch::new()
            .set(FormField::Tone, "formal")
            .set(FormField::Tone, "bold");
        let entries: Vec<_> = patch.iter().collect();
        assert_eq!(entries, vec![(FormField::Tone, "bold")]);
    }

    #[test]
    fn test_is_complete() {
        let mut form = FormState::new()
            .with(FormField::BusinessName, "Acme")
            .with(FormField::Audience, "devs")
            .with(FormField::Color, "blue");
        assert!(!form.is_complete());

        form.merge(&FormPatch::single(FormField::Tone, "   "));
        assert!(!form.is_complete(), "blank values do not count");

        form.merge(&FormPatch::single(FormField::Tone, "fun"));
        assert!(form.is_complete());
    }

    #[test]
    fn test_validate_rejects_long_values() {
        let long = "x".repeat(101);
        let patch = FormPatch::single(FormField::BusinessName, long.clone());
        assert_eq!(
            patch.validate(),
            Err(FormError::TooLong {
                field: FormField::BusinessName,
                len: 101,
                max: 100
            })
        );

        // Audience allows a longer description
        assert!(FormPatch::single(FormField::Audience, long).validate().is_ok());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let accented = "é".repeat(100);
        assert!(FormPatch::single(FormField::Tone, accented).validate().is_ok());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let form = FormState::new()
            .with(FormField::BusinessName, "Sparkup")
            .with(FormField::Tone, "bold");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({"businessName": "Sparkup", "tone": "bold"}));
    }

    #[test]
    fn test_deserializes_legacy_field_names() {
        let form: FormState = serde_json::from_str(
            r#"{"businessName": "Acme", "target": "devs", "palette": "blue", "description": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(form.get(FormField::BusinessName), "Acme");
        assert_eq!(form.get(FormField::Audience), "devs");
        assert_eq!(form.get(FormField::Color), "blue");
        assert!(!form.contains(FormField::Tone));
    }

    #[test]
    fn test_from_json_renders_scalars_as_text() {
        let form = FormState::from_json(&serde_json::json!({
            "businessName": 42,
            "audience": true,
            "color": null,
            "tone": "calm"
        }));
        assert_eq!(form.get(FormField::BusinessName), "42");
        assert_eq!(form.get(FormField::Audience), "true");
        assert!(!form.contains(FormField::Color));
        assert_eq!(form.get(FormField::Tone), "calm");
    }

    #[test]
    fn test_from_json_prefers_canonical_key_over_alias() {
        let form = FormState::from_json(&serde_json::json!({
            "audience": "devs",
            "target": "everyone",
            "palette": "blue"
        }));
        assert_eq!(form.get(FormField::Audience), "devs");
        assert_eq!(form.get(FormField::Color), "blue");
    }

    #[test]
    fn test_from_json_non_object_is_empty() {
        for body in [serde_json::json!([1, 2]), serde_json::json!("text"), Value::Null] {
            assert!(FormState::from_json(&body).is_empty(), "{body}");
        }
    }
}
