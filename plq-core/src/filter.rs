//! The outbound query filter and the rules that assemble it.

use chrono::NaiveDateTime;
use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

/// The free-text attribute inputs of the query form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Attribute {
    LicensePlates,
    Colors,
    Models,
    Makes,
}

/// Raw text of the four attribute inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTexts {
    pub license_plates: String,
    pub colors: String,
    pub models: String,
    pub makes: String,
}

impl AttributeTexts {
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::LicensePlates => &self.license_plates,
            Attribute::Colors => &self.colors,
            Attribute::Models => &self.models,
            Attribute::Makes => &self.makes,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut String {
        match attribute {
            Attribute::LicensePlates => &mut self.license_plates,
            Attribute::Colors => &mut self.colors,
            Attribute::Models => &mut self.models,
            Attribute::Makes => &mut self.makes,
        }
    }
}

/// The filter sent to the query service.
///
/// Serializes to
/// `{"licensePlates":[..],"colors":[..],"models":[..],"makes":[..],"startTime":..,"endTime":..}`
/// with timestamps as `YYYY-MM-DDTHH:MM:SS` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    pub license_plates: Vec<String>,
    pub colors: Vec<String>,
    pub models: Vec<String>,
    pub makes: Vec<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl FilterPayload {
    /// Assembles the payload from the attribute texts and both range boundaries.
    pub fn assemble(
        texts: &AttributeTexts,
        start_time: Option<NaiveDateTime>,
        end_time: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            license_plates: split_terms(&texts.license_plates),
            colors: split_terms(&texts.colors),
            models: split_terms(&texts.models),
            makes: split_terms(&texts.makes),
            start_time,
            end_time,
        }
    }
}

/// Splits attribute text into search terms: whitespace separated, in order, duplicates kept.
///
/// ```
/// # use plq_core::filter::split_terms;
/// assert_eq!(split_terms(" ABC 123  ABC "), vec!["ABC", "123", "ABC"]);
/// assert!(split_terms("   ").is_empty());
/// ```
pub fn split_terms(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
