//! The query form: every input of a time-bounded search and the events that edit them.

use anyhow::Result;
use chrono::NaiveDate;
use strum::IntoEnumIterator;

use crate::field::{FieldValue, TimeFields, TimeUnit, TimeValidity};
use crate::filter::{Attribute, AttributeTexts, FilterPayload};
use crate::keys::{Key, Selection, accepts_attribute_key, accepts_time_key};
use crate::normalize::pad_on_blur;
use crate::range::{Boundary, combine_date_and_time};
use crate::sink::QuerySink;

/// Date and time inputs of one end of the range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryFields {
    pub date: Option<NaiveDate>,
    pub time: TimeFields,
}

/// Validity flags for the whole form, recomputed from the current field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormValidity {
    pub start_date: bool,
    pub start: TimeValidity,
    pub end_date: bool,
    pub end: TimeValidity,
}

impl FormValidity {
    pub fn derive(form: &QueryForm) -> Self {
        Self {
            start_date: form.start.date.is_some(),
            start: form.start.time.validity(),
            end_date: form.end.date.is_some(),
            end: form.end.time.validity(),
        }
    }

    pub fn date(&self, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Start => self.start_date,
            Boundary::End => self.end_date,
        }
    }

    pub fn time(&self, boundary: Boundary) -> TimeValidity {
        match boundary {
            Boundary::Start => self.start,
            Boundary::End => self.end,
        }
    }
}

/// State of the search form between user events.
///
/// Every handler runs to completion on `&mut self`; nothing is cached between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryForm {
    start: BoundaryFields,
    end: BoundaryFields,
    attributes: AttributeTexts,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary(&self, boundary: Boundary) -> &BoundaryFields {
        match boundary {
            Boundary::Start => &self.start,
            Boundary::End => &self.end,
        }
    }

    fn boundary_mut(&mut self, boundary: Boundary) -> &mut BoundaryFields {
        match boundary {
            Boundary::Start => &mut self.start,
            Boundary::End => &mut self.end,
        }
    }

    pub fn attributes(&self) -> &AttributeTexts {
        &self.attributes
    }

    /// Text currently shown in a time input.
    pub fn time_text(&self, boundary: Boundary, unit: TimeUnit) -> Option<&str> {
        self.boundary(boundary).time.get(unit).text.as_deref()
    }

    /// A key press in a time input. Returns whether the edit goes through.
    pub fn on_key(
        &self,
        boundary: Boundary,
        unit: TimeUnit,
        key: Key,
        selection: Selection,
    ) -> bool {
        let text = self.time_text(boundary, unit).unwrap_or_default();
        accepts_time_key(text, key, selection)
    }

    /// The text of a time input changed: commit and canonicalize it.
    pub fn on_input(&mut self, boundary: Boundary, unit: TimeUnit, text: Option<&str>) {
        let field = self.boundary_mut(boundary).time.get_mut(unit);
        field.edit(unit, text);
        tracing::debug!(
            boundary = boundary.as_ref(),
            unit = unit.as_ref(),
            value = ?field.value,
            "time field committed"
        );
    }

    /// Types `text` into an empty time input one key at a time, dropping the keys the
    /// input refuses, then commits what was accepted.
    pub fn type_text(&mut self, boundary: Boundary, unit: TimeUnit, text: &str) {
        let mut typed = String::new();
        for c in text.chars() {
            let caret = Selection::caret(typed.chars().count());
            if accepts_time_key(&typed, Key::Char(c), caret) {
                typed.push(c);
            } else {
                tracing::debug!(
                    boundary = boundary.as_ref(),
                    unit = unit.as_ref(),
                    "key {c:?} refused"
                );
            }
        }
        self.on_input(boundary, unit, Some(&typed));
    }

    /// A time input lost focus: pad its shown text, leaving the committed value alone.
    pub fn on_blur(&mut self, boundary: Boundary, unit: TimeUnit) {
        let field = self.boundary_mut(boundary).time.get_mut(unit);
        field.text = pad_on_blur(field.text.as_deref());
    }

    pub fn on_date_selected(&mut self, boundary: Boundary, date: Option<NaiveDate>) {
        self.boundary_mut(boundary).date = date;
        tracing::debug!(boundary = boundary.as_ref(), ?date, "date selected");
    }

    /// A key press in an attribute input. Returns whether the edit goes through.
    pub fn on_attribute_key(&self, attribute: Attribute, key: Key) -> bool {
        accepts_attribute_key(attribute, key)
    }

    pub fn set_attribute(&mut self, attribute: Attribute, text: &str) {
        *self.attributes.get_mut(attribute) = text.to_string();
    }

    /// Types `text` into an empty attribute input, dropping refused keys.
    pub fn type_attribute(&mut self, attribute: Attribute, text: &str) {
        let typed: String = text
            .chars()
            .filter(|&c| accepts_attribute_key(attribute, Key::Char(c)))
            .collect();
        if typed.chars().count() != text.chars().count() {
            tracing::debug!(attribute = attribute.as_ref(), "some keys refused");
        }
        self.set_attribute(attribute, &typed);
    }

    pub fn validity(&self) -> FormValidity {
        FormValidity::derive(self)
    }

    /// Time inputs whose committed value is out of range or not a number.
    pub fn invalid_fields(&self) -> Vec<(Boundary, TimeUnit)> {
        Boundary::iter()
            .flat_map(|b| TimeUnit::iter().map(move |u| (b, u)))
            .filter(|&(b, u)| self.boundary(b).time.get(u).value == FieldValue::Invalid)
            .collect()
    }

    /// Combines both boundaries and the attribute texts into a filter.
    ///
    /// Validity is not consulted: whatever the time inputs show is read best-effort.
    pub fn build_filter(&self) -> FilterPayload {
        let start_time = self.combine(Boundary::Start);
        let end_time = self.combine(Boundary::End);
        FilterPayload::assemble(&self.attributes, start_time, end_time)
    }

    fn combine(&self, boundary: Boundary) -> Option<chrono::NaiveDateTime> {
        let fields = self.boundary(boundary);
        combine_date_and_time(
            fields.date,
            fields.time.hour.text.as_deref(),
            fields.time.minute.text.as_deref(),
            fields.time.second.text.as_deref(),
            boundary,
        )
    }

    /// Builds the filter and hands it to `sink`. The form keeps its values so the
    /// search can be refined and sent again.
    pub fn submit(&self, sink: &mut dyn QuerySink) -> Result<()> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            let names: Vec<String> = invalid
                .iter()
                .map(|(b, u)| format!("{}-{}", b.as_ref(), u.as_ref()))
                .collect();
            tracing::warn!("submitting with invalid fields: {}", names.join(", "));
        }
        let payload = self.build_filter();
        tracing::debug!(?payload, "submitting filter");
        sink.send(payload)
    }

    /// Clears every input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
