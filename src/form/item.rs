use crate::experience::component::{OptionSelectModel, SelectMode, TextInputModel};
use crate::form::validator::{self, Validator};
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormItemKind {
    TextInput,
    OptionSelect,
}

impl FormItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextInput => "textInput",
            Self::OptionSelect => "optionSelect",
        }
    }
}

impl fmt::Display for FormItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Single(String),
    Multi {
        values: IndexSet<String>,
        max: Option<u32>,
    },
}

impl FormValue {
    pub fn is_set(&self) -> bool {
        match self {
            Self::Single(value) => !value.is_empty(),
            Self::Multi { values, .. } => !values.is_empty(),
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            Self::Single(value) => value == candidate,
            Self::Multi { values, .. } => values.contains(candidate),
        }
    }

    /// Flat string form; multiple selections are comma-joined in selection order.
    pub fn display_value(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multi { values, .. } => values
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Live, editable state of one input component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormItem {
    kind: FormItemKind,
    label: String,
    value: FormValue,
    validators: Vec<Validator>,
    required: bool,
}

impl FormItem {
    pub fn from_text_input(model: &TextInputModel) -> Self {
        let required = model.required.unwrap_or(false);
        let validators = if required {
            vec![Validator::NonEmpty]
        } else {
            Vec::new()
        };

        Self {
            kind: FormItemKind::TextInput,
            label: model.label.text.clone(),
            value: FormValue::Single(model.default_value.clone().unwrap_or_default()),
            validators,
            required,
        }
    }

    pub fn from_option_select(model: &OptionSelectModel) -> Self {
        let min = model.effective_min_selections();
        let max = model.effective_max_selections();

        let mut validators = Vec::new();
        if min > 0 {
            validators.push(match model.select_mode {
                SelectMode::Single => Validator::MinSelections(1),
                SelectMode::Multi => Validator::MinSelections(min),
            });
        }
        if let Some(max) = max {
            validators.push(Validator::MaxSelections(max));
        }

        let defaults = model.default_value.as_deref().unwrap_or_default();
        let value = match model.select_mode {
            SelectMode::Single => FormValue::Single(defaults.first().cloned().unwrap_or_default()),
            SelectMode::Multi => FormValue::Multi {
                values: defaults.iter().cloned().collect(),
                max,
            },
        };

        Self {
            kind: FormItemKind::OptionSelect,
            label: model.label.text.clone(),
            value,
            validators,
            required: min > 0,
        }
    }

    pub fn kind(&self) -> FormItemKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &FormValue {
        &self.value
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_value(&self) -> String {
        self.value.display_value()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.value.contains(candidate)
    }

    pub fn is_satisfied(&self) -> bool {
        validator::all_satisfied(&self.validators, &self.value)
    }

    /// Single values are replaced. Multi values toggle `candidate`, and a new
    /// selection past the maximum is ignored.
    pub fn set_value(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        match &mut self.value {
            FormValue::Single(value) => *value = candidate,
            FormValue::Multi { values, max } => {
                if values.contains(&candidate) {
                    values.shift_remove(&candidate);
                } else if max.is_some_and(|limit| values.len() >= limit as usize) {
                    tracing::trace!(label = %self.label, "selection limit reached");
                } else {
                    values.insert(candidate);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormItem, FormItemKind, FormValue};
    use crate::experience::component::{OptionSelectModel, TextInputModel};
    use crate::form::validator::Validator;

    fn text_input(json: &str) -> TextInputModel {
        serde_json::from_str(json).expect("text input should parse")
    }

    fn option_select(
        mode: &str,
        options: usize,
        min: Option<u32>,
        max: Option<u32>,
    ) -> OptionSelectModel {
        let options = (0..options)
            .map(|i| {
                serde_json::json!({
                    "value": format!("opt{i}"),
                    "content": {"type": "text", "id": format!("t{i}"), "text": format!("Option {i}")}
                })
            })
            .collect::<Vec<_>>();
        serde_json::from_value(serde_json::json!({
            "id": "select",
            "label": {"id": "l", "text": "Pick"},
            "selectMode": mode,
            "options": options,
            "minSelections": min,
            "maxSelections": max,
        }))
        .expect("option select should parse")
    }

    #[test]
    fn required_text_input_gets_non_empty() {
        let item = FormItem::from_text_input(&text_input(
            r#"{"id":"a","label":{"id":"l","text":"Name"},"required":true}"#,
        ));
        assert_eq!(item.kind(), FormItemKind::TextInput);
        assert_eq!(item.validators(), &[Validator::NonEmpty]);
        assert!(item.is_required());
        assert!(!item.is_satisfied());
    }

    #[test]
    fn optional_text_input_has_no_validators() {
        let item = FormItem::from_text_input(&text_input(
            r#"{"id":"a","label":{"id":"l","text":"Name"},"defaultValue":"Ada"}"#,
        ));
        assert!(item.validators().is_empty());
        assert!(!item.is_required());
        assert_eq!(item.get_value(), "Ada");
    }

    #[test]
    fn min_clamps_to_option_count() {
        let model = option_select("multi", 2, Some(5), None);
        assert_eq!(model.effective_min_selections(), 2);
        let item = FormItem::from_option_select(&model);
        assert_eq!(item.validators(), &[Validator::MinSelections(2)]);
        assert!(item.is_required());
    }

    #[test]
    fn max_is_raised_to_min() {
        let model = option_select("multi", 4, Some(3), Some(1));
        assert_eq!(model.effective_max_selections(), Some(3));
        let item = FormItem::from_option_select(&model);
        let expected = [Validator::MinSelections(3), Validator::MaxSelections(3)];
        assert_eq!(item.validators(), &expected);
    }

    #[test]
    fn single_mode_requires_one_selection() {
        let item = FormItem::from_option_select(&option_select("single", 3, Some(2), Some(2)));
        let expected = [Validator::MinSelections(1), Validator::MaxSelections(2)];
        assert_eq!(item.validators(), &expected);
        assert!(matches!(item.value(), FormValue::Single(_)));
    }

    #[test]
    fn zero_min_is_not_required() {
        let item = FormItem::from_option_select(&option_select("multi", 3, None, None));
        assert!(item.validators().is_empty());
        assert!(!item.is_required());
        assert!(item.is_satisfied());
    }

    #[test]
    fn multi_toggle_is_idempotent() {
        let mut item = FormItem::from_option_select(&option_select("multi", 3, None, None));
        item.set_value("opt1");
        let before = item.value().clone();
        item.set_value("opt2");
        item.set_value("opt2");
        assert_eq!(item.value(), &before);
        assert_eq!(item.get_value(), "opt1");
    }

    #[test]
    fn multi_never_exceeds_max() {
        let mut item = FormItem::from_option_select(&option_select("multi", 4, None, Some(2)));
        item.set_value("opt0");
        item.set_value("opt1");
        item.set_value("opt2");
        assert_eq!(item.get_value(), "opt0,opt1");
        assert!(!item.contains("opt2"));

        item.set_value("opt0");
        item.set_value("opt2");
        assert_eq!(item.get_value(), "opt1,opt2");
    }

    #[test]
    fn single_select_replaces() {
        let mut item = FormItem::from_option_select(&option_select("single", 3, None, None));
        item.set_value("opt0");
        item.set_value("opt1");
        item.set_value("opt1");
        assert_eq!(item.get_value(), "opt1");
        assert!(item.contains("opt1"));
    }
}
