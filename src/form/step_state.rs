use crate::core::ComponentId;
use crate::experience::component::{ExperienceComponent, visit_components};
use crate::form::item::{FormItem, FormItemKind};
use crate::form::slug::slugify;
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

pub const PROFILE_KEY_PREFIX: &str = "_appcuesForm_";

/// Form items of one step, keyed by the id of the input component they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepState {
    items: IndexMap<ComponentId, FormItem>,
}

impl StepState {
    pub fn new(items: IndexMap<ComponentId, FormItem>) -> Self {
        Self { items }
    }

    /// Index every input node of a step's tree.
    ///
    /// Ids are expected to be unique within a step; a repeated id keeps its
    /// first position but the later node's item replaces the earlier one.
    pub fn from_content(root: &ExperienceComponent) -> Self {
        let mut items = IndexMap::new();
        visit_components(root, &mut |node| {
            let item = match node {
                ExperienceComponent::TextInput(model) => FormItem::from_text_input(model),
                ExperienceComponent::OptionSelect(model) => FormItem::from_option_select(model),
                ExperienceComponent::Text(_)
                | ExperienceComponent::Button(_)
                | ExperienceComponent::Image(_)
                | ExperienceComponent::Spacer(_)
                | ExperienceComponent::Embed(_)
                | ExperienceComponent::CustomComponent(_)
                | ExperienceComponent::Stack(_)
                | ExperienceComponent::Box(_)
                | ExperienceComponent::Pager(_) => return,
            };
            if items.insert(node.id().clone(), item).is_some() {
                tracing::debug!(id = %node.id(), "duplicate form component id in step");
            }
        });
        Self { items }
    }

    pub fn items(&self) -> impl Iterator<Item = (&ComponentId, &FormItem)> {
        self.items.iter()
    }

    pub fn item(&self, id: &str) -> Option<&FormItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.items.values().all(FormItem::is_satisfied)
    }

    /// Current value of an item, or an empty string for an unknown id.
    pub fn value(&self, id: &str) -> String {
        self.items
            .get(id)
            .map(FormItem::get_value)
            .unwrap_or_default()
    }

    /// Returns whether an item with this id exists.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                item.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str, value: &str) -> bool {
        self.items.get(id).is_some_and(|item| item.contains(value))
    }

    /// Profile properties keyed by `_appcuesForm_` plus the slugged label.
    ///
    /// Labels that slug to the same key collapse into one property: the key
    /// keeps the position of the first such item and the value of the last.
    /// Use [`StepState::formatted_as_debug_data`] to see every item.
    pub fn formatted_as_profile_update(&self) -> IndexMap<String, String> {
        self.items
            .values()
            .map(|item| {
                (
                    format!("{PROFILE_KEY_PREFIX}{}", slugify(item.label())),
                    item.get_value(),
                )
            })
            .collect()
    }

    pub fn formatted_as_debug_data(&self) -> Vec<(String, String)> {
        self.items
            .values()
            .map(|item| (item.label().to_string(), item.get_value()))
            .collect()
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FormItemRecord<'a> {
    field_id: &'a ComponentId,
    field_type: FormItemKind,
    field_required: bool,
    value: String,
    label: &'a str,
}

impl Serialize for StepState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter().map(|(id, item)| FormItemRecord {
            field_id: id,
            field_type: item.kind(),
            field_required: item.is_required(),
            value: item.get_value(),
            label: item.label(),
        }))
    }
}
