use crate::core::{ComponentId, ConfigValue, PluginConfig, StepId};
use crate::experience::component::ExperienceComponent;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub experience_type: Option<String>,
    #[serde(default)]
    pub traits: Vec<TraitModel>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Experience {
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id.as_str() == id)
    }

    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id.as_str() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: StepId,
    #[serde(default, rename = "type")]
    pub step_type: Option<String>,
    #[serde(default)]
    pub traits: Vec<TraitModel>,
    /// Actions keyed by the component that triggers them.
    #[serde(default)]
    pub actions: IndexMap<ComponentId, Vec<ActionModel>>,
    pub content: ExperienceComponent,
}

/// A configured action record: run `action_type` with `config` when `trigger` fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionModel {
    pub trigger: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub config: Option<ConfigValue>,
}

impl ActionModel {
    pub fn new(trigger: impl Into<String>, action_type: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            action_type: action_type.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: ConfigValue) -> Self {
        self.config = Some(config);
        self
    }

    pub fn plugin_config(&self) -> PluginConfig<'_> {
        PluginConfig::new(self.config.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraitModel {
    #[serde(rename = "type")]
    pub trait_type: String,
    #[serde(default)]
    pub config: Option<ConfigValue>,
}

impl TraitModel {
    pub fn new(trait_type: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            config: None,
        }
    }

    pub fn with_config(mut self, config: ConfigValue) -> Self {
        self.config = Some(config);
        self
    }

    pub fn plugin_config(&self) -> PluginConfig<'_> {
        PluginConfig::new(self.config.as_ref())
    }
}

/// Interaction kinds a component can bind actions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionTrigger {
    Tap,
    LongPress,
}

impl ActionTrigger {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "tap" => Some(Self::Tap),
            "longPress" => Some(Self::LongPress),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::LongPress => "longPress",
        }
    }
}

impl fmt::Display for ActionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
