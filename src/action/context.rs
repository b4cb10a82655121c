use crate::core::{ConfigValue, StepId};
use crate::experience::model::Experience;
use crate::form::step_state::StepState;
use indexmap::IndexMap;
use std::fmt;

/// The host application as seen by executing actions.
///
/// Actions only hold a weak handle to it; once the host is gone, actions
/// complete without doing anything.
pub trait ExperienceContext {
    fn identify(&self, properties: IndexMap<String, ConfigValue>);
    fn show_experience(&self, experience_id: &str);
    fn navigate(&self, target: StepReference);
    fn dismiss(&self, mark_complete: bool);
    /// Snapshot of the form state of the step currently on screen.
    fn current_step_state(&self) -> Option<StepState>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReference {
    Index(usize),
    Offset(i64),
    Step(StepId),
}

impl StepReference {
    pub fn resolve(&self, current: usize, experience: &Experience) -> Option<usize> {
        let index = match self {
            Self::Index(index) => *index,
            Self::Offset(offset) => current.checked_add_signed(isize::try_from(*offset).ok()?)?,
            Self::Step(id) => experience.step_index(id.as_str())?,
        };
        (index < experience.steps.len()).then_some(index)
    }
}

impl fmt::Display for StepReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "index {index}"),
            Self::Offset(offset) => write!(f, "offset {offset:+}"),
            Self::Step(id) => write!(f, "step {id}"),
        }
    }
}

/// Where the experience is being presented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderContext {
    #[default]
    Modal,
    Embed { frame_id: String },
}

/// Scope an interaction was triggered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionLevel {
    Group,
    Step,
}
