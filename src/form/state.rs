use crate::core::StepId;
use crate::experience::model::Experience;
use crate::form::step_state::StepState;
use indexmap::IndexMap;

/// Per-step form state of one experience instance.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    steps: IndexMap<StepId, StepState>,
}

impl FormState {
    pub fn new(experience: &Experience) -> Self {
        let steps = experience
            .steps
            .iter()
            .map(|step| (step.id.clone(), StepState::from_content(&step.content)))
            .collect();
        Self { steps }
    }

    pub fn state(&self, step_id: &str) -> Option<&StepState> {
        self.steps.get(step_id)
    }

    pub fn state_mut(&mut self, step_id: &str) -> Option<&mut StepState> {
        self.steps.get_mut(step_id)
    }

    pub fn steps(&self) -> impl Iterator<Item = (&StepId, &StepState)> {
        self.steps.iter()
    }
}

/// An experience document paired with the live form state derived from it.
#[derive(Debug, Clone)]
pub struct ExperienceData {
    model: Experience,
    form_state: FormState,
}

impl ExperienceData {
    pub fn new(experience: Experience) -> Self {
        let form_state = FormState::new(&experience);
        Self {
            model: experience,
            form_state,
        }
    }

    pub fn model(&self) -> &Experience {
        &self.model
    }

    pub fn form_state(&self) -> &FormState {
        &self.form_state
    }

    pub fn state(&self, step_id: &str) -> Option<&StepState> {
        self.form_state.state(step_id)
    }

    pub fn state_mut(&mut self, step_id: &str) -> Option<&mut StepState> {
        self.form_state.state_mut(step_id)
    }

    pub fn state_at(&self, step_index: usize) -> Option<&StepState> {
        let step = self.model.steps.get(step_index)?;
        self.state(step.id.as_str())
    }

    pub fn state_at_mut(&mut self, step_index: usize) -> Option<&mut StepState> {
        let id = self.model.steps.get(step_index)?.id.clone();
        self.form_state.state_mut(id.as_str())
    }
}
