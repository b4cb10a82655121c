pub mod builtin;
pub mod completion;
pub mod context;
pub mod queue;
pub mod registry;

pub use builtin::{
    CloseAction, ContinueAction, LaunchExperienceAction, SubmitFormAction, UpdateProfileAction,
};
pub use completion::Completion;
pub use context::{ExperienceContext, InteractionLevel, RenderContext, StepReference};
pub use queue::{ActionBatch, ActionQueue, QueuedAction};
pub use registry::{ActionClosure, ActionFactory, ActionRegistry, ActionType, ExperienceAction};
