pub mod action;
pub mod config;
pub mod core;
pub mod error;
pub mod experience;
pub mod form;
pub mod paging;
pub mod step;
pub mod traits;

pub use action::{ActionRegistry, Completion, ExperienceAction, ExperienceContext};
pub use config::Config;
pub use error::{ExperienceError, Result};
pub use experience::{Experience, load_experience};
pub use form::{ExperienceData, FormState, StepState};
pub use paging::{ExperiencePagingController, PageMonitor};
pub use step::ExperienceStepViewModel;
pub use traits::TraitRegistry;
