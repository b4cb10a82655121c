pub mod item;
pub mod slug;
pub mod state;
pub mod step_state;
pub mod validator;

pub use item::{FormItem, FormItemKind, FormValue};
pub use slug::slugify;
pub use state::{ExperienceData, FormState};
pub use step_state::{PROFILE_KEY_PREFIX, StepState};
pub use validator::Validator;
