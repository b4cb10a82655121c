pub mod component;
pub mod loader;
pub mod model;

pub use component::{ExperienceComponent, OptionSelectModel, SelectMode, TextInputModel};
pub use loader::{DocumentFormat, load_experience, parse_experience};
pub use model::{ActionModel, ActionTrigger, Experience, Step, TraitModel};
