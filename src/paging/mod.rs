pub mod controller;
pub mod lifecycle;
pub mod monitor;

pub use controller::{
    ExperiencePagingController, PagingPage, ScrollRequest, interpolate_height,
    transition_progress,
};
pub use lifecycle::{ContainerLifecycleHandler, ContainerPhase, LifecycleEvent};
pub use monitor::{PageMonitor, PageObserver};
