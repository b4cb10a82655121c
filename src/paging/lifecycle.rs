/// Notifications a paged container sends to its single lifecycle handler.
pub trait ContainerLifecycleHandler {
    fn container_will_appear(&mut self) {}
    fn container_did_appear(&mut self) {}
    fn container_will_disappear(&mut self) {}
    fn container_did_disappear(&mut self) {}
    fn container_navigated(&mut self, _from: usize, _to: usize) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
    Navigated { from: usize, to: usize },
}

/// Any `FnMut(LifecycleEvent)` closure can act as the handler.
impl<F> ContainerLifecycleHandler for F
where
    F: FnMut(LifecycleEvent),
{
    fn container_will_appear(&mut self) {
        self(LifecycleEvent::WillAppear);
    }

    fn container_did_appear(&mut self) {
        self(LifecycleEvent::DidAppear);
    }

    fn container_will_disappear(&mut self) {
        self(LifecycleEvent::WillDisappear);
    }

    fn container_did_disappear(&mut self) {
        self(LifecycleEvent::DidDisappear);
    }

    fn container_navigated(&mut self, from: usize, to: usize) {
        self(LifecycleEvent::Navigated { from, to });
    }
}

/// Visibility of the container between lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerPhase {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

impl ContainerPhase {
    /// The phase reached by `event`, or `None` when the event does not apply
    /// to the current phase.
    pub fn advance(self, event: LifecycleEvent) -> Option<Self> {
        match (self, event) {
            (Self::Hidden | Self::Disappearing, LifecycleEvent::WillAppear) => {
                Some(Self::Appearing)
            }
            (Self::Appearing, LifecycleEvent::DidAppear) => Some(Self::Visible),
            (Self::Appearing | Self::Visible, LifecycleEvent::WillDisappear) => {
                Some(Self::Disappearing)
            }
            (Self::Disappearing, LifecycleEvent::DidDisappear) => Some(Self::Hidden),
            (_, LifecycleEvent::Navigated { .. }) => Some(self),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContainerPhase, LifecycleEvent};

    #[test]
    fn full_cycle() {
        let phase = ContainerPhase::Hidden
            .advance(LifecycleEvent::WillAppear)
            .and_then(|p| p.advance(LifecycleEvent::DidAppear))
            .and_then(|p| p.advance(LifecycleEvent::WillDisappear))
            .and_then(|p| p.advance(LifecycleEvent::DidDisappear));
        assert_eq!(phase, Some(ContainerPhase::Hidden));
    }

    #[test]
    fn repeated_transitions_are_rejected() {
        assert_eq!(ContainerPhase::Visible.advance(LifecycleEvent::DidAppear), None);
        assert_eq!(ContainerPhase::Hidden.advance(LifecycleEvent::DidDisappear), None);
        assert_eq!(ContainerPhase::Appearing.advance(LifecycleEvent::WillAppear), None);
    }

    #[test]
    fn interrupted_disappearance_can_reappear() {
        assert_eq!(
            ContainerPhase::Disappearing.advance(LifecycleEvent::WillAppear),
            Some(ContainerPhase::Appearing)
        );
    }
}
