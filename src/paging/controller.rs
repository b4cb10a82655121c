use crate::core::StepId;
use crate::paging::lifecycle::{ContainerLifecycleHandler, ContainerPhase, LifecycleEvent};
use crate::paging::monitor::PageMonitor;

/// One step presented as a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingPage {
    pub step_id: StepId,
    pub preferred_height: f64,
}

impl PagingPage {
    pub fn new(step_id: impl Into<StepId>, preferred_height: f64) -> Self {
        Self {
            step_id: step_id.into(),
            preferred_height,
        }
    }
}

/// Programmatic scroll the host should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub page: usize,
    pub animated: bool,
}

/// Fraction of the way from the leading visible page to the trailing one.
/// An offset sitting exactly on a page edge counts as a finished transition.
pub fn transition_progress(page_width: f64, content_offset_x: f64) -> f64 {
    let progress = (content_offset_x % page_width) / page_width;
    if progress == 0.0 { 1.0 } else { progress }
}

pub fn interpolate_height(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Horizontally paged container for the steps of one group.
///
/// Tracks the current page, the container height while scrolling between
/// pages of different heights, and forwards lifecycle transitions to a single
/// handler.
pub struct ExperiencePagingController {
    group_id: Option<String>,
    pages: Vec<PagingPage>,
    monitor: PageMonitor,
    preferred_height: f64,
    phase: ContainerPhase,
    lifecycle_handler: Option<Box<dyn ContainerLifecycleHandler>>,
    target_page_index: Option<usize>,
    scroll_request: Option<ScrollRequest>,
}

impl ExperiencePagingController {
    pub fn new(group_id: Option<String>, pages: Vec<PagingPage>) -> Self {
        let preferred_height = pages.first().map_or(0.0, |page| page.preferred_height);
        let monitor = PageMonitor::new(pages.len(), 0);
        Self {
            group_id,
            pages,
            monitor,
            preferred_height,
            phase: ContainerPhase::Hidden,
            lifecycle_handler: None,
            target_page_index: None,
            scroll_request: None,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn pages(&self) -> &[PagingPage] {
        &self.pages
    }

    pub fn page_monitor(&self) -> &PageMonitor {
        &self.monitor
    }

    pub fn page_monitor_mut(&mut self) -> &mut PageMonitor {
        &mut self.monitor
    }

    pub fn current_page(&self) -> usize {
        self.monitor.current_page()
    }

    /// Height the container currently wants.
    pub fn preferred_height(&self) -> f64 {
        self.preferred_height
    }

    pub fn phase(&self) -> ContainerPhase {
        self.phase
    }

    pub fn set_lifecycle_handler(&mut self, handler: impl ContainerLifecycleHandler + 'static) {
        self.lifecycle_handler = Some(Box::new(handler));
    }

    /// Page to jump to, without animation, when the container next appears.
    pub fn set_target_page_index(&mut self, page: usize) {
        self.target_page_index = Some(page);
    }

    pub fn target_page_index(&self) -> Option<usize> {
        self.target_page_index
    }

    pub fn go_to(&mut self, page: usize, animated: bool) {
        if page >= self.pages.len() {
            tracing::debug!(page, pages = self.pages.len(), "ignoring scroll to missing page");
            return;
        }
        self.scroll_request = Some(ScrollRequest { page, animated });
    }

    /// The pending programmatic scroll, if any. Taking it clears it.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }

    /// Page control tapped by the user.
    pub fn page_control_changed(&mut self, page: usize) {
        self.go_to(page, false);
    }

    /// A page's content reported a new preferred height.
    pub fn preferred_height_changed(&mut self, page: usize, height: f64) {
        let Some(entry) = self.pages.get_mut(page) else {
            return;
        };
        entry.preferred_height = height;
        if page == self.monitor.current_page() {
            self.preferred_height = height;
        }
    }

    /// Scroll handler, fed on every scroll update.
    ///
    /// `visible_items` are the page indices the host reports as visible; hosts
    /// may always include page 0, so indices whose leading edge falls outside
    /// `(offset - width, offset + width)` are discarded first. Two remaining
    /// pages means a transition in progress and the height is interpolated.
    /// Otherwise the last remaining page becomes current.
    pub fn on_scroll(&mut self, visible_items: &[usize], content_offset_x: f64, page_width: f64) {
        if page_width <= 0.0 {
            return;
        }

        let lower = content_offset_x - page_width + f64::MIN_POSITIVE;
        let upper = content_offset_x + page_width;
        let visible: Vec<usize> = visible_items
            .iter()
            .copied()
            .filter(|index| *index < self.pages.len())
            .filter(|index| {
                let leading_edge = *index as f64 * page_width;
                leading_edge >= lower && leading_edge < upper
            })
            .collect();

        if let [leading, trailing] = visible[..] {
            let progress = transition_progress(page_width, content_offset_x);
            self.preferred_height = interpolate_height(
                self.pages[leading].preferred_height,
                self.pages[trailing].preferred_height,
                progress,
            );
        } else if let Some(&last) = visible.last() {
            self.preferred_height = self.pages[last].preferred_height;
            self.set_current_page(last);
        }
    }

    pub fn container_will_appear(&mut self) {
        if !self.transition(LifecycleEvent::WillAppear) {
            return;
        }
        if let Some(handler) = self.lifecycle_handler.as_mut() {
            handler.container_will_appear();
        }
        if let Some(page) = self.target_page_index.take() {
            self.go_to(page, false);
        }
    }

    pub fn container_did_appear(&mut self) {
        if !self.transition(LifecycleEvent::DidAppear) {
            return;
        }
        if let Some(handler) = self.lifecycle_handler.as_mut() {
            handler.container_did_appear();
        }
    }

    pub fn container_will_disappear(&mut self) {
        if !self.transition(LifecycleEvent::WillDisappear) {
            return;
        }
        if let Some(handler) = self.lifecycle_handler.as_mut() {
            handler.container_will_disappear();
        }
    }

    pub fn container_did_disappear(&mut self) {
        if !self.transition(LifecycleEvent::DidDisappear) {
            return;
        }
        if let Some(handler) = self.lifecycle_handler.as_mut() {
            handler.container_did_disappear();
        }
    }

    fn transition(&mut self, event: LifecycleEvent) -> bool {
        match self.phase.advance(event) {
            Some(phase) => {
                self.phase = phase;
                true
            }
            None => {
                tracing::trace!(?event, phase = ?self.phase, "ignoring lifecycle transition");
                false
            }
        }
    }

    fn set_current_page(&mut self, page: usize) {
        let previous = self.monitor.current_page();
        if !self.monitor.set(page) {
            return;
        }
        tracing::debug!(from = previous, to = page, "paged container navigated");
        if let Some(handler) = self.lifecycle_handler.as_mut() {
            handler.container_navigated(previous, page);
        }
    }
}
