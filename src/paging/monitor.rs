use std::fmt;

pub type PageObserver = Box<dyn FnMut(usize, usize)>;

/// Page state of a paged container.
///
/// Observers are plain closures called synchronously in registration order.
/// The monitor owns the closures but not whatever they point at: anything a
/// closure reaches through a weak handle must outlive the monitor or tolerate
/// being gone.
pub struct PageMonitor {
    observers: Vec<PageObserver>,
    number_of_pages: usize,
    current_page: usize,
}

impl PageMonitor {
    pub fn new(number_of_pages: usize, current_page: usize) -> Self {
        Self {
            observers: Vec::new(),
            number_of_pages,
            current_page,
        }
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `observer` receives `(current_page, previous_page)` on every change.
    pub fn add_observer(&mut self, observer: impl FnMut(usize, usize) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Setting the page it already holds notifies nobody. Bounds are the
    /// caller's responsibility. Returns whether the page changed.
    pub fn set(&mut self, current_page: usize) -> bool {
        let previous_page = self.current_page;
        if current_page == previous_page {
            return false;
        }
        self.current_page = current_page;

        for observer in &mut self.observers {
            observer(current_page, previous_page);
        }
        true
    }
}

impl fmt::Debug for PageMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageMonitor")
            .field("number_of_pages", &self.number_of_pages)
            .field("current_page", &self.current_page)
            .field("observers", &self.observers.len())
            .finish()
    }
}
