use crate::action::completion::Completion;
use crate::action::context::{InteractionLevel, RenderContext};
use crate::action::registry::ActionClosure;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub struct QueuedAction {
    pub action_type: String,
    pub closure: ActionClosure,
}

/// Actions resolved from one interaction, tagged with where it came from.
pub struct ActionBatch {
    pub level: InteractionLevel,
    pub render_context: RenderContext,
    pub interaction_type: String,
    pub view_description: Option<String>,
    pub actions: Vec<QueuedAction>,
}

type BatchObserver = Box<dyn FnMut(&ActionBatch)>;

#[derive(Default)]
struct QueueState {
    pending: VecDeque<QueuedAction>,
    running: Option<String>,
    draining: bool,
}

/// FIFO dispatch queue: one action runs at a time and the next one starts
/// when the running action signals completion.
///
/// Completions that fire synchronously never nest: the drain loop that is
/// already running picks up the next action.
#[derive(Default)]
pub struct ActionQueue {
    state: Rc<RefCell<QueueState>>,
    observers: RefCell<Vec<BatchObserver>>,
    incoming: RefCell<VecDeque<ActionBatch>>,
    notifying: Cell<bool>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observers see every batch before its actions are queued. An observer
    /// may enqueue further batches; those are observed after the current one.
    pub fn add_batch_observer(&self, observer: impl FnMut(&ActionBatch) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn enqueue(&self, batch: ActionBatch) {
        self.incoming.borrow_mut().push_back(batch);
        if self.notifying.replace(true) {
            return;
        }

        loop {
            let Some(mut batch) = self.incoming.borrow_mut().pop_front() else {
                break;
            };

            let mut observers = std::mem::take(&mut *self.observers.borrow_mut());
            for observer in observers.iter_mut() {
                observer(&batch);
            }
            {
                let mut slot = self.observers.borrow_mut();
                observers.append(&mut *slot);
                *slot = observers;
            }

            self.state
                .borrow_mut()
                .pending
                .extend(batch.actions.drain(..));
        }

        self.notifying.set(false);
        drain(&self.state);
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn is_idle(&self) -> bool {
        let state = self.state.borrow();
        state.running.is_none() && state.pending.is_empty()
    }

    pub fn running(&self) -> Option<String> {
        self.state.borrow().running.clone()
    }
}

/// Run pending actions until one is left waiting on its completion. A call
/// made while a drain is already in progress returns immediately.
fn drain(state: &Rc<RefCell<QueueState>>) {
    {
        let mut guard = state.borrow_mut();
        if guard.draining {
            return;
        }
        guard.draining = true;
    }

    loop {
        let next = {
            let mut guard = state.borrow_mut();
            if guard.running.is_some() {
                break;
            }
            let Some(next) = guard.pending.pop_front() else {
                break;
            };
            guard.running = Some(next.action_type.clone());
            next
        };

        tracing::trace!(action_type = %next.action_type, "executing action");
        let weak: Weak<RefCell<QueueState>> = Rc::downgrade(state);
        let completion = Completion::new(move || {
            let Some(state) = weak.upgrade() else { return };
            state.borrow_mut().running = None;
            drain(&state);
        });
        (next.closure)(completion);
    }

    state.borrow_mut().draining = false;
}
