//! Coordinator double that records every call in order

use super::context::SharedContext;
use super::coordinator::{IndicatorHandle, LoadingCoordinator};
use super::options::LoadingConfig;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call<T = &'static str, A = &'static str> {
    Register(String),
    ResolveAll(String),
    CreateComponent {
        config: LoadingConfig,
        attachment: A,
        template: T,
    },
    RemoveComponent(String),
}

struct Recorded<T, A> {
    calls: Vec<Call<T, A>>,
    last_context: Option<SharedContext>,
}

/// Clones share the same call log
pub struct RecordingCoordinator<T = &'static str, A = &'static str> {
    inner: Rc<RefCell<Recorded<T, A>>>,
}

impl<T, A> Default for RecordingCoordinator<T, A> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Recorded {
                calls: Vec::new(),
                last_context: None,
            })),
        }
    }
}

impl<T, A> Clone for RecordingCoordinator<T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, A> PartialEq for RecordingCoordinator<T, A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone, A: Clone> RecordingCoordinator<T, A> {
    pub fn calls(&self) -> Vec<Call<T, A>> {
        self.inner.borrow().calls.clone()
    }

    pub fn last_context(&self) -> Option<SharedContext> {
        self.inner.borrow().last_context.clone()
    }
}

impl<T, A> LoadingCoordinator for RecordingCoordinator<T, A> {
    type Template = T;
    type Attachment = A;

    fn register(&self, name: &str) {
        self.inner.borrow_mut().calls.push(Call::Register(name.to_string()));
    }

    fn resolve_all(&self, name: &str) {
        self.inner.borrow_mut().calls.push(Call::ResolveAll(name.to_string()));
    }

    fn create_component(
        &self,
        config: LoadingConfig,
        attachment: A,
        template: T,
        context: SharedContext,
    ) -> IndicatorHandle {
        let handle = IndicatorHandle::new(config.name.clone());
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(Call::CreateComponent {
            config,
            attachment,
            template,
        });
        inner.last_context = Some(context);
        handle
    }

    fn remove_component(&self, name: &str) {
        self.inner
            .borrow_mut()
            .calls
            .push(Call::RemoveComponent(name.to_string()));
    }
}
