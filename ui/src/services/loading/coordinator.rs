//! Contract with the service that owns named loading indicators

use super::context::SharedContext;
use super::options::LoadingConfig;
use std::rc::Rc;

/// Reference to an indicator created by a coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorHandle {
    pub name: String,
}

impl IndicatorHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Tracks pending loads by name and manages the indicators attached to
/// host regions.
///
/// All calls are synchronous and are expected to tolerate redundant
/// `register`/`resolve_all` calls for the same name.
pub trait LoadingCoordinator {
    /// Content rendered by the indicator depending on its strategy
    type Template;
    /// Where the indicator is attached in the host tree
    type Attachment;

    /// Marks one more pending load for `name`
    fn register(&self, name: &str);

    /// Clears every pending load for `name`
    fn resolve_all(&self, name: &str);

    fn create_component(
        &self,
        config: LoadingConfig,
        attachment: Self::Attachment,
        template: Self::Template,
        context: SharedContext,
    ) -> IndicatorHandle;

    fn remove_component(&self, name: &str);
}

impl<T: LoadingCoordinator + ?Sized> LoadingCoordinator for Rc<T> {
    type Template = T::Template;
    type Attachment = T::Attachment;

    fn register(&self, name: &str) {
        (**self).register(name)
    }

    fn resolve_all(&self, name: &str) {
        (**self).resolve_all(name)
    }

    fn create_component(
        &self,
        config: LoadingConfig,
        attachment: Self::Attachment,
        template: Self::Template,
        context: SharedContext,
    ) -> IndicatorHandle {
        (**self).create_component(config, attachment, template, context)
    }

    fn remove_component(&self, name: &str) {
        (**self).remove_component(name)
    }
}
