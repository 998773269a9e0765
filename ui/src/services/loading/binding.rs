//! Binding between a host region and a named loading indicator
//!
//! A [`LoadingBinding`] collects the declarative configuration of one region,
//! asks the coordinator to create exactly one indicator when the host attaches
//! it, and removes that indicator again when the host detaches it. The
//! until-condition drives `register`/`resolve_all` directly whenever it is set.

use super::context::{is_truthy, LoadingContext, SharedContext};
use super::coordinator::{IndicatorHandle, LoadingCoordinator};
use super::errors::{LoadingError, LoadingResult};
use super::options::{LoadingColor, LoadingConfig, LoadingMode, LoadingStrategy, LoadingType};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

/// Prefix of names generated for regions driven only by an until-condition
pub const GENERATED_NAME_PREFIX: &str = "loading-until-";

/// Sequence for generated names. Never reset, ids are not reused.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_generated_name() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}{}", GENERATED_NAME_PREFIX, id)
}

/// Lifecycle of a binding. There is no way back to `Unconfigured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unconfigured,
    /// A name is known
    Configured,
    /// The coordinator created the indicator
    Attached,
    TornDown,
}

pub struct LoadingBinding<C: LoadingCoordinator> {
    coordinator: C,
    name: Option<String>,
    loading_type: LoadingType,
    mode: LoadingMode,
    strategy: LoadingStrategy,
    color: LoadingColor,
    context: SharedContext,
    handle: Option<IndicatorHandle>,
    state: BindingState,
}

impl<C: LoadingCoordinator> LoadingBinding<C> {
    pub fn new(coordinator: C) -> Self {
        Self {
            coordinator,
            name: None,
            loading_type: LoadingType::default(),
            mode: LoadingMode::default(),
            strategy: LoadingStrategy::default(),
            color: LoadingColor::default(),
            context: Rc::new(RefCell::new(LoadingContext::default())),
            handle: None,
            state: BindingState::Unconfigured,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn handle(&self) -> Option<&IndicatorHandle> {
        self.handle.as_ref()
    }

    pub fn context(&self) -> SharedContext {
        Rc::clone(&self.context)
    }

    /// Effective configuration as it would be handed to the coordinator
    pub fn config(&self) -> LoadingConfig {
        LoadingConfig {
            name: self.name.clone().unwrap_or_default(),
            loading_type: self.loading_type,
            mode: self.mode,
            strategy: self.strategy,
            color: self.color,
        }
    }

    /// First non-empty name wins, later names are ignored.
    pub fn set_name(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(current) = &self.name {
            if current != name {
                debug!("Ignoring rename of loading region {} to {}", current, name);
            }
            return;
        }
        self.assign_name(name.to_string());
    }

    fn assign_name(&mut self, name: String) {
        self.name = Some(name);
        if self.state == BindingState::Unconfigured {
            self.state = BindingState::Configured;
        }
    }

    /// Falsy values register a pending load, truthy values resolve all of them.
    pub fn set_until(&mut self, until: Value) {
        if self.name.is_none() {
            let generated = next_generated_name();
            debug!("Generated loading region name {}", generated);
            self.assign_name(generated);
        }
        let name = self.name.clone().unwrap_or_default();

        let pending = !is_truthy(&until);
        self.context.borrow_mut().set_until(until);

        if pending {
            debug!("Registering pending load for {}", name);
            self.coordinator.register(&name);
        } else {
            debug!("Resolving pending loads for {}", name);
            self.coordinator.resolve_all(&name);
        }
    }

    /// Forwards an until-condition only when it differs from the current one.
    ///
    /// An unbound condition (`None`) after a bound one counts as `null`.
    pub fn update_until(&mut self, until: Option<Value>) {
        let current = self.context.borrow().until().cloned();
        let next = match (until, &current) {
            (Some(value), _) => value,
            (None, Some(_)) => Value::Null,
            (None, None) => return,
        };
        if current.as_ref() != Some(&next) {
            self.set_until(next);
        }
    }

    pub fn set_type(&mut self, value: &str) {
        self.loading_type = LoadingType::from(value);
    }

    pub fn set_mode(&mut self, value: &str) {
        self.mode = LoadingMode::from(value);
    }

    pub fn set_strategy(&mut self, value: &str) {
        self.strategy = LoadingStrategy::from(value);
    }

    pub fn set_color(&mut self, value: &str) {
        self.color = LoadingColor::from(value);
    }

    /// Creates the indicator for this region. Must run after every setter.
    ///
    /// Hosts may call this twice in a row; only the first call creates an
    /// indicator. A torn down binding never creates another one.
    #[instrument(skip(self, attachment, template), fields(name = ?self.name))]
    pub fn on_attach(&mut self, attachment: C::Attachment, template: C::Template) -> LoadingResult<()> {
        let Some(name) = self.name.clone() else {
            warn!("Loading region attached without a name");
            return Err(LoadingError::NameRequired);
        };

        if self.state == BindingState::TornDown {
            warn!("Loading region {} attached after teardown, skipping", name);
            return Ok(());
        }
        if self.handle.is_some() {
            debug!("Indicator for {} already created, skipping", name);
            return Ok(());
        }

        let handle = self.coordinator.create_component(
            self.config(),
            attachment,
            template,
            Rc::clone(&self.context),
        );
        info!("Created loading indicator {}", handle.name);
        self.handle = Some(handle);
        self.state = BindingState::Attached;
        Ok(())
    }

    /// Removes the indicator by name and drops the handle.
    #[instrument(skip(self), fields(name = ?self.name))]
    pub fn on_detach(&mut self) {
        let name = self.name.as_deref().unwrap_or_default();
        self.coordinator.remove_component(name);
        self.handle = None;
        self.state = BindingState::TornDown;
        info!("Removed loading indicator {}", name);
    }
}
