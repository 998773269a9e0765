use crate::services::loading::{LoadingBinding, LoadingCoordinator};
use dioxus::prelude::*;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Coordinator shared through Dioxus context. Regions pass their children as
/// the template and their host element id as the attachment point.
pub type SharedCoordinator = Rc<dyn LoadingCoordinator<Template = Element, Attachment = String>>;

/// Makes `coordinator` available to every [`LoadingRegion`] below this scope
pub fn use_loading_coordinator_provider(
    coordinator: impl FnOnce() -> SharedCoordinator,
) -> SharedCoordinator {
    use_context_provider(coordinator)
}

pub fn use_loading_coordinator() -> SharedCoordinator {
    use_context::<SharedCoordinator>()
}

fn host_id(name: &str) -> String {
    format!("{}-region", name)
}

#[derive(Props, PartialEq, Clone)]
pub struct LoadingRegionProps {
    /// Registry name used to register/resolve loads on this region
    pub name: Option<String>,
    /// Falsy registers a pending load, truthy resolves all of them
    pub until: Option<Value>,
    /// "linear" | "circular"
    pub loading_type: Option<String>,
    /// "determinate" | "indeterminate"
    pub mode: Option<String>,
    /// "replace" | "overlay"
    pub strategy: Option<String>,
    /// "primary" | "accent" | "warn"
    pub color: Option<String>,
    pub children: Element,
}

/// Region whose content is masked by a named loading indicator.
///
/// The indicator is created on first render and removed when the region is
/// dropped. A changed `until` is forwarded on re-render, and dropping `until`
/// after it was bound counts as `null`. A region with neither `name` nor
/// `until` fails to render.
#[component]
pub fn LoadingRegion(props: LoadingRegionProps) -> Element {
    let coordinator = use_loading_coordinator();

    let binding = use_hook(|| {
        let mut binding = LoadingBinding::new(coordinator);
        if let Some(name) = &props.name {
            binding.set_name(name);
        }
        if let Some(loading_type) = &props.loading_type {
            binding.set_type(loading_type);
        }
        if let Some(mode) = &props.mode {
            binding.set_mode(mode);
        }
        if let Some(strategy) = &props.strategy {
            binding.set_strategy(strategy);
        }
        if let Some(color) = &props.color {
            binding.set_color(color);
        }
        if let Some(until) = &props.until {
            binding.set_until(until.clone());
        }

        let attachment = host_id(binding.name().unwrap_or_default());
        binding
            .on_attach(attachment, props.children.clone())
            .map(|_| Rc::new(RefCell::new(binding)))
    })?;

    use_drop({
        let binding = Rc::clone(&binding);
        move || binding.borrow_mut().on_detach()
    });

    binding.borrow_mut().update_until(props.until.clone());

    let name = binding.borrow().name().unwrap_or_default().to_string();

    rsx! {
        div {
            id: host_id(&name),
            class: "loading-region",
            "data-loading": "{name}",
            {props.children}
        }
    }
}
