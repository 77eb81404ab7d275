use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

/// Handle to a function resolving the element overlay content should portal
/// into. Cloning is cheap (shared `Rc`).
#[derive(Clone)]
pub struct ContainerGetter(Rc<dyn Fn() -> Option<Element>>);

impl ContainerGetter {
    pub fn new<F>(getter: F) -> Self
    where
        F: Fn() -> Option<Element> + 'static,
    {
        Self(Rc::new(getter))
    }

    /// Resolve the current overlay container, if one exists.
    pub fn get(&self) -> Option<Element> {
        (self.0)()
    }
}

// Compared by identity: consumers memoize portal-target resolution on the
// getter itself, so a provider should hold onto one instance rather than
// rebuilding it every render. A fresh instance per render still renders
// correctly, it just re-resolves the container each time.
impl PartialEq for ContainerGetter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ContainerGetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContainerGetter")
    }
}

/// Ambient overlay configuration. When no provider is present (or the getter
/// is `None`), portaled content falls back to the document body.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct OverlayContext {
    pub get_container: Option<ContainerGetter>,
}

#[derive(Properties, PartialEq)]
pub struct OverlayProviderProps {
    pub get_container: ContainerGetter,
    #[prop_or_default]
    pub children: Children,
}

/// Scopes an overlay root to a subtree. Anything inside that renders floating
/// content will portal into the element returned by `get_container`.
#[function_component(OverlayProvider)]
pub fn overlay_provider(props: &OverlayProviderProps) -> Html {
    let context = OverlayContext {
        get_container: Some(props.get_container.clone()),
    };

    html! {
        <ContextProvider<OverlayContext> {context}>
            {props.children.clone()}
        </ContextProvider<OverlayContext>>
    }
}
