use web_sys::Element;
use yew::{create_portal, prelude::*};

use crate::overlay::{ContainerGetter, OverlayContext};

/// Gap between the top edge of the wrapped content and the tooltip caret.
const VERTICAL_OFFSET_PX: f64 = 8.0;

/// Viewport-fixed anchor point the floating label hangs above.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Anchor {
    top: f64,
    left: f64,
}

fn anchor_for(top: f64, left: f64, width: f64) -> Anchor {
    Anchor {
        top: top - VERTICAL_OFFSET_PX,
        left: left + width / 2.0,
    }
}

fn resolve_portal_target(getter: &Option<ContainerGetter>, wrapper: &NodeRef) -> Option<Element> {
    if let Some(getter) = getter {
        return getter.get();
    }

    wrapper
        .cast::<Element>()
        .and_then(|el| el.owner_document())
        .and_then(|doc| doc.body())
        .or_else(|| gloo::utils::document().body())
        .map(Element::from)
}

#[derive(Properties, PartialEq)]
pub struct VisualOnlyTooltipProps {
    pub label: String,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content and shows a floating label near it on hover/focus.
///
/// The label is visual only: it carries `aria-hidden` and a presentation
/// role, and the wrapped content is never given an `aria-describedby` back to
/// it. Use this instead of a regular tooltip trigger when the content already
/// has an accessible name and a linked tooltip would be announced twice.
///
/// The label portals into the ambient [`OverlayContext`] container when one
/// is provided, otherwise into the document body, so it is never clipped by
/// scrolling or `overflow: hidden` ancestors.
#[function_component(VisualOnlyTooltip)]
pub fn visual_only_tooltip(props: &VisualOnlyTooltipProps) -> Html {
    let wrapper_ref = use_node_ref();
    let is_visible = use_state_eq(|| false);

    let get_container = use_context::<OverlayContext>().and_then(|ctx| ctx.get_container);
    let portal_target = {
        let wrapper_ref = wrapper_ref.clone();
        use_memo(
            move |getter| resolve_portal_target(getter, &wrapper_ref),
            get_container,
        )
    };

    // Recomputed from the live geometry on every render. No node yet means no
    // position, which suppresses the tooltip regardless of hover state.
    let anchor = wrapper_ref.cast::<Element>().map(|el| {
        let rect = el.get_bounding_client_rect();
        anchor_for(rect.top(), rect.left(), rect.width())
    });

    let onmouseenter = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| is_visible.set(true))
    };
    let onmouseleave = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| is_visible.set(false))
    };
    let onfocusin = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: FocusEvent| is_visible.set(true))
    };
    let onfocusout = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: FocusEvent| is_visible.set(false))
    };

    let floating = match (*is_visible, anchor, portal_target.as_ref()) {
        (true, Some(anchor), Some(target)) => {
            create_portal(floating_label(&props.label, anchor), target.clone())
        }
        _ => Html::default(),
    };

    html! {
        <>
            <div
                ref={wrapper_ref}
                {onmouseenter}
                {onmouseleave}
                {onfocusin}
                {onfocusout}
            >
                {props.children.clone()}
            </div>
            {floating}
        </>
    }
}

fn floating_label(label: &str, anchor: Anchor) -> Html {
    let styles = classes!(
        "fixed",
        "py-0.5",
        "px-2",
        "rounded",
        "bg-neutral-900",
        "text-neutral-100",
        "text-sm",
        "whitespace-nowrap",
        "pointer-events-none",
        "shadow-lg",
        "z-50",
    );
    // Border triangle pointing down at the anchored content.
    let caret = classes!(
        "absolute",
        "top-full",
        "left-1/2",
        "-translate-x-1/2",
        "border-4",
        "border-transparent",
        "border-t-neutral-900",
    );
    let placement = format!(
        "top: {}px; left: {}px; transform: translate(-50%, -100%);",
        anchor.top, anchor.left
    );

    html! {
        <div aria-hidden="true" role="presentation" class={styles} style={placement}>
            {label.to_owned()}
            <div class={caret}></div>
        </div>
    }
}
