use visual_tooltip::{ContainerGetter, OverlayProvider, VisualOnlyTooltip};
use yew::prelude::*;

const OVERLAY_ROOT_ID: &str = "overlay-root";

#[function_component(App)]
fn app() -> Html {
    // Held across renders so consumers can memoize on the getter's identity.
    let get_container = use_memo(
        |_| {
            ContainerGetter::new(|| {
                gloo::utils::document()
                    .get_element_by_id(OVERLAY_ROOT_ID)
                    .or_else(|| {
                        log::warn!("#{OVERLAY_ROOT_ID} missing, overlay falls back to <body>");
                        None
                    })
            })
        },
        (),
    );

    html! {
        <div class="flex flex-col gap-8 p-8 min-h-screen bg-stone-800 text-white">
            <div class="flex flex-row gap-4">
                <VisualOnlyTooltip label="Save your changes">
                    <button class="border border-neutral-600 rounded-lg p-2 text-sm hover:bg-neutral-600">
                        {"Save"}
                    </button>
                </VisualOnlyTooltip>
                <VisualOnlyTooltip label="Discard your changes">
                    <button class="border border-neutral-600 rounded-lg p-2 text-sm hover:bg-neutral-600">
                        {"Discard"}
                    </button>
                </VisualOnlyTooltip>
            </div>
            // Tooltips inside this subtree land in the dedicated overlay root
            // instead of <body>.
            <OverlayProvider get_container={(*get_container).clone()}>
                <div class="overflow-hidden rounded border border-neutral-600 p-4">
                    <VisualOnlyTooltip label="Escapes the clipped parent">
                        <button class="border border-neutral-600 rounded-lg p-2 text-sm hover:bg-neutral-600">
                            {"Clipped"}
                        </button>
                    </VisualOnlyTooltip>
                </div>
            </OverlayProvider>
            <div id={OVERLAY_ROOT_ID}></div>
        </div>
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
