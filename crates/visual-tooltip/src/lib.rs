//! Visual-only tooltips for Yew applications.
//!
//! [`VisualOnlyTooltip`] shows a floating label near its wrapped content while
//! the content is hovered or keyboard focused. The label is purely
//! presentational: it is hidden from assistive technology and never linked to
//! the wrapped content via `aria-describedby`, so screen readers that already
//! announce an accessible name on the content do not announce it twice.
//!
//! The label renders through a portal so it escapes ancestors with
//! `overflow: hidden`. By default it portals into `document.body`; wrap a
//! subtree in [`OverlayProvider`] to direct it into a dedicated overlay root.

pub mod overlay;
pub mod tooltip;

pub use overlay::{ContainerGetter, OverlayContext, OverlayProvider};
pub use tooltip::VisualOnlyTooltip;
