//! Preview step: focal-point placement and ad copy entry.
//!
//! Renders the accepted image in a fixed 8.5:11 poster frame, lets the
//! user drag a focal-point marker over it, and collects headline/CTA
//! text with live word-count validation.

use std::rc::Rc;

use dioxus::html::MountedData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdStar;
use magicwindow_rules::copy::{AdCopy, CTA_MAX_CHARS, HEADLINE_MAX_CHARS};
use magicwindow_rules::focal::{DragState, FocalPoint};
use magicwindow_rules::upload::SelectedFile;

use crate::object_url;

/// Rendered diameter of the focal-point marker, in CSS pixels.
const MARKER_SIZE_PX: f64 = 40.0;

/// Props for the [`PreviewStep`] component.
#[derive(Props, Clone)]
pub struct PreviewStepProps {
    /// The accepted image. Wrapped in `Rc` so re-renders compare by
    /// pointer instead of hashing megabytes of file data.
    file: Rc<SelectedFile>,
}

impl PartialEq for PreviewStepProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.file, &other.file)
    }
}

/// Focal-point placement and ad copy entry for one accepted image.
///
/// The object URL for the image is acquired once when the component
/// mounts and revoked when it is dropped, so the session never leaks
/// blob references. The focal marker is purely presentational — it
/// ignores pointer events; the image underneath owns the gesture.
#[component]
pub fn PreviewStep(props: PreviewStepProps) -> Element {
    let mut focal = use_signal(FocalPoint::default);
    let mut drag = use_signal(DragState::default);
    let mut headline = use_signal(String::new);
    let mut cta = use_signal(String::new);
    let mut image_el = use_signal(|| Option::<Rc<MountedData>>::None);

    // Acquire the object URL once per mount. Creation failure has no
    // UI surface beyond the missing image, so log and degrade.
    let image_url: Rc<Option<String>> = use_hook(|| {
        let url = object_url::create_file_url(props.file.bytes(), props.file.content_type());
        Rc::new(match url {
            Ok(url) => Some(url),
            Err(e) => {
                web_sys::console::warn_1(&format!("preview URL creation failed: {e}").into());
                None
            }
        })
    });
    {
        let image_url = Rc::clone(&image_url);
        use_drop(move || {
            if let Some(ref url) = *image_url {
                object_url::revoke_file_url(url);
            }
        });
    }

    // Map a pointer event to a focal point via the image's rendered
    // bounding rect. Shared by the press and move handlers.
    let relocate = move |evt: PointerEvent| async move {
        let Some(el) = image_el() else {
            return;
        };
        let Ok(rect) = el.get_client_rect().await else {
            return;
        };
        let pointer = evt.client_coordinates();
        if let Some(point) = FocalPoint::from_pointer(
            pointer.x - rect.origin.x,
            pointer.y - rect.origin.y,
            rect.size.width,
            rect.size.height,
        ) {
            focal.set(point);
        }
    };

    let ad_copy = AdCopy {
        headline: headline(),
        cta: cta(),
    };
    let headline_status = ad_copy.headline_status();
    let cta_status = ad_copy.cta_status();
    let spine_satisfied = ad_copy.story_spine_satisfied();

    let marker_style = marker_offset_style(focal());

    rsx! {
        div { class: "preview-step",
            {render_star_row(spine_satisfied)}

            div { class: "preview-frame",
                if let Some(ref url) = *image_url {
                    img {
                        class: "preview-image",
                        src: "{url}",
                        alt: "Preview",
                        draggable: false,
                        onmounted: move |evt| image_el.set(Some(evt.data())),
                        onpointerdown: move |evt: PointerEvent| async move {
                            evt.prevent_default();
                            drag.set(drag().press());
                            relocate(evt).await;
                        },
                        onpointermove: move |evt: PointerEvent| async move {
                            if drag().is_dragging() {
                                relocate(evt).await;
                            }
                        },
                        onpointerup: move |_| drag.set(drag().release()),
                        onpointerleave: move |_| drag.set(drag().release()),
                    }
                } else {
                    p { class: "preview-missing", "Preview unavailable" }
                }

                // Focal-point ring; never intercepts the gesture.
                div { class: "focal-marker", style: "{marker_style}",
                    div { class: "focal-ring" }
                }
            }

            div { class: "copy-fields",
                input {
                    r#type: "text",
                    class: "copy-input",
                    placeholder: "Headline (≤ 9 words)",
                    value: "{headline}",
                    maxlength: "{HEADLINE_MAX_CHARS}",
                    oninput: move |evt| headline.set(evt.value()),
                }
                input {
                    r#type: "text",
                    class: "copy-input",
                    placeholder: "Call to Action (≤ 3 words)",
                    value: "{cta}",
                    maxlength: "{CTA_MAX_CHARS}",
                    oninput: move |evt| cta.set(evt.value()),
                }

                div { class: "copy-feedback",
                    if headline_status.is_invalid() {
                        span { class: "field-error", "Headline must be 1-9 words. " }
                    }
                    if cta_status.is_invalid() {
                        span { class: "field-error", "CTA must be 1-3 words." }
                    }
                    if spine_satisfied {
                        span { class: "field-success", "Story Spine rule satisfied! ⭐" }
                    }
                }
            }

            // Palette analysis is out of scope; the slot it would fill
            // stays visible.
            div { class: "palette-placeholder",
                "Palette suggestions will appear here if contrast fails"
            }
        }
    }
}

/// Row of five star glyphs. The first star lights up exactly when the
/// Story Spine rule is satisfied; the rest are always inactive.
fn render_star_row(spine_satisfied: bool) -> Element {
    let first_class = if spine_satisfied { "star active" } else { "star" };

    rsx! {
        div { class: "star-row",
            Icon { icon: LdStar, width: 22, height: 22, class: "{first_class}" }
            Icon { icon: LdStar, width: 22, height: 22, class: "star" }
            Icon { icon: LdStar, width: 22, height: 22, class: "star" }
            Icon { icon: LdStar, width: 22, height: 22, class: "star" }
            Icon { icon: LdStar, width: 22, height: 22, class: "star" }
        }
    }
}

/// Inline style positioning the marker so its center sits on the focal
/// point. Percent offsets resolve against the frame; the pixel shift
/// re-centers the fixed-size ring.
fn marker_offset_style(focal: FocalPoint) -> String {
    let half = MARKER_SIZE_PX / 2.0;
    format!(
        "left: calc({}% - {half}px); top: calc({}% - {half}px); \
         width: {MARKER_SIZE_PX}px; height: {MARKER_SIZE_PX}px;",
        focal.x, focal.y
    )
}
