//! Image upload dropzone with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use magicwindow_rules::upload::{ACCEPTED_MIME_TYPES, SelectedFile, validate_upload};

/// Props for the [`Dropzone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropzoneProps {
    /// Called with the accepted file after validation passes.
    /// Never called for a rejected file.
    on_file_accepted: EventHandler<SelectedFile>,
}

/// A drag-and-drop zone with a file picker.
///
/// Accepts a single JPEG, PNG, WebP, or GIF image of at most 10 MiB.
/// The file's *declared* media type and byte size are checked before
/// any bytes are read; rejections show an inline message and leave the
/// zone interactive. If multiple files are dropped, only the first is
/// considered.
#[component]
pub fn Dropzone(props: DropzoneProps) -> Element {
    let mut drag_active = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Validate and forward the first file from a list. Shared by the
    // file-picker and drag-and-drop paths so the gating logic lives in
    // one place.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let content_type = file.content_type().unwrap_or_default();
        if let Err(rejection) = validate_upload(&content_type, file.size()) {
            error.set(Some(rejection.to_string()));
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                error.set(None);
                props.on_file_accepted.call(SelectedFile::new(
                    file.name(),
                    content_type,
                    bytes.to_vec(),
                ));
            }
            Err(e) => {
                error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        drag_active.set(false);
        process_files(evt.files()).await;
    };

    let accept = ACCEPTED_MIME_TYPES.join(",");
    let zone_class = if drag_active() {
        "dropzone active"
    } else {
        "dropzone"
    };

    rsx! {
        div { class: "dropzone-wrap",
            label {
                class: "{zone_class}",
                tabindex: "0",
                aria_label: "Upload image",
                ondragover: move |evt| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |evt| {
                    evt.prevent_default();
                    drag_active.set(false);
                },
                ondrop: handle_drop,

                input {
                    r#type: "file",
                    accept: "{accept}",
                    class: "hidden-input",
                    onchange: handle_files,
                }

                span { class: "dropzone-hint", "Drag & drop an image here" }
                span { class: "dropzone-sub", "or click to select (max 10MB)" }
                span { class: "dropzone-sub", "JPG, PNG, WEBP, GIF" }
            }

            if let Some(ref err) = error() {
                p { class: "dropzone-error", "{err}" }
            }
        }
    }
}
