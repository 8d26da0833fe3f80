use std::rc::Rc;

use dioxus::prelude::*;
use magicwindow_io::{Dropzone, PreviewStep};
use magicwindow_rules::SelectedFile;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Holds the accepted file and swaps the dropzone for the preview step
/// once one arrives. The flow is one-shot: there is no way back to the
/// dropzone within a session.
fn app() -> Element {
    let mut file = use_signal(|| Option::<Rc<SelectedFile>>::None);

    let on_file_accepted = move |accepted: SelectedFile| {
        file.set(Some(Rc::new(accepted)));
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            main { class: "shell",
                h1 { class: "title", "Magic-Window Ad Builder" }
                p { class: "tagline", "ADA-safe Poster in 3 Clicks" }

                div { class: "step",
                    if let Some(selected) = file() {
                        PreviewStep { file: selected }
                    } else {
                        Dropzone { on_file_accepted: on_file_accepted }
                    }
                }
            }
        }
    }
}
