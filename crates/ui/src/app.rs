use dioxus::prelude::*;
use dioxus_router::Router;

use crate::notify::Notices;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // One notice queue for the whole app; views push into it from actions.
    use_context_provider(Notices::new);

    rsx! {
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css",
        }

        // Stable OS/window title. Views render their own headings.
        document::Title { "Flash Learn" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            Router::<Route> {}
        }
    }
}
