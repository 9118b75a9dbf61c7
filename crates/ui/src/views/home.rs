use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

/// Stand-in for the host app's role pages: each link opens the quiz the way
/// a role page does, carrying the role in the query string.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            h2 { "Training quiz" }
            p { "Pick a role to start its tutorial quiz." }
            ul { class: "role-links",
                li {
                    Link { to: Route::Quiz { role_type: "Volunteer".to_string() }, "Volunteer" }
                }
                li {
                    Link {
                        to: Route::Quiz { role_type: "Volunteer%20Lead".to_string() },
                        "Volunteer Lead"
                    }
                }
                li {
                    Link {
                        to: Route::Quiz { role_type: "First Aid Officer".to_string() },
                        "First Aid Officer"
                    }
                }
            }
        }
    }
}
