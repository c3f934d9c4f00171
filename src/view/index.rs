use maud::{Markup, html};

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(crate::HTMX_PATH) {}
        }
        body {
            h1 { "Sports Leagues" }
            p class="subtitle" { "Explore sports leagues from around the world" }
            div id="leagues" hx-get="leagues" hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
            div id="badge-modal" {}
        }
    }
}
