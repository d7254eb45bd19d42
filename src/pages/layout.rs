use maud::html;
use maud::Markup;
use maud::PreEscaped;
use maud::DOCTYPE;

const SITE_NAME: &str = "Space Exploration Database";

const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("/missions", "🚀", "Missions"),
    ("/astronauts", "👨‍🚀", "Astronauts"),
    ("/celestial-bodies", "🪐", "Celestial Bodies"),
];

const STYLES: &str = r#"
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: #0b1026; color: #e2e8f0; }
a { color: inherit; text-decoration: none; }
main { min-height: 70vh; max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
.site-header, .site-footer { background: rgba(15, 23, 42, 0.9); padding: 1rem 1.5rem; }
.site-header nav a { margin-left: 2rem; font-weight: 500; }
.brand { color: #fbbf24; font-weight: 700; font-size: 1.25rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 2rem; }
.cosmic-card { display: block; background: rgba(30, 41, 59, 0.6); border: 1px solid #334155; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 2rem; }
.cosmic-card img { width: 100%; height: auto; border-radius: 0.5rem; object-fit: cover; }
.cosmic-badge { display: inline-block; padding: 0.2rem 0.6rem; border-radius: 9999px; font-size: 0.75rem; background: #334155; }
.status-planned { background: #1e3a8a; } .status-active { background: #166534; }
.status-completed { background: #4c1d95; } .status-cancelled { background: #7f1d1d; }
.badge-active { background: #dcfce7; color: #166534; }
.stat-label { color: #94a3b8; font-weight: 500; margin-right: 0.5rem; }
.highlight { color: #fbbf24; }
.empty-state, .hero, .stats { text-align: center; }
.bullet .marker { color: #fbbf24; margin-right: 0.75rem; }
.cosmic-button { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.5rem; background: #4338ca; font-weight: 600; }
"#;

pub fn page(title: Option<&str>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if let Some(title) = title {
                        (title) " | "
                    }
                    (SITE_NAME)
                }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (header())
                main { (body) }
                (footer())
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { "🚀 Space Database" }
            nav {
                @for (href, _, label) in NAV_LINKS {
                    a href=(href) { (label) }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.site-footer {
            div.brand { "🚀 Space Database" }
            p {
                "Exploring the cosmos through comprehensive data on space missions, astronauts, and celestial bodies."
            }
            h3 { "Explore" }
            ul {
                @for (href, icon, label) in NAV_LINKS {
                    li { a href=(href) { (icon) " " (label) } }
                }
            }
            p { "© 2024 " (SITE_NAME) ". All rights reserved." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_links_every_section() {
        let out = page(Some("Missions"), html! { p { "body" } }).into_string();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Missions | Space Exploration Database</title>"));
        for (href, _, _) in NAV_LINKS {
            assert!(out.contains(&format!(r#"href="{}""#, href)));
        }
    }

    #[test]
    fn untitled_page_uses_site_name() {
        let out = page(None, html! {}).into_string();
        assert!(out.contains("<title>Space Exploration Database</title>"));
    }
}
