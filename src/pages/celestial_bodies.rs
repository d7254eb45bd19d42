use crate::domain::celestial_body_model::CelestialBody;
use crate::domain::content_model::ImageSize;
use crate::pages::format_date;
use crate::pages::image;
use crate::pages::layout::page;
use crate::pages::text::render_text;
use maud::html;
use maud::Markup;

pub fn celestial_bodies_page(bodies: &[CelestialBody]) -> Markup {
    page(
        Some("Celestial Bodies"),
        html! {
            div.hero {
                h1 { "🪐 Celestial Bodies" }
                p { "Explore the wonders of our universe - from nearby planets and moons to distant galaxies and nebulae." }
            }
            @if bodies.is_empty() {
                div.empty-state {
                    div { "🌌" }
                    h2 { "No celestial bodies found" }
                    p { "The cosmic database is currently empty. Check back soon as we populate our celestial catalog!" }
                }
            } @else {
                div.grid {
                    @for body in bodies {
                        (celestial_body_card(body))
                    }
                }
            }
        },
    )
}

pub fn celestial_body_card(body: &CelestialBody) -> Markup {
    let meta = &body.metadata;
    html! {
        a.cosmic-card.celestial-body-card href={ "/celestial-bodies/" (body.slug) } {
            @if let Some(img) = &meta.image {
                (image(img, ImageSize::CELESTIAL_BODY_CARD, body.display_name(), "card-image"))
            }
            h3 { (body.display_name()) }
            @if let Some(body_type) = &meta.body_type {
                span.cosmic-badge.body-type { (body_type.label) }
            }
            @if let Some(distance) = &meta.distance_from_earth {
                p.distance { strong { "Distance:" } " " (distance) }
            }
            @if let Some(diameter) = &meta.diameter {
                p.diameter { strong { "Diameter:" } " " (diameter) }
            }
            div.learn-more { "Learn more →" }
        }
    }
}

pub fn celestial_body_page(body: &CelestialBody) -> Markup {
    let meta = &body.metadata;
    page(
        Some(body.display_name()),
        html! {
            a.back-link href="/celestial-bodies" { "← Back to Celestial Bodies" }

            div.hero {
                h1 { (body.display_name()) }
                @if let Some(body_type) = &meta.body_type {
                    span.cosmic-badge.body-type { (body_type.label) " 🌌" }
                }
            }

            @if let Some(img) = &meta.image {
                (image(img, ImageSize::CELESTIAL_BODY_HERO, body.display_name(), "hero-image"))
            }

            div.grid.key-information {
                @if let Some(distance) = &meta.distance_from_earth {
                    div.cosmic-card.distance { h3 { "Distance from Earth" } p { (distance) } }
                }
                @if let Some(diameter) = &meta.diameter {
                    div.cosmic-card.diameter { h3 { "Diameter" } p { (diameter) } }
                }
                @if let Some(discovered) = &meta.discovery_date {
                    div.cosmic-card.discovery-date { h3 { "Discovery Date" } p { (format_date(discovered)) } }
                }
            }

            @if let Some(description) = &meta.description {
                section.cosmic-card.description {
                    h2 { "Description" }
                    (render_text(description))
                }
            }

            @if let Some(facts) = &meta.key_facts {
                section.cosmic-card.key-facts {
                    h2 { "Key Facts" }
                    (render_text(facts))
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_json::Value;

    fn body(metadata: Value) -> CelestialBody {
        serde_json::from_value(json!({
            "id": "c1",
            "slug": "mars",
            "title": "Mars",
            "metadata": metadata
        }))
        .unwrap()
    }

    #[test]
    fn detail_image_uses_hero_transform() {
        let out = celestial_body_page(&body(json!({
            "image": {"url": "https://raw/img.jpg", "imgix_url": "https://x/img.jpg"}
        })))
        .into_string();

        assert!(out.contains(r#"src="https://x/img.jpg?w=1200&amp;h=600&amp;fit=crop&amp;auto=format,compress""#));
    }

    #[test]
    fn card_shows_type_label_and_falls_back_to_title() {
        let out = celestial_body_card(&body(json!({"type": "Planet", "diameter": "6,779 km"})))
            .into_string();

        assert!(out.contains("<h3>Mars</h3>"));
        assert!(out.contains(">Planet<"));
        assert!(out.contains("6,779 km"));
        assert!(!out.contains("Distance:"));
    }

    #[test]
    fn detail_sections_follow_fixed_order() {
        let out = celestial_body_page(&body(json!({
            "name": "The Red Planet",
            "discovery_date": "1610-01-01",
            "description": "Fourth planet.",
            "key_facts": "• Two moons\n• Olympus Mons"
        })))
        .into_string();

        assert!(out.contains("<title>The Red Planet | Space Exploration Database</title>"));
        assert!(out.contains("January 1, 1610"));
        let stats = out.find("Discovery Date").unwrap();
        let description = out.find("Fourth planet.").unwrap();
        let facts = out.find("Olympus Mons").unwrap();
        assert!(stats < description && description < facts);
        assert!(!out.contains("Distance from Earth"));
    }

    #[test]
    fn empty_listing_renders_empty_state() {
        assert!(celestial_bodies_page(&[])
            .into_string()
            .contains("No celestial bodies found"));
    }
}
