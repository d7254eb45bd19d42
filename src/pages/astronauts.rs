use crate::domain::astronaut_model::Astronaut;
use crate::domain::content_model::ImageSize;
use crate::pages::format_date;
use crate::pages::image;
use crate::pages::layout::page;
use crate::pages::text::render_text;
use crate::pages::year_of;
use maud::html;
use maud::Markup;

pub fn astronauts_page(astronauts: &[Astronaut]) -> Markup {
    if astronauts.is_empty() {
        return page(
            Some("Astronauts"),
            html! {
                div.empty-state {
                    div { "👨‍🚀" }
                    h1 { "No Astronauts Found" }
                    p { "We're currently gathering astronaut profiles. Check back soon for inspiring stories of space pioneers!" }
                    a.cosmic-button href="/" { "Return Home" }
                }
            },
        );
    }

    page(
        Some("Astronauts"),
        html! {
            div.hero {
                h1 { "Space " span.highlight { "Pioneers" } }
                p { "Meet the extraordinary men and women who have pushed the boundaries of human exploration, venturing beyond Earth's atmosphere to advance our understanding of the cosmos." }
            }
            div.grid {
                @for astronaut in astronauts {
                    (astronaut_card(astronaut))
                }
            }
        },
    )
}

pub fn astronaut_card(astronaut: &Astronaut) -> Markup {
    let meta = &astronaut.metadata;
    html! {
        a.cosmic-card.astronaut-card href={ "/astronauts/" (astronaut.slug) } {
            @if let Some(portrait) = &meta.portrait {
                (image(portrait, ImageSize::ASTRONAUT_CARD, &astronaut.title, "card-image"))
            }
            div.card-heading {
                h2 { (astronaut.title) }
                @if meta.still_active {
                    span.cosmic-badge.badge-active { "Active" }
                }
            }
            @if let Some(full_name) = astronaut.distinct_full_name() {
                p.full-name { (full_name) }
            }
            @if let Some(nationality) = &meta.nationality {
                p.nationality { "🌍 " (nationality) }
            }
            @if let Some(agency) = &meta.space_agency {
                p.space-agency { "🚀 " (agency) }
            }
            @if let Some(flights) = astronaut.spaceflights() {
                div.spaceflights { span.stat-label { "Spaceflights:" } span.highlight { (flights) } }
            }
            @if let Some(time) = &meta.total_time_in_space {
                div.time-in-space { span.stat-label { "Time in Space:" } span.highlight { (time) } }
            }
            @if let Some(year) = meta.birth_date.as_deref().and_then(year_of) {
                p.birth-year { "🎂 Born: " (year) }
            }
        }
    }
}

pub fn astronaut_page(astronaut: &Astronaut) -> Markup {
    let meta = &astronaut.metadata;
    page(
        Some(astronaut.title.as_str()),
        html! {
            a.back-link href="/astronauts" { "← Back to Astronauts" }

            div.cosmic-card.astronaut-header {
                @if let Some(portrait) = &meta.portrait {
                    (image(portrait, ImageSize::ASTRONAUT_PORTRAIT, &astronaut.title, "portrait"))
                }
                div.card-heading {
                    h1 { (astronaut.title) }
                    @if let Some(full_name) = astronaut.distinct_full_name() {
                        p.full-name { (full_name) }
                    }
                    @if meta.still_active {
                        span.cosmic-badge.badge-active { "Currently Active" }
                    }
                }
                div.stats {
                    @if let Some(nationality) = &meta.nationality {
                        div.nationality { span.stat-label { "Nationality:" } span { (nationality) } }
                    }
                    @if let Some(agency) = &meta.space_agency {
                        div.space-agency { span.stat-label { "Space Agency:" } span { (agency) } }
                    }
                    @if let Some(birth_date) = &meta.birth_date {
                        div.birth-date { span.stat-label { "Birth Date:" } span { (format_date(birth_date)) } }
                    }
                    @if let Some(flights) = astronaut.spaceflights() {
                        div.spaceflights { span.stat-label { "Spaceflights:" } span.highlight { (flights) } }
                    }
                    @if let Some(time) = &meta.total_time_in_space {
                        div.time-in-space { span.stat-label { "Total Time in Space:" } span.highlight { (time) } }
                    }
                }
            }

            @if let Some(biography) = &meta.biography {
                section.cosmic-card.biography {
                    h2.highlight { "Biography" }
                    (render_text(biography))
                }
            }

            @if let Some(achievements) = &meta.major_achievements {
                section.cosmic-card.achievements {
                    h2.highlight { "Major Achievements" }
                    (render_text(achievements))
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

    fn astronaut(metadata: Value) -> Astronaut {
        serde_json::from_value(json!({
            "id": "a1",
            "slug": "sally-ride",
            "title": "Sally Ride",
            "metadata": metadata
        }))
        .unwrap()
    }

    #[test]
    fn card_shows_only_present_fields() {
        let out = astronaut_card(&astronaut(json!({
            "nationality": "American",
            "birth_date": "1951-05-26",
            "number_of_spaceflights": 0
        })))
        .into_string();

        assert!(out.contains("🌍 American"));
        assert!(out.contains("🎂 Born: 1951"));
        assert!(!out.contains("spaceflights"));
        assert!(!out.contains("Active"));
        assert!(!out.contains("full-name"));
        assert!(out.contains(r#"href="/astronauts/sally-ride""#));
    }

    #[test]
    fn card_portrait_uses_square_transform() {
        let out = astronaut_card(&astronaut(json!({
            "portrait": {"url": "https://raw/s.jpg", "imgix_url": "https://x/s.jpg"},
            "still_active": true
        })))
        .into_string();

        assert!(out.contains("https://x/s.jpg?w=600&amp;h=600&amp;fit=crop&amp;auto=format,compress"));
        assert!(out.contains(">Active<"));
    }

    #[test]
    fn detail_splits_achievements_into_items() {
        let out = astronaut_page(&astronaut(json!({
            "biography": "Physicist.\nAstronaut.",
            "major_achievements": "• First American woman in space\nSTS-7 mission specialist\n\n• Founded Sally Ride Science"
        })))
        .into_string();

        assert!(out.contains("<span>First American woman in space</span>"));
        assert!(out.contains("<p>STS-7 mission specialist</p>"));
        assert!(out.contains("<span>Founded Sally Ride Science</span>"));
        assert!(out.find("Biography").unwrap() < out.find("Major Achievements").unwrap());
    }

    #[test]
    fn empty_listing_renders_empty_state() {
        assert!(astronauts_page(&[]).into_string().contains("No Astronauts Found"));
    }
}
