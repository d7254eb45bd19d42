use crate::domain::astronaut_model::Astronaut;
use crate::domain::content_model::ImageSize;
use crate::domain::content_model::Selected;
use crate::domain::mission_model::Mission;
use crate::domain::mission_model::MissionStatus;
use crate::pages::format_date;
use crate::pages::image;
use crate::pages::layout::page;
use crate::pages::text::render_text;
use maud::html;
use maud::Markup;

const CREW_PREVIEW: usize = 3;

pub fn missions_page(missions: &[Mission]) -> Markup {
    if missions.is_empty() {
        return page(
            Some("Space Missions"),
            html! {
                div.empty-state {
                    div { "🚀" }
                    h1 { "No Missions Found" }
                    p { "We're currently gathering mission data. Check back soon for updates on space exploration missions!" }
                    a.cosmic-button href="/" { "Return Home" }
                }
            },
        );
    }

    page(
        Some("Space Missions"),
        html! {
            div.hero {
                h1 { "Space " span.highlight { "Missions" } }
                p { "Discover humanity's greatest adventures in space exploration, from historic moon landings to cutting-edge Mars missions and beyond." }
            }
            div.grid {
                @for mission in missions {
                    (mission_card(mission))
                }
            }
        },
    )
}

pub(crate) fn status_badge(status: &Selected<MissionStatus>) -> Markup {
    html! {
        span class={ "cosmic-badge status-" (status.key.as_str()) } { (status.label) }
    }
}

fn crew_summary(crew: &[Astronaut]) -> String {
    let names: Vec<&str> = crew
        .iter()
        .take(CREW_PREVIEW)
        .map(|member| member.title.as_str())
        .collect();
    let mut summary = names.join(", ");
    if crew.len() > CREW_PREVIEW {
        summary.push_str(&format!(" +{} more", crew.len() - CREW_PREVIEW));
    }
    summary
}

pub fn mission_card(mission: &Mission) -> Markup {
    let meta = &mission.metadata;
    html! {
        a.cosmic-card.mission-card href={ "/missions/" (mission.slug) } {
            @if let Some(img) = &meta.mission_image {
                (image(img, ImageSize::MISSION_CARD, &mission.title, "card-image"))
            }
            div.card-heading {
                h2 { (mission.title) }
                @if let Some(status) = &meta.mission_status {
                    (status_badge(status))
                }
            }
            @if let Some(agency) = &meta.agency {
                p.agency { "🏛️ " (agency) }
            }
            @if let Some(launch_date) = &meta.launch_date {
                p.launch-date { "🗓️ Launched: " (format_date(launch_date)) }
            }
            @if let Some(destination) = &meta.destination {
                p.destination { "🎯 Destination: " (destination) }
            }
            @if let Some(objectives) = &meta.mission_objectives {
                p.objectives { (objectives) }
            }
            @if !meta.crew_members.is_empty() {
                div.crew-summary {
                    span.stat-label { "👨‍🚀 Crew:" }
                    span { (crew_summary(&meta.crew_members)) }
                }
            }
        }
    }
}

pub fn mission_page(mission: &Mission) -> Markup {
    let meta = &mission.metadata;
    page(
        Some(mission.title.as_str()),
        html! {
            a.back-link href="/missions" { "← Back to Missions" }

            div.cosmic-card.mission-header {
                @if let Some(img) = &meta.mission_image {
                    (image(img, ImageSize::MISSION_HERO, &mission.title, "hero-image"))
                }
                div.card-heading {
                    h1 { (mission.title) }
                    @if let Some(status) = &meta.mission_status {
                        (status_badge(status))
                    }
                }
                div.stats {
                    @if let Some(agency) = &meta.agency {
                        div.agency { span.stat-label { "Space Agency:" } span { (agency) } }
                    }
                    @if let Some(launch_date) = &meta.launch_date {
                        div.launch-date { span.stat-label { "Launch Date:" } span { (format_date(launch_date)) } }
                    }
                    @if let Some(destination) = &meta.destination {
                        div.destination { span.stat-label { "Destination:" } span { (destination) } }
                    }
                }
            }

            @if let Some(objectives) = &meta.mission_objectives {
                section.cosmic-card.objectives {
                    h2.highlight { "Mission Objectives" }
                    (render_text(objectives))
                }
            }

            @if let Some(description) = &meta.mission_description {
                section.cosmic-card.description {
                    (render_text(description))
                }
            }

            @if !meta.crew_members.is_empty() {
                section.cosmic-card.crew {
                    h2.highlight { "Crew Members" }
                    div.grid {
                        @for member in &meta.crew_members {
                            (crew_member(member))
                        }
                    }
                }
            }
        },
    )
}

fn crew_member(member: &Astronaut) -> Markup {
    html! {
        a.crew-member href={ "/astronauts/" (member.slug) } {
            @if let Some(portrait) = &member.metadata.portrait {
                (image(portrait, ImageSize::CREW_PORTRAIT, &member.title, "crew-portrait"))
            }
            h3 { (member.title) }
            @if let Some(nationality) = &member.metadata.nationality {
                p { (nationality) }
            }
            @if let Some(agency) = &member.metadata.space_agency {
                p { (agency) }
            }
        }
    }
}
