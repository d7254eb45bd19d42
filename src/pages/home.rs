use crate::domain::home_querier::HomeSummary;
use crate::pages::astronauts::astronaut_card;
use crate::pages::layout::page;
use crate::pages::missions::mission_card;
use maud::html;
use maud::Markup;

pub fn home_page(summary: &HomeSummary) -> Markup {
    page(
        None,
        html! {
            section.hero {
                h1 { "Explore the " span.highlight { "Cosmos" } }
                p { "Journey through humanity's greatest space missions, meet the brave astronauts who made history, and discover the wonders of our universe." }
                div.hero-actions {
                    a.cosmic-button href="/missions" { "🚀 Explore Missions" }
                    a.cosmic-button href="/astronauts" { "👨‍🚀 Meet Astronauts" }
                }
            }

            section.stats {
                div.cosmic-card.stat-missions {
                    div.highlight { (summary.total_missions) }
                    div.stat-label { "Space Missions" }
                }
                div.cosmic-card.stat-astronauts {
                    div.highlight { (summary.total_astronauts) }
                    div.stat-label { "Astronauts" }
                }
                div.cosmic-card.stat-discoveries {
                    div.highlight { "∞" }
                    div.stat-label { "Discoveries" }
                }
            }

            @if !summary.featured_missions.is_empty() {
                section.featured-missions {
                    h2 { "Featured " span.highlight { "Missions" } }
                    div.grid {
                        @for mission in &summary.featured_missions {
                            (mission_card(mission))
                        }
                    }
                    a.cosmic-button href="/missions" { "View All Missions" }
                }
            }

            @if !summary.featured_astronauts.is_empty() {
                section.featured-astronauts {
                    h2 { "Space " span.highlight { "Pioneers" } }
                    div.grid {
                        @for astronaut in &summary.featured_astronauts {
                            (astronaut_card(astronaut))
                        }
                    }
                    a.cosmic-button href="/astronauts" { "View All Astronauts" }
                }
            }
        },
    )
}
