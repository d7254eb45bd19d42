pub mod astronauts;
pub mod celestial_bodies;
pub mod errors;
pub mod home;
pub mod layout;
pub mod missions;
pub mod text;

use crate::domain::content_model::ImageRef;
use crate::domain::content_model::ImageSize;
use chrono::DateTime;
use chrono::Datelike;
use chrono::NaiveDate;
use maud::html;
use maud::Markup;

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}

/// "July 16, 1969", or the stored text when it is not a date.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

pub fn year_of(raw: &str) -> Option<i32> {
    parse_date(raw).map(|date| date.year())
}

pub(crate) fn image(image: &ImageRef, size: ImageSize, alt: &str, class: &str) -> Markup {
    html! {
        img src=(image.sized(size)) alt=(alt) width=(size.width / 2) height=(size.height / 2) class=(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_long_form() {
        assert_eq!(format_date("1969-07-16"), "July 16, 1969");
        assert_eq!(format_date("2022-11-16T06:47:44Z"), "November 16, 2022");
    }

    #[test]
    fn unparseable_dates_render_verbatim() {
        assert_eq!(format_date("circa 1610"), "circa 1610");
        assert_eq!(year_of("circa 1610"), None);
        assert_eq!(year_of("1951-05-26"), Some(1951));
    }

    #[test]
    fn image_tag_uses_transformed_source() {
        let img = ImageRef {
            url: "https://raw/img.jpg".to_string(),
            imgix_url: "https://x/img.jpg".to_string(),
        };
        let out = image(&img, ImageSize::MISSION_HERO, "Apollo 11", "hero").into_string();
        assert!(out.contains(r#"src="https://x/img.jpg?w=1200&amp;h=600&amp;fit=crop&amp;auto=format,compress""#));
        assert!(out.contains(r#"alt="Apollo 11""#));
    }
}
