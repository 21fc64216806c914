//! Footer extraction: copyright, link sections, social links.

use super::{Extraction, Intent};
use crate::text::{contains_any, extract_quoted, is_list_item, list_item_text, quoted_where, slugify};
use centaur_core::{FooterSection, Item, NavLink, SocialLink};

pub const SOCIAL_PLATFORMS: [&str; 8] = [
    "facebook",
    "twitter",
    "instagram",
    "linkedin",
    "github",
    "youtube",
    "tiktok",
    "discord",
];

pub fn default_copyright(year: i32) -> String {
    format!("© {year} Company. All rights reserved.")
}

fn is_copyright_line(lower: &str) -> bool {
    contains_any(lower, &["copyright", "©", "(c)"])
}

fn sections(intent: &Intent<'_>) -> Vec<FooterSection> {
    let mut sections: Vec<FooterSection> = Vec::new();

    for line in intent.each_line() {
        if line.starts_with('#') {
            let title = line.trim_start_matches('#').trim().to_string();
            sections.push(FooterSection {
                title,
                links: Vec::new(),
            });
        } else if is_list_item(line) {
            // Links before the first header have no section to join.
            let Some(section) = sections.last_mut() else {
                continue;
            };
            let text = extract_quoted(line).unwrap_or_else(|| list_item_text(line).to_string());
            if !text.is_empty() {
                let href = format!("#{}", slugify(&text));
                section.links.push(NavLink { text, href });
            }
        }
    }
    sections
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let copyright = quoted_where(intent.each_line(), is_copyright_line)
        .unwrap_or_else(|| default_copyright(intent.config.copyright_year));

    let social = SOCIAL_PLATFORMS
        .iter()
        .filter(|platform| intent.mentions(platform))
        .map(|platform| SocialLink {
            platform: platform.to_string(),
            url: format!("https://{platform}.com"),
        });

    let mut out = Extraction::new();
    out.items = sections(intent)
        .into_iter()
        .map(Item::FooterSection)
        .chain(social.map(Item::SocialLink))
        .collect();
    out.set("copyright", copyright);
    out.set("newsletter", intent.mentions_any(&["newsletter", "subscribe"]));
    out
}
