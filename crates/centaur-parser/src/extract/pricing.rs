//! Pricing table extraction.

use super::{Extraction, Intent};
use crate::text::{contains_any, extract_quoted, is_list_item, list_item_text, unquote};
use centaur_core::{Item, PricingPlan};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_PERIOD: &str = "month";
pub const DEFAULT_BUTTON_TEXT: &str = "Get Started";

const HIGHLIGHT_WORDS: [&str; 4] = ["popular", "recommended", "featured", "highlight"];

static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)(?:\s*/\s*(\w+))?").unwrap());

fn plan(name: &str, price: &str, features: &[&str], highlighted: bool) -> PricingPlan {
    PricingPlan {
        name: name.to_string(),
        price: price.to_string(),
        period: DEFAULT_PERIOD.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        highlighted,
        button_text: DEFAULT_BUTTON_TEXT.to_string(),
    }
}

/// Plans shown when the description declares none.
pub fn default_plans() -> Vec<PricingPlan> {
    vec![
        plan("Starter", "9", &["1 project", "Basic analytics", "Email support"], false),
        plan(
            "Professional",
            "29",
            &["Unlimited projects", "Advanced analytics", "Priority support"],
            true,
        ),
        plan(
            "Enterprise",
            "99",
            &["Everything in Professional", "Dedicated manager", "Custom integrations"],
            false,
        ),
    ]
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let mut plans: Vec<PricingPlan> = Vec::new();

    for line in intent.each_line() {
        if let Some(rest) = line.strip_prefix("##") {
            let name = unquote(rest.trim_start_matches('#'));
            let highlighted = contains_any(&name.to_lowercase(), &HIGHLIGHT_WORDS);
            plans.push(PricingPlan {
                name: name.to_string(),
                price: String::new(),
                period: DEFAULT_PERIOD.to_string(),
                features: Vec::new(),
                highlighted,
                button_text: DEFAULT_BUTTON_TEXT.to_string(),
            });
            continue;
        }

        // Content before the first plan header is ignored.
        let Some(current) = plans.last_mut() else {
            continue;
        };
        let lower = line.to_lowercase();
        let mut consumed = false;

        if let Some(caps) = PRICE.captures(line) {
            current.price = caps[1].to_string();
            if let Some(period) = caps.get(2) {
                current.period = period.as_str().to_lowercase();
            }
            consumed = true;
        }
        if lower.contains("button") {
            if let Some(text) = extract_quoted(line) {
                current.button_text = text;
            }
            consumed = true;
        }
        if contains_any(&lower, &HIGHLIGHT_WORDS) {
            current.highlighted = true;
        }
        if !consumed && is_list_item(line) {
            let feature = list_item_text(line);
            if !feature.is_empty() {
                current.features.push(feature.to_string());
            }
        }
    }

    if plans.is_empty() {
        plans = default_plans();
    }

    let mut out = Extraction::new();
    out.items = plans.into_iter().map(Item::PricingPlan).collect();
    out.set("billingToggle", intent.mentions_any(&["annual", "yearly", "toggle"]));
    out
}
