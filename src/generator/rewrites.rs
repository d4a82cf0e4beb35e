use once_cell::sync::Lazy;
use regex::Regex;

use crate::generator::GeneratorInput;
use crate::{excerpt, ToneRewrites};

static DISASTROUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)disastrous").unwrap());
static SHOCKING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)shocking").unwrap());

/// Case-insensitive `disastrous -> significant`, `shocking -> notable`, applied
/// everywhere including inside longer words.
pub fn neutralize(text: &str) -> String {
    let pass = DISASTROUS_RE.replace_all(text, "significant");
    SHOCKING_RE.replace_all(&pass, "notable").into_owned()
}

pub fn tone_rewrites(input: &GeneratorInput<'_>) -> ToneRewrites {
    let text = input.text;
    ToneRewrites {
        neutral: neutralize(text),
        professional: format!(
            "Regarding {}, reports indicate significant developments. {}...",
            input.lead_or("the recent event"),
            excerpt(text, 40)
        ),
        gen_z: format!(
            "So {} just happened and it's kinda wild 💀. {}... no cap.",
            input.lead_or("this"),
            excerpt(text, 30)
        ),
        concise: format!(
            "{}: Significant events reported. {}...",
            input.lead_or("Update"),
            excerpt(text, 20)
        ),
    }
}
