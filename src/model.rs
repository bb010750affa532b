//! Portfolio content model, deserialized from the JSON data documents.
//! Every section is optional so a partial document still renders what it has.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    pub personal_info: Option<PersonalInfo>,
    pub about: Option<About>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Vec<Stat>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    pub contact: Option<Contact>,
    pub footer: Option<Footer>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    /// Display handle shown in the contact block.
    pub github: String,
    pub linkedin: String,
    pub social_links: Option<SocialLinks>,
    /// Highlights listed in the hero code card.
    pub skills: Option<Vec<String>>,
    pub passion: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub title: String,
    pub paragraphs: Option<Vec<String>>,
    pub skills_title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Icon font class list, e.g. "fab fa-rust".
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    /// Display target, kept as text ("50", "50+"); parsed when the counter starts.
    #[serde(deserialize_with = "number_or_string")]
    pub number: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Free-form filter key.
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub github_url: String,
    pub live_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectMedia<'a> {
    Image(&'a str),
    Icon(&'a str),
}

impl Project {
    pub fn media(&self) -> Option<ProjectMedia<'_>> {
        match (self.image.as_deref(), self.icon.as_deref()) {
            (Some(src), _) if !src.is_empty() => Some(ProjectMedia::Image(src)),
            (_, Some(icon)) if !icon.is_empty() => Some(ProjectMedia::Icon(icon)),
            _ => None,
        }
    }

    pub fn live_link(&self) -> Option<&str> {
        self.live_url.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub copyright: String,
}

/// Leading-integer parse: optional sign, then digits up to the first non-digit.
/// Anything without leading digits parses to zero; negatives clamp to zero.
pub fn parse_leading_int(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(u32::MAX)
}

/// `null` reads as the field's default, same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(f)) => f.to_string(),
        Some(Raw::Text(s)) => s,
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "personalInfo": {
            "name": "Ada Example",
            "title": "Systems Engineer",
            "description": "Builds things.",
            "email": "ada@example.com",
            "github": "github.com/ada",
            "linkedin": "linkedin.com/in/ada",
            "socialLinks": { "github": "https://github.com/ada", "linkedin": "https://linkedin.com/in/ada" },
            "skills": ["Rust", "WebAssembly"],
            "passion": "Fast software"
        },
        "about": { "title": "About Me", "paragraphs": ["One.", "Two."], "skillsTitle": "Toolbox" },
        "skills": [{ "name": "Rust", "icon": "fab fa-rust" }],
        "stats": [{ "number": 42, "label": "Projects" }, { "number": "10+", "label": "Years" }],
        "projects": [{
            "title": "Parser",
            "description": "A parser.",
            "category": "tools",
            "tags": ["rust"],
            "icon": "fas fa-code",
            "githubUrl": "https://github.com/ada/parser"
        }],
        "contact": { "title": "Say hi", "subtitle": "Inbox is open" },
        "footer": { "copyright": "2026 Ada Example" }
    }"#;

    #[test]
    fn parses_full_document() {
        let data: PortfolioData = serde_json::from_str(SAMPLE).unwrap();
        let info = data.personal_info.as_ref().unwrap();
        assert_eq!(info.name, "Ada Example");
        assert_eq!(info.social_links.as_ref().unwrap().github, "https://github.com/ada");
        assert_eq!(info.skills.as_deref().unwrap(), ["Rust", "WebAssembly"]);
        assert_eq!(data.about.as_ref().unwrap().skills_title, "Toolbox");
        assert_eq!(data.projects[0].github_url, "https://github.com/ada/parser");
        assert_eq!(data.projects[0].live_link(), None);
        assert_eq!(data.footer.unwrap().copyright, "2026 Ada Example");
    }

    #[test]
    fn stat_number_accepts_numbers_and_strings() {
        let data: PortfolioData = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(data.stats[0].number, "42");
        assert_eq!(parse_leading_int(&data.stats[0].number), 42);
        assert_eq!(data.stats[1].number, "10+");
        assert_eq!(parse_leading_int(&data.stats[1].number), 10);
    }

    #[test]
    fn missing_sections_default_to_absent() {
        let data: PortfolioData = serde_json::from_str(r#"{ "footer": { "copyright": "x" } }"#).unwrap();
        assert!(data.personal_info.is_none());
        assert!(data.about.is_none());
        assert!(data.skills.is_empty());
        assert!(data.stats.is_empty());
        assert!(data.projects.is_empty());
        assert!(data.footer.is_some());
    }

    #[test]
    fn null_lists_read_as_empty() {
        let data: PortfolioData = serde_json::from_str(
            r#"{
                "personalInfo": { "name": "A" },
                "skills": null,
                "stats": null,
                "projects": [{ "title": "P", "category": "web", "tags": null }]
            }"#,
        )
        .unwrap();
        assert_eq!(data.personal_info.unwrap().name, "A");
        assert!(data.skills.is_empty());
        assert!(data.stats.is_empty());
        assert_eq!(data.projects.len(), 1);
        assert!(data.projects[0].tags.is_empty());

        let data: PortfolioData = serde_json::from_str(r#"{ "projects": null }"#).unwrap();
        assert!(data.projects.is_empty());
    }

    #[test]
    fn null_stat_number_counts_to_zero() {
        let data: PortfolioData =
            serde_json::from_str(r#"{ "stats": [{ "number": null, "label": "Talks" }] }"#).unwrap();
        assert_eq!(data.stats[0].number, "");
        assert_eq!(data.stats[0].label, "Talks");
        assert_eq!(parse_leading_int(&data.stats[0].number), 0);
    }

    #[test]
    fn leading_int_follows_prefix_digits() {
        assert_eq!(parse_leading_int("120"), 120);
        assert_eq!(parse_leading_int("  7 years"), 7);
        assert_eq!(parse_leading_int("+15"), 15);
        assert_eq!(parse_leading_int("3.9"), 3);
        assert_eq!(parse_leading_int("-4"), 0);
        assert_eq!(parse_leading_int("many"), 0);
        assert_eq!(parse_leading_int(""), 0);
    }

    #[test]
    fn image_takes_precedence_over_icon() {
        let mut p = Project {
            image: Some("shot.png".into()),
            icon: Some("fas fa-code".into()),
            ..Default::default()
        };
        assert_eq!(p.media(), Some(ProjectMedia::Image("shot.png")));
        p.image = None;
        assert_eq!(p.media(), Some(ProjectMedia::Icon("fas fa-code")));
        p.icon = None;
        assert_eq!(p.media(), None);
    }
}
