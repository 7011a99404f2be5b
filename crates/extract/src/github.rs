//! GitHub entity extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::Entities;

static PR_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://github\.com/([^/\s]+)/([^/\s]+)/pull/(\d+)").unwrap()
});
static REPO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([\w.-]+)/([\w.-]+)\b").unwrap());
static PR_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"pr\s*#?(\d+)|#(\d+)").unwrap());

const MODEL_KEYWORDS: &[&str] = &["granite", "gemini", "openai", "ollama"];

/// Owner, repo and PR number, preferring a full PR URL over loose
/// `owner/repo` and `#n` tokens. Also picks up an explicit model
/// preference keyword when one is present.
pub fn extract_github_entities(message: &str) -> Entities {
    let mut entities = Entities::new();
    let lower = message.to_lowercase();

    if let Some(m) = PR_URL_RE.captures(message) {
        entities.insert("owner".to_string(), json!(m[1].to_string()));
        entities.insert("repo".to_string(), json!(m[2].to_string()));
        if let Ok(n) = m[3].parse::<i64>() {
            entities.insert("pr_number".to_string(), json!(n));
        }
    } else {
        // loose owner/repo, skipping anything that is part of a URL
        for m in REPO_RE.captures_iter(message) {
            let full = m.get(0).map(|g| g.as_str()).unwrap_or_default();
            if message.contains(&format!("://{full}")) || message.contains(&format!(".com/{full}"))
            {
                continue;
            }
            entities.insert("owner".to_string(), json!(m[1].to_string()));
            entities.insert("repo".to_string(), json!(m[2].to_string()));
            entities.insert(
                "repository".to_string(),
                json!(format!("{}/{}", &m[1], &m[2])),
            );
            break;
        }
        if let Some(m) = PR_NUMBER_RE.captures(&lower) {
            let digits = m.get(1).or_else(|| m.get(2));
            if let Some(digits) = digits {
                if let Ok(n) = digits.as_str().parse::<i64>() {
                    entities.insert("pr_number".to_string(), json!(n));
                }
            }
        }
    }

    for keyword in MODEL_KEYWORDS {
        if lower.contains(keyword) {
            entities.insert("model".to_string(), json!(keyword.to_string()));
            break;
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pr_url() {
        let entities =
            extract_github_entities("review https://github.com/acme/widgets/pull/42 please");
        assert_eq!(entities["owner"], json!("acme"));
        assert_eq!(entities["repo"], json!("widgets"));
        assert_eq!(entities["pr_number"], json!(42));
    }

    #[test]
    fn test_loose_repo_and_number() {
        let entities = extract_github_entities("list prs in acme/widgets pr #7");
        assert_eq!(entities["owner"], json!("acme"));
        assert_eq!(entities["repo"], json!("widgets"));
        assert_eq!(entities["repository"], json!("acme/widgets"));
        assert_eq!(entities["pr_number"], json!(7));
    }

    #[test]
    fn test_bare_hash_number() {
        let entities = extract_github_entities("merge #13");
        assert_eq!(entities["pr_number"], json!(13));
        assert!(!entities.contains_key("owner"));
    }

    #[test]
    fn test_model_keyword() {
        let entities = extract_github_entities("review this pr with gemini");
        assert_eq!(entities["model"], json!("gemini"));
    }

    #[test]
    fn test_no_signal() {
        assert!(extract_github_entities("hello").is_empty());
    }
}
