//! Heuristics that pull contact and legal facts out of free-text copyright
//! notices. None of these guarantee correctness; they are tuned to the
//! notices found in font metadata and degrade to "nothing found".

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

const MAIL_PATTERN: &str = r"[\w.\-_]+@[\w\-_.]+\.+[A-Za-z]{2,4}";
// Lax on purpose: bare "example.com" counts. Mail addresses are matched by
// the same expression and filtered afterwards by their '@'.
const URL_PATTERN: &str = r"(?:https?://|[a-zA-Z][a-zA-Z0-9]+\.)[a-zA-Z0-9/\-_.~]{2,}";

/// Matches that look like URLs but are license boilerplate, not designer contacts
pub const NOT_URLS: [&str; 4] = [
    "http://www.apache.org/licenses/LICENSE-2.0.html",
    "http://scripts.sil.org/OFL",
    "OFL.txt",
    "v1.1.",
];

lazy_static! {
    static ref MAIL_RE: Regex = Regex::new(MAIL_PATTERN).unwrap();
    static ref URL_RE: Regex =
        Regex::new(&format!("(?:{})|(?:{})", MAIL_PATTERN, URL_PATTERN)).unwrap();
    static ref COPYRIGHT_RE: Regex = Regex::new(
        r"(?i)^copyright ?(?:(?:\(c\)|©) ?)?([0-9]+[0-9, ]+[0-9]+), ?([a-z]+ [a-z]+)"
    )
    .unwrap();
    static ref RFN_RE: Regex = Regex::new(r"^.*(Reserved Font Name.+)").unwrap();
}

/// Year and holder parsed from the head of a copyright notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightHolder {
    pub year: String,
    pub name: String,
}

/// Everything derived from a family's copyright strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyrightFacts {
    pub emails: BTreeSet<String>,
    pub urls: BTreeSet<String>,
    pub holder: Option<CopyrightHolder>,
    pub email: String,
    pub reserved_font_name: Option<String>,
}

/// Mail addresses in order of first appearance, without repeats
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in MAIL_RE.find_iter(text) {
        if !found.iter().any(|f| f == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}

pub fn is_denied_url(candidate: &str) -> bool {
    NOT_URLS.contains(&candidate)
}

/// URL-looking tokens, minus mail addresses and known boilerplate
pub fn extract_urls(text: &str) -> BTreeSet<String> {
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| !candidate.contains('@') && !is_denied_url(candidate))
        .map(str::to_string)
        .collect()
}

/// Parse `Copyright (c) <years>, <First> <Last>` from the start of `text`
pub fn parse_copyright_holder(text: &str) -> Option<CopyrightHolder> {
    let captures = COPYRIGHT_RE.captures(text)?;
    Some(CopyrightHolder {
        year: captures.get(1)?.as_str().to_string(),
        name: captures.get(2)?.as_str().to_string(),
    })
}

/// The trailing Reserved Font Name clause as `, with Reserved Font Name ...`
pub fn parse_reserved_font_name(text: &str) -> Option<String> {
    let clause = RFN_RE.captures(text)?.get(1)?.as_str();
    let clause = clause.strip_suffix('.').unwrap_or(clause);
    Some(format!(", with {}", clause))
}

/// Pick the address mentioned earliest in `copyright`.
///
/// Ties and addresses absent from `copyright` keep the order of
/// `candidates`, absent ones ranking last.
pub fn select_contact_email(candidates: &[String], copyright: &str) -> String {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(order, email)| (copyright.find(email.as_str()).unwrap_or(usize::MAX), *order))
        .map(|(_, email)| email.clone())
        .unwrap_or_default()
}

/// The single notice used for holder, year, RFN and contact selection.
///
/// Smallest non-empty string, so the choice never depends on hash order.
pub fn representative_copyright(copyrights: &BTreeSet<String>) -> Option<&str> {
    copyrights
        .iter()
        .find(|c| !c.is_empty())
        .or_else(|| copyrights.iter().next())
        .map(String::as_str)
}

/// Derive all copyright facts for one family
pub fn derive_copyright_facts(copyrights: &BTreeSet<String>) -> CopyrightFacts {
    let mut ordered_emails: Vec<String> = Vec::new();
    let mut urls = BTreeSet::new();
    for copyright in copyrights {
        for email in extract_emails(copyright) {
            if !ordered_emails.contains(&email) {
                ordered_emails.push(email);
            }
        }
        urls.extend(extract_urls(copyright));
    }

    let mut facts = CopyrightFacts {
        emails: ordered_emails.iter().cloned().collect(),
        urls,
        ..Default::default()
    };

    if let Some(copyright) = representative_copyright(copyrights) {
        facts.holder = parse_copyright_holder(copyright);
        facts.reserved_font_name = parse_reserved_font_name(copyright);
        facts.email = select_contact_email(&ordered_emails, copyright);
    }
    facts
}
