use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)h").expect("Failed to compile hours regex"));
static MINUTES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)m").expect("Failed to compile minutes regex"));
static SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)s").expect("Failed to compile seconds regex"));

/// Convert a YouTube time offset like `1h2m3s` into seconds.
///
/// Each unit is looked up independently, so `30s1h` equals `1h30s`.
/// Missing units count as zero and unparseable input yields 0.
pub fn to_seconds(time: &str) -> u64 {
    let hours = unit_value(&HOURS_REGEX, time);
    let minutes = unit_value(&MINUTES_REGEX, time);
    let seconds = unit_value(&SECONDS_REGEX, time);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

fn unit_value(re: &Regex, time: &str) -> u64 {
    re.captures(time)
        .and_then(|caps| caps.get(1))
        // Only overflow can fail here: the group is ASCII digits
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}
