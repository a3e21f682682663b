//! Count-up for the brand metrics strip

/// A metric value as authored in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricValue {
    /// `∞`, which floats instead of counting
    Infinite,
    /// Digits with a suffix, e.g. `12K+`
    Count { target: u64, suffix: String },
    /// Anything without digits
    Text(String),
}

impl MetricValue {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text == "∞" {
            return MetricValue::Infinite;
        }
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        match digits.parse::<u64>() {
            Ok(target) => MetricValue::Count {
                target,
                suffix: text
                    .chars()
                    .filter(|c| !c.is_ascii_digit() && *c != '.')
                    .collect(),
            },
            Err(_) => MetricValue::Text(text.to_string()),
        }
    }

    /// Text shown at `frame` of `frames`; the last frame shows the target
    pub fn frame(&self, frame: u32, frames: u32) -> String {
        match self {
            MetricValue::Infinite => "∞".to_string(),
            MetricValue::Text(text) => text.clone(),
            MetricValue::Count { target, suffix } => {
                let current = if frames == 0 || frame >= frames {
                    *target
                } else {
                    let scaled = u128::from(*target) * u128::from(frame) / u128::from(frames);
                    u64::try_from(scaled).unwrap_or(*target)
                };
                format!("{}{}", current, suffix)
            }
        }
    }
}
