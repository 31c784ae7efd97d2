use std::fmt;

/// Numeric identifier of a plan on the site, always a non-empty run of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanId(String);

impl PlanId {
    /// Returns `None` unless `digits` is non-empty and all ASCII digits.
    pub fn new(digits: impl Into<String>) -> Option<Self> {
        let digits = digits.into();
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(digits))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Album base path joined with one `img` source.
pub type ImageUrl = String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_id_accepts_digits_only() {
        assert_eq!(PlanId::new("1053").unwrap().as_str(), "1053");
        assert_eq!(PlanId::new("007").unwrap().to_string(), "007");
        assert!(PlanId::new("").is_none());
        assert!(PlanId::new("10a").is_none());
        assert!(PlanId::new("١٢").is_none());
    }
}
