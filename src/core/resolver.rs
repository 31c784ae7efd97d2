use crate::domain::model::PlanId;
use crate::utils::error::{PlanError, Result};
use regex::Regex;
use std::sync::LazyLock;

static LEADING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)").expect("leading digit pattern is valid"));

// e.g. https://www.architectsnw.com/plans/detailedplaninfo.cfm?PlanId=1053
static PLAN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://.+PlanId=([0-9]+)").expect("plan URL pattern is valid")
});

/// Extracts the plan identifier from a bare number or a plan page URL.
///
/// A leading digit run wins over the URL form, so `"1053abc"` resolves to
/// `1053`. Anything else is rejected with [`PlanError::InvalidIdentifierFormat`].
pub fn resolve_plan_id(input: &str) -> Result<PlanId> {
    let captures = LEADING_DIGITS
        .captures(input)
        .or_else(|| PLAN_URL.captures(input));

    captures
        .and_then(|caps| caps.get(1))
        .and_then(|m| PlanId::new(m.as_str()))
        .ok_or_else(|| PlanError::InvalidIdentifierFormat {
            input: input.to_string(),
        })
}
