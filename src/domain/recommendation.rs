//! Treatment recommendation per GOLD group.

use crate::domain::SeverityGroup;

/// Returned for any label that is not a group letter.
pub const DEFAULT_RECOMMENDATION: &str = "Consult a physician for treatment recommendations.";

impl SeverityGroup {
    pub fn recommendation(self) -> &'static str {
        match self {
            SeverityGroup::A => "Short-acting bronchodilator (SABA or SAMA) as needed.",
            SeverityGroup::B => {
                "Long-acting bronchodilator (LABA or LAMA). \
                 Consider combining LABA + LAMA if symptoms persist."
            }
            SeverityGroup::C => {
                "LAMA as first choice. \
                 Consider LABA + LAMA or LABA + ICS if exacerbations persist."
            }
            SeverityGroup::D => {
                "LABA + LAMA as first choice. \
                 Consider adding ICS if exacerbations persist. \
                 In severe cases, consider adding roflumilast or azithromycin."
            }
        }
    }
}

/// Looks up the advice for a free-form group label ("a", " D ").
pub fn recommendation_for(label: &str) -> &'static str {
    label
        .parse::<SeverityGroup>()
        .map(SeverityGroup::recommendation)
        .unwrap_or(DEFAULT_RECOMMENDATION)
}
