//! GOLD ABCD classifier. Pure, total: every assessment maps to exactly one group.

use crate::domain::{
    Assessment, CatScore, Classification, ExacerbationLevel, MmrcScore, RiskLevel, SeverityGroup,
    SymptomLevel,
};

impl Assessment {
    pub fn risk(&self) -> RiskLevel {
        if self.exacerbations.is_high_risk() {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    /// Either scale crossing its threshold is enough.
    pub fn symptoms(&self) -> SymptomLevel {
        if self.mmrc.value() >= MmrcScore::SYMPTOM_THRESHOLD
            || self.cat.value() >= CatScore::SYMPTOM_THRESHOLD
        {
            SymptomLevel::More
        } else {
            SymptomLevel::Less
        }
    }

    pub fn classify(&self) -> Classification {
        let risk = self.risk();
        let symptoms = self.symptoms();
        Classification {
            group: SeverityGroup::from_axes(risk, symptoms),
            risk,
            symptoms,
        }
    }
}

impl SeverityGroup {
    /// Risk picks the row (A/B vs C/D), symptoms pick the column.
    pub fn from_axes(risk: RiskLevel, symptoms: SymptomLevel) -> Self {
        match (risk, symptoms) {
            (RiskLevel::Low, SymptomLevel::Less) => SeverityGroup::A,
            (RiskLevel::Low, SymptomLevel::More) => SeverityGroup::B,
            (RiskLevel::High, SymptomLevel::Less) => SeverityGroup::C,
            (RiskLevel::High, SymptomLevel::More) => SeverityGroup::D,
        }
    }
}

/// Convenience entry point over the three raw inputs.
pub fn classify(exacerbations: ExacerbationLevel, mmrc: MmrcScore, cat: CatScore) -> Classification {
    Assessment::new(exacerbations, mmrc, cat).classify()
}
