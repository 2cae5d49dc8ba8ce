//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here. The UI maps its controls onto these.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exacerbations per year, as picked from the three-way selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExacerbationLevel {
    /// 0-1 exacerbations, none leading to hospitalization.
    #[default]
    #[serde(rename = "none-or-one")]
    NoneOrOneWithoutHospitalization,
    /// 1 exacerbation that led to hospitalization.
    #[serde(rename = "one-hospitalized")]
    OneWithHospitalization,
    /// 2 or more exacerbations.
    #[serde(rename = "two-or-more")]
    TwoOrMore,
}

impl ExacerbationLevel {
    /// Selector order.
    pub const ALL: [ExacerbationLevel; 3] = [
        ExacerbationLevel::NoneOrOneWithoutHospitalization,
        ExacerbationLevel::OneWithHospitalization,
        ExacerbationLevel::TwoOrMore,
    ];

    /// Both hospitalization and frequent exacerbations put the patient in the high-risk half.
    pub fn is_high_risk(self) -> bool {
        matches!(
            self,
            ExacerbationLevel::OneWithHospitalization | ExacerbationLevel::TwoOrMore
        )
    }

    /// Stable token used on the command line and in JSON.
    pub fn token(self) -> &'static str {
        match self {
            ExacerbationLevel::NoneOrOneWithoutHospitalization => "none-or-one",
            ExacerbationLevel::OneWithHospitalization => "one-hospitalized",
            ExacerbationLevel::TwoOrMore => "two-or-more",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExacerbationLevel::NoneOrOneWithoutHospitalization => "0-1 without hospitalization",
            ExacerbationLevel::OneWithHospitalization => "1 with hospitalization",
            ExacerbationLevel::TwoOrMore => ">= 2",
        }
    }
}

impl fmt::Display for ExacerbationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExacerbationLevel {
    type Err = DomainError;

    /// Accepts the tokens plus the legacy selector values `0`, `1`, `2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none-or-one" | "0" => Ok(ExacerbationLevel::NoneOrOneWithoutHospitalization),
            "one-hospitalized" | "1" => Ok(ExacerbationLevel::OneWithHospitalization),
            "two-or-more" | "2" => Ok(ExacerbationLevel::TwoOrMore),
            _ => Err(DomainError::UnknownExacerbationLevel(s.to_string())),
        }
    }
}

/// Modified Medical Research Council dyspnea grade, 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MmrcScore(u8);

impl MmrcScore {
    pub const MAX: u8 = 4;
    /// Grades at or above this count as "more symptomatic".
    pub const SYMPTOM_THRESHOLD: u8 = 2;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::ScoreOutOfRange {
                scale: "mMRC",
                value: u32::from(value),
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every valid grade, ascending.
    pub fn all() -> impl Iterator<Item = MmrcScore> {
        (0..=Self::MAX).map(MmrcScore)
    }

    /// Patient-facing wording of the grade.
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Breathless only with strenuous exercise",
            1 => "Short of breath when hurrying on the level or walking up a slight hill",
            2 => "Walks slower than peers, or stops for breath when walking at own pace",
            3 => "Stops for breath after about 100 m or a few minutes on the level",
            _ => "Too breathless to leave the house, or breathless when dressing",
        }
    }
}

impl TryFrom<u8> for MmrcScore {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MmrcScore> for u8 {
    fn from(score: MmrcScore) -> Self {
        score.0
    }
}

impl fmt::Display for MmrcScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// COPD Assessment Test impact score, 0-40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CatScore(u8);

impl CatScore {
    pub const MAX: u8 = 40;
    /// Scores at or above this count as "more symptomatic".
    pub const SYMPTOM_THRESHOLD: u8 = 10;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::ScoreOutOfRange {
                scale: "CAT",
                value: u32::from(value),
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = CatScore> {
        (0..=Self::MAX).map(CatScore)
    }
}

impl TryFrom<u8> for CatScore {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CatScore> for u8 {
    fn from(score: CatScore) -> Self {
        score.0
    }
}

impl fmt::Display for CatScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three form inputs. Recreated on every change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assessment {
    pub exacerbations: ExacerbationLevel,
    pub mmrc: MmrcScore,
    pub cat: CatScore,
}

impl Assessment {
    pub fn new(exacerbations: ExacerbationLevel, mmrc: MmrcScore, cat: CatScore) -> Self {
        Self {
            exacerbations,
            mmrc,
            cat,
        }
    }
}

/// GOLD group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityGroup {
    A,
    B,
    C,
    D,
}

impl SeverityGroup {
    pub const ALL: [SeverityGroup; 4] = [
        SeverityGroup::A,
        SeverityGroup::B,
        SeverityGroup::C,
        SeverityGroup::D,
    ];

    pub fn letter(self) -> &'static str {
        match self {
            SeverityGroup::A => "A",
            SeverityGroup::B => "B",
            SeverityGroup::C => "C",
            SeverityGroup::D => "D",
        }
    }
}

impl fmt::Display for SeverityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for SeverityGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(SeverityGroup::A),
            "B" => Ok(SeverityGroup::B),
            "C" => Ok(SeverityGroup::C),
            "D" => Ok(SeverityGroup::D),
            _ => Err(DomainError::UnknownGroup(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomLevel {
    Less,
    More,
}

impl SymptomLevel {
    pub fn label(self) -> &'static str {
        match self {
            SymptomLevel::Less => "Less symptomatic",
            SymptomLevel::More => "More symptomatic",
        }
    }
}

/// Classifier output: the group and the two axes it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub group: SeverityGroup,
    pub risk: RiskLevel,
    pub symptoms: SymptomLevel,
}

/// One row of the medication glossary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
    pub examples: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exacerbation_from_str_accepts_tokens_and_selector_values() {
        for level in ExacerbationLevel::ALL {
            assert_eq!(level.token().parse::<ExacerbationLevel>().unwrap(), level);
        }
        assert_eq!(
            "1".parse::<ExacerbationLevel>().unwrap(),
            ExacerbationLevel::OneWithHospitalization
        );
        assert_eq!(
            " Two-Or-More ".parse::<ExacerbationLevel>().unwrap(),
            ExacerbationLevel::TwoOrMore
        );
        assert!(matches!(
            "hosp".parse::<ExacerbationLevel>(),
            Err(DomainError::UnknownExacerbationLevel(_))
        ));
    }

    #[test]
    fn test_score_ranges() {
        assert_eq!(MmrcScore::new(4).unwrap().value(), 4);
        assert_eq!(
            MmrcScore::new(5),
            Err(DomainError::ScoreOutOfRange {
                scale: "mMRC",
                value: 5,
                max: 4
            })
        );
        assert_eq!(CatScore::new(40).unwrap().value(), 40);
        assert!(CatScore::new(41).is_err());
        assert_eq!(MmrcScore::all().count(), 5);
        assert_eq!(CatScore::all().count(), 41);
    }

    #[test]
    fn test_default_assessment_matches_initial_form() {
        let a = Assessment::default();
        assert_eq!(
            a.exacerbations,
            ExacerbationLevel::NoneOrOneWithoutHospitalization
        );
        assert_eq!(a.mmrc.value(), 0);
        assert_eq!(a.cat.value(), 0);
    }

    #[test]
    fn test_assessment_json_shape() {
        let a = Assessment::new(
            ExacerbationLevel::TwoOrMore,
            MmrcScore::new(3).unwrap(),
            CatScore::new(15).unwrap(),
        );
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"exacerbations":"two-or-more","mmrc":3,"cat":15}"#);

        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);

        let bad = serde_json::from_str::<Assessment>(
            r#"{"exacerbations":"none-or-one","mmrc":9,"cat":0}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!(" b ".parse::<SeverityGroup>().unwrap(), SeverityGroup::B);
        assert!("E".parse::<SeverityGroup>().is_err());
        assert!("".parse::<SeverityGroup>().is_err());
    }
}
