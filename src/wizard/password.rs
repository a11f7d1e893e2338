// ABOUTME: Heuristic password strength score and its display bands
// The score only drives the meter; it never blocks the wizard

/// Score a password in `[0, 100]` from its length and character classes
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut total: u32 = 0;

    if length >= 8 {
        total += 20;
    }
    if length >= 12 {
        total += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        total += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        total += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        total += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        total += 15;
    }

    u8::try_from(total.min(100)).unwrap_or(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthBand {
    /// Upper bounds are inclusive: 30 is Weak, 31 is Fair
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => Self::Weak,
            31..=60 => Self::Fair,
            61..=80 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

pub fn strength(password: &str) -> StrengthBand {
    StrengthBand::from_score(score(password))
}

/// Exact comparison, no trimming or case folding
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Whether the confirm field should show its mismatch warning
pub fn shows_mismatch(password: &str, confirm: &str) -> bool {
    !confirm.is_empty() && !passwords_match(password, confirm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(strength(""), StrengthBand::Weak);
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(score("abcdefgh"), 40);
        assert_eq!(score("Abcdefgh1!"), 90);
        assert_eq!(strength("Abcdefgh1!"), StrengthBand::Strong);
        assert_eq!(score("abc"), 20);
        assert_eq!(strength("abc"), StrengthBand::Weak);
    }

    #[test]
    fn test_every_rule_caps_at_hundred() {
        assert_eq!(score("Abcdefghijk1!"), 100);
    }

    #[test]
    fn test_long_password_bonus_is_additive() {
        assert_eq!(score("abcdefghijkl"), 50);
        assert_eq!(strength("abcdefghijkl"), StrengthBand::Fair);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol_and_by_char() {
        // Eight characters, sixteen bytes
        assert_eq!(score("éééééééé"), 35);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        assert_eq!(StrengthBand::from_score(30), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(31), StrengthBand::Fair);
        assert_eq!(StrengthBand::from_score(60), StrengthBand::Fair);
        assert_eq!(StrengthBand::from_score(61), StrengthBand::Good);
        assert_eq!(StrengthBand::from_score(80), StrengthBand::Good);
        assert_eq!(StrengthBand::from_score(81), StrengthBand::Strong);
    }

    #[test]
    fn test_mismatch_warning_needs_confirm_text() {
        assert!(passwords_match("secret", "secret"));
        assert!(!shows_mismatch("secret", ""));
        assert!(shows_mismatch("secret", "Secret"));
        assert!(!shows_mismatch("secret", "secret"));
    }
}
