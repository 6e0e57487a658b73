/// Inclusive numeric range, either side independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Bounds { min, max }
    }

    /// True when `value` satisfies every supplied bound.
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Convert each token to a float and keep the in-range ones, input order
/// intact. Tokens that fail conversion are dropped silently; this is not an
/// error and is not logged. No deduplication, no sorting.
pub fn within_bounds<I>(tokens: I, bounds: Bounds) -> Vec<f64>
where
    I: IntoIterator<Item = String>,
{
    tokens
        .into_iter()
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| bounds.contains(*value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(Some(99.0), Some(101.0));
        assert!(bounds.contains(99.0));
        assert!(bounds.contains(101.0));
        assert!(!bounds.contains(98.9));
        assert!(!bounds.contains(101.1));
    }

    #[test]
    fn absent_bound_is_unconstrained() {
        assert!(Bounds::new(None, Some(5.0)).contains(f64::MIN));
        assert!(Bounds::new(Some(5.0), None).contains(f64::MAX));
        assert!(Bounds::default().contains(0.0));
    }

    #[test]
    fn unparseable_tokens_are_skipped() {
        let tokens = ["12", "nope", "3.5"].map(String::from);
        assert_eq!(within_bounds(tokens, Bounds::default()), [12.0, 3.5]);
    }

    #[test]
    fn order_and_duplicates_survive() {
        let tokens = ["7", "3", "7"].map(String::from);
        assert_eq!(within_bounds(tokens, Bounds::default()), [7.0, 3.0, 7.0]);
    }

    #[test]
    fn filtering_never_grows_the_sequence() {
        let tokens: Vec<String> = ["1", "x", "2", "3"].map(String::from).to_vec();
        let kept = within_bounds(tokens.clone(), Bounds::new(Some(2.0), None));
        assert!(kept.len() <= tokens.len());
        assert_eq!(kept, [2.0, 3.0]);
    }
}
