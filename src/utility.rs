/// The first item with the highest score. Later items must score strictly
/// higher to replace the current best.
pub fn first_max_by<T, I, F>(items: I, mut score: F) -> Option<(T, f64)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;

    for item in items {
        let value = score(&item);
        if best.as_ref().map_or(true, |(_, best_value)| value > *best_value) {
            best = Some((item, value));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_of_equal_scores() {
        let best = first_max_by(vec!["a", "bb", "cc"], |s| s.len() as f64);
        assert_eq!(best, Some(("bb", 2.0)));
    }

    #[test]
    fn empty_input_has_no_best() {
        assert_eq!(first_max_by(Vec::<u8>::new(), |_| 0.0), None);
    }
}
