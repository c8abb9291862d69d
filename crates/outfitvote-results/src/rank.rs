use outfitvote_core::models::Outfit;

/// Outfits ordered by votes, highest first.
///
/// The sort is stable: outfits with equal tallies keep their original
/// relative order, which also makes `rank` idempotent.
pub fn rank(outfits: &[Outfit]) -> Vec<Outfit> {
    let mut ranked = outfits.to_vec();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked
}

/// Sum of all tallies. Not clamped; downvotes can make it negative.
///
/// Summed as `i128`, so any number of `i64` tallies fits.
pub fn total_votes(outfits: &[Outfit]) -> i128 {
    outfits.iter().map(|o| i128::from(o.votes)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use outfitvote_core::models::{Day, ImageRef};

    fn outfit(name: &str, votes: i64) -> Outfit {
        Outfit {
            votes,
            ..Outfit::new(name, Day::Monday, ImageRef::url("x.jpg"))
        }
    }

    #[test]
    fn empty_input() {
        assert!(rank(&[]).is_empty());
        assert_eq!(total_votes(&[]), 0);
    }

    #[test]
    fn extreme_tallies_do_not_overflow_the_total() {
        let outfits = [outfit("A", i64::MAX), outfit("B", i64::MAX)];
        assert_eq!(total_votes(&outfits), 2 * i128::from(i64::MAX));

        let outfits = [outfit("A", i64::MIN), outfit("B", i64::MIN)];
        assert_eq!(total_votes(&outfits), 2 * i128::from(i64::MIN));
    }

    #[test]
    fn negative_totals_are_not_clamped() {
        let outfits = [outfit("A", -3), outfit("B", 1)];
        assert_eq!(total_votes(&outfits), -2);
        assert_eq!(rank(&outfits)[0].name, "B");
    }
}
