//! Client review statistics.

use crate::models::Review;

/// Review count per star rating, five stars first.
pub fn rating_distribution(reviews: &[Review]) -> [(u8, usize); 5] {
    [5, 4, 3, 2, 1].map(|stars| {
        let count = reviews.iter().filter(|r| r.rating == stars).count();
        (stars, count)
    })
}

/// Share of `total` that `count` represents. No reviews is 0%.
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Five-star strip with `rating` stars filled
pub fn star_string(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn review(rating: u8) -> Review {
        Review {
            id: format!("r{}", rating),
            author: "A.".to_string(),
            rating,
            date: "June 2, 2025".to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn test_rating_distribution_counts_each_star() {
        let reviews: Vec<Review> = [5, 5, 4, 5, 3, 1].into_iter().map(review).collect();
        assert_eq!(
            rating_distribution(&reviews),
            [(5, 3), (4, 1), (3, 1), (2, 0), (1, 1)]
        );
    }

    #[test]
    fn test_rating_distribution_ignores_out_of_range_ratings() {
        let reviews = vec![review(0), review(6), review(4)];
        let total: usize = rating_distribution(&reviews).iter().map(|(_, n)| n).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(3, 6), 50.0);
        assert_eq!(share_percent(0, 0), 0.0);
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string(4), "★★★★☆");
        assert_eq!(star_string(9), "★★★★★");
        assert_eq!(star_string(0), "☆☆☆☆☆");
    }
}
