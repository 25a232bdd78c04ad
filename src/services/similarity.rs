use crate::models::{MovieId, RatingTable};

/// Minimum number of co-raters for a correlation to be defined
pub const MIN_CO_RATERS: usize = 2;

/// Pearson correlation coefficient between two paired samples.
///
/// Returns `None` when fewer than two pairs are available or when either
/// sample has zero variance; correlation is mathematically undefined in both
/// cases and an explicit branch keeps the division-by-zero from surfacing as
/// NaN. Defined results are clamped into [-1, 1] against floating-point
/// rounding.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < MIN_CO_RATERS {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (covariance, var_x, var_y) =
        xs.iter()
            .zip(ys.iter())
            .fold((0.0, 0.0, 0.0), |(cov, vx, vy), (&x, &y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (cov + dx * dy, vx + dx * dx, vy + dy * dy)
            });

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Similarity between two movies' rating patterns.
///
/// Restricts both rating columns to the users who rated both movies, then
/// correlates the restricted vectors with [`pearson`]. A movie is never
/// similar to itself: self-pairs are undefined so a movie cannot back its own
/// prediction. Symmetric in its movie arguments and a pure read of the table.
pub fn movie_similarity(table: &RatingTable, a: MovieId, b: MovieId) -> Option<f64> {
    if a == b {
        return None;
    }

    let column_a = table.ratings_for(a)?;
    let column_b = table.ratings_for(b)?;

    // Intersect from the smaller column
    let (small, large, swapped) = if column_a.len() <= column_b.len() {
        (column_a, column_b, false)
    } else {
        (column_b, column_a, true)
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (user, &rating) in small {
        if let Some(&other) = large.get(user) {
            if swapped {
                xs.push(other);
                ys.push(rating);
            } else {
                xs.push(rating);
                ys.push(other);
            }
        }
    }

    pearson(&xs, &ys)
}
