/// Shannon entropy of a weighted candidate distribution
///
/// Computes `H = -Σ p_i·log2(p_i)` where each probability is the candidate's
/// weight divided by the total weight. Returns 0.0 for empty or single-element
/// distributions and when the total weight is not positive, matching the
/// convention that a decided (or undecidable) cell carries no information.
pub fn shannon_entropy(weights: &[f64]) -> f64 {
    if weights.len() <= 1 {
        return 0.0;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &weight in weights {
        let p = weight / total;
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }

    entropy
}

#[cfg(test)]
mod tests {
    use super::shannon_entropy;

    #[test]
    fn test_uniform_distribution_maximizes_entropy() {
        let uniform = shannon_entropy(&[1.0, 1.0, 1.0, 1.0]);
        let skewed = shannon_entropy(&[10.0, 1.0, 1.0, 1.0]);

        assert!((uniform - 2.0).abs() < 1e-12);
        assert!(skewed < uniform);
    }

    #[test]
    fn test_degenerate_distributions_have_zero_entropy() {
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[5.0]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0.0, 0.0]).abs() < f64::EPSILON);
    }
}
