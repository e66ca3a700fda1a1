/// Softmax over `logits`, then the index and probability of the winner.
/// `None` for an empty slice or non-finite input.
pub(crate) fn softmax_argmax(logits: &[f32]) -> Option<(usize, f32)> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return None;
    }
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return None;
    }
    exps.iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(idx, &e)| (idx, e / sum))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_logit() {
        let (idx, prob) = softmax_argmax(&[0.1, 2.0, -1.0]).unwrap();
        assert_eq!(idx, 1);
        assert!(prob > 0.5 && prob <= 1.0);
    }

    #[test]
    fn equal_logits_give_uniform_probability() {
        let (_, prob) = softmax_argmax(&[1.0, 1.0, 1.0]).unwrap();
        assert!((prob - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn large_logits_do_not_overflow() {
        let (idx, prob) = softmax_argmax(&[1000.0, 10.0, 0.0]).unwrap();
        assert_eq!(idx, 0);
        assert!((prob - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_or_nan_input_has_no_winner() {
        assert!(softmax_argmax(&[]).is_none());
        assert!(softmax_argmax(&[f32::NAN, f32::NAN]).is_none());
    }
}
