use crate::core::PcpError;

/// Round a number to the given number of decimal places.
///
/// # Arguments
///
/// * `value`: The number to round.
/// * `decimals`: The number of decimal places.
///
/// returns: `f64`
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate the vector minimum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, PcpError>`
pub fn vector_min(v: &[f64]) -> Result<f64, PcpError> {
    Ok(*v
        .iter()
        .min_by(|a, b| a.total_cmp(b))
        .ok_or(PcpError::Generic(
            "Cannot calculate vector min value".to_string(),
        ))?)
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, PcpError>`
pub fn vector_max(v: &[f64]) -> Result<f64, PcpError> {
    Ok(*v
        .iter()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(PcpError::Generic(
            "Cannot calculate vector max value".to_string(),
        ))?)
}

#[cfg(test)]
mod test {
    use crate::core::utils::{round_to, vector_max, vector_min};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(0.125, 1), 0.1);
        assert_eq!(round_to(-3.456, 2), -3.46);
    }

    #[test]
    fn test_min_max() {
        let v = vec![99.0, 11.0, 456.2, 19.0, 0.5];
        assert_eq!(vector_min(&v).unwrap(), 0.5);
        assert_eq!(vector_max(&v).unwrap(), 456.2);
        assert!(vector_min(&[]).is_err());
    }
}
