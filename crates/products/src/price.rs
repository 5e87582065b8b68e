use productapi_core::{DomainError, DomainResult};

/// Unit price of a product.
///
/// Always finite and non-negative; the only way to get one is through
/// [`Price::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price must be greater than or equal to 0"));
        }
        // Normalise -0.0 so it never leaks into responses.
        Ok(Self(value + 0.0))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive_prices() {
        assert_eq!(Price::new(0.0).unwrap().amount(), 0.0);
        assert_eq!(Price::new(9.99).unwrap().amount(), 9.99);
    }

    #[test]
    fn rejects_negative_prices() {
        let err = Price::new(-0.01).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_finite_prices() {
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }

    #[test]
    fn negative_zero_is_normalised() {
        let price = Price::new(-0.0).unwrap();
        assert!(price.amount().is_sign_positive());
    }
}
