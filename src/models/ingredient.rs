use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

/// Inclusive bounds for a composition's share sum.
pub const SHARE_SUM_MIN: f64 = 0.99;
pub const SHARE_SUM_MAX: f64 = 1.01;

/// A muscle/organ/heart/bone breakdown. Each share is a fraction in [0, 1];
/// a well-formed composition sums to 1 within ±0.01.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(rename = "Muscle")]
    pub muscle: f64,

    #[serde(rename = "Organ")]
    pub organ: f64,

    #[serde(rename = "Heart")]
    pub heart: f64,

    #[serde(rename = "Bone")]
    pub bone: f64,
}

impl Composition {
    /// Component names, in the fixed muscle/organ/heart/bone order used
    /// everywhere shares are iterated.
    pub const COMPONENTS: [&'static str; 4] = ["muscle", "organ", "heart", "bone"];

    pub fn new(muscle: f64, organ: f64, heart: f64, bone: f64) -> Self {
        Self {
            muscle,
            organ,
            heart,
            bone,
        }
    }

    /// Sum of all four shares.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.muscle + self.organ + self.heart + self.bone
    }

    /// Shares as an array, in `COMPONENTS` order.
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [self.muscle, self.organ, self.heart, self.bone]
    }

    pub fn from_array([muscle, organ, heart, bone]: [f64; 4]) -> Self {
        Self {
            muscle,
            organ,
            heart,
            bone,
        }
    }

    /// Whether the share sum lies inside the inclusive [0.99, 1.01] band.
    pub fn is_normalized(&self) -> bool {
        (SHARE_SUM_MIN..=SHARE_SUM_MAX).contains(&self.sum())
    }
}

/// A candidate feed item: a composition profile plus the weight delivered
/// per unit of the item. After a successful solve it also carries the
/// optimal quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub composition: Composition,

    #[serde(rename = "WeightConversion")]
    pub weight_conversion: f64,

    /// Optimal quantity, set only by `DietProblem::solve`.
    #[serde(skip)]
    pub(crate) quantity: Option<f64>,
}

impl Ingredient {
    pub fn new(name: Option<String>, composition: Composition, weight_conversion: f64) -> Self {
        Self {
            name,
            composition,
            weight_conversion,
            quantity: None,
        }
    }

    /// The solved quantity, absent until a solve succeeds.
    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    /// Weight this ingredient delivers at its solved quantity.
    pub fn delivered_weight(&self) -> Option<f64> {
        self.quantity.map(|q| q * self.weight_conversion)
    }

    /// Check this ingredient in isolation: weight conversion first, then
    /// the share sum, then each individual share.
    pub fn validate(&self) -> Result<()> {
        if self.weight_conversion <= 0.0 {
            return Err(FeedError::OutOfRange {
                field: "weight conversion",
                expected: "greater than 0",
                value: self.weight_conversion,
            });
        }
        if !self.composition.is_normalized() {
            return Err(FeedError::InvalidModel(format!(
                "ingredient shares must sum to between 0.99 and 1.01 (got {:.4})",
                self.composition.sum()
            )));
        }
        for (field, value) in Composition::COMPONENTS
            .into_iter()
            .zip(self.composition.as_array())
        {
            check_share(field, value)?;
        }
        Ok(())
    }
}

impl Default for Ingredient {
    fn default() -> Self {
        Self {
            name: None,
            composition: Composition::default(),
            weight_conversion: 1.0,
            quantity: None,
        }
    }
}

/// Range check shared by ingredient and target shares. Rejects NaN.
pub(crate) fn check_share(field: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(FeedError::OutOfRange {
            field,
            expected: "between 0.0 and 1.0",
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarters() -> Composition {
        Composition::new(0.25, 0.25, 0.25, 0.25)
    }

    #[test]
    fn test_sum_and_array_order() {
        let c = Composition::new(0.1, 0.2, 0.3, 0.4);
        assert!((c.sum() - 1.0).abs() < 1e-12);
        assert_eq!(c.as_array(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(Composition::from_array(c.as_array()), c);
    }

    #[test]
    fn test_sum_band_is_inclusive() {
        assert!(Composition::new(0.99, 0.0, 0.0, 0.0).is_normalized());
        assert!(Composition::new(1.01, 0.0, 0.0, 0.0).is_normalized());
        assert!(!Composition::new(0.9899, 0.0, 0.0, 0.0).is_normalized());
        assert!(!Composition::new(1.0101, 0.0, 0.0, 0.0).is_normalized());
    }

    #[test]
    fn test_validate_checks_weight_conversion_first() {
        // Even with a broken share sum, a bad weight conversion wins.
        let bad = Ingredient::new(None, Composition::new(0.2, 0.0, 0.0, 0.0), 0.0);
        match bad.validate() {
            Err(FeedError::OutOfRange { field, .. }) => assert_eq!(field, "weight conversion"),
            other => panic!("expected weight conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_share_sum() {
        let mut item = Ingredient::new(None, quarters(), 1.0);
        assert!(item.validate().is_ok());

        item.composition.bone = 0.0;
        assert!(matches!(
            item.validate(),
            Err(FeedError::InvalidModel(_))
        ));
    }

    #[test]
    fn test_validate_individual_share_range() {
        let mut item = Ingredient::new(None, Composition::new(1.0, 0.0, 0.0, 0.0), 1.0);
        assert!(item.validate().is_ok());

        item.composition.muscle = 1.0001;
        match item.validate() {
            Err(FeedError::OutOfRange { field, .. }) => assert_eq!(field, "muscle"),
            other => panic!("expected muscle range error, got {:?}", other),
        }
    }

    #[test]
    fn test_quantity_starts_absent() {
        let item = Ingredient::new(Some("Chicken heart".to_string()), quarters(), 0.01);
        assert!(item.quantity().is_none());
        assert!(item.delivered_weight().is_none());
    }
}
