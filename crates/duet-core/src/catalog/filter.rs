//! Typed product filter with explicit validation.
//!
//! Filter input arrives from the conversational layer as loose JSON. It is
//! validated into a `ProductFilter` up front so callers can tell a bad query
//! apart from a query with no matches.

use super::model::Product;
use serde_json::Value;
use thiserror::Error;

/// Validation errors for filter input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("filters must be a JSON object")]
    NotAnObject,
    #[error("max_price must be an integer, got '{got}'")]
    InvalidMaxPrice { got: String },
    #[error("unknown filter key '{key}'")]
    UnknownKey { key: String },
}

/// Product filter; all fields optional, combined with logical AND.
///
/// String fields are compared case-insensitively for exact equality.
/// `max_price` is an inclusive upper bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub max_price: Option<i64>,
}

impl ProductFilter {
    /// Parses a filter from loose JSON.
    ///
    /// `null` and the empty object both mean "no filter". Recognized keys
    /// are `category`, `color`, `size` and `max_price`; `max_price` accepts
    /// a JSON integer or a numeric string (conversational layers often send
    /// numbers as strings). Anything else is a typed validation error.
    pub fn from_value(value: &Value) -> Result<Self, FilterError> {
        let obj = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(obj) => obj,
            _ => return Err(FilterError::NotAnObject),
        };

        let mut filter = Self::default();
        for (key, v) in obj {
            match key.as_str() {
                "category" => filter.category = non_empty_string(v),
                "color" => filter.color = non_empty_string(v),
                "size" => filter.size = non_empty_string(v),
                "max_price" => filter.max_price = parse_max_price(v)?,
                _ => {
                    return Err(FilterError::UnknownKey { key: key.clone() });
                }
            }
        }
        Ok(filter)
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when `product` satisfies every set predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if !product.color.eq_ignore_ascii_case(color) {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if !product.size.eq_ignore_ascii_case(size) {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }
        true
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_max_price(value: &Value) -> Result<Option<i64>, FilterError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| FilterError::InvalidMaxPrice {
                got: n.to_string(),
            }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| FilterError::InvalidMaxPrice {
                    got: s.clone(),
                })
        }
        other => Err(FilterError::InvalidMaxPrice {
            got: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(category: &str, color: &str, size: &str, price: i64) -> Product {
        Product {
            id: "p1".to_string(),
            name: "test".to_string(),
            category: category.to_string(),
            color: color.to_string(),
            size: size.to_string(),
            price,
            currency: "INR".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_parse_full_filter() {
        let filter = ProductFilter::from_value(&json!({
            "category": "Hoodie", "color": "black", "size": "m", "max_price": 1500
        }))
        .unwrap();
        assert_eq!(filter.category.as_deref(), Some("Hoodie"));
        assert_eq!(filter.max_price, Some(1500));
    }

    #[test]
    fn test_null_and_empty_object_mean_no_filter() {
        assert!(ProductFilter::from_value(&Value::Null).unwrap().is_empty());
        assert!(ProductFilter::from_value(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_max_price_accepts_numeric_string() {
        let filter = ProductFilter::from_value(&json!({"max_price": "1500"})).unwrap();
        assert_eq!(filter.max_price, Some(1500));
    }

    #[test]
    fn test_malformed_max_price_is_a_typed_error() {
        let err = ProductFilter::from_value(&json!({"max_price": "cheap"})).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidMaxPrice {
                got: "cheap".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ProductFilter::from_value(&json!({"brand": "acme"})).unwrap_err();
        assert!(matches!(err, FilterError::UnknownKey { .. }));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert_eq!(
            ProductFilter::from_value(&json!("hoodie")).unwrap_err(),
            FilterError::NotAnObject
        );
    }

    #[test]
    fn test_matches_is_case_insensitive_and_inclusive() {
        let p = product("Hoodie", "Black", "M", 1500);
        let filter = ProductFilter {
            category: Some("hoodie".to_string()),
            color: Some("BLACK".to_string()),
            size: None,
            max_price: Some(1500),
        };
        assert!(filter.matches(&p));

        let over = product("Hoodie", "Black", "M", 1501);
        assert!(!filter.matches(&over));
    }
}
