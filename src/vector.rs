//! Vector type and operations

use serde::{Deserialize, Serialize};

/// A vector in n-dimensional space. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Create a new vector from a Vec<f64>
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Get the dimension of the vector
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Get the underlying data as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Check if this vector has the same dimension as another
    pub fn has_same_dimension(&self, other: &Vector) -> bool {
        self.dimension() == other.dimension()
    }

    /// Compute the L2 norm (magnitude) of the vector
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_vector_norm() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_relative_eq!(v.norm(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_same_dimension() {
        let v1 = Vector::new(vec![1.0, 2.0]);
        let v2 = Vector::new(vec![3.0, 4.0]);
        let v3 = Vector::new(vec![1.0]);
        assert!(v1.has_same_dimension(&v2));
        assert!(!v1.has_same_dimension(&v3));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector::new(vec![1.0, -2.5]).is_finite());
        assert!(!Vector::new(vec![1.0, f64::NAN]).is_finite());
        assert!(!Vector::new(vec![f64::INFINITY]).is_finite());
    }

    #[test]
    fn test_from_vec() {
        let v: Vector = vec![1.0, 2.0].into();
        assert_eq!(v.dimension(), 2);
    }
}
