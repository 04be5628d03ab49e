use crate::utils::error::{DrillError, Result};
use std::f64::consts::PI;

pub trait Shape {
    fn type_name(&self) -> &'static str;

    /// Every concrete shape overrides this; the default reports that the
    /// capability is missing instead of producing a value.
    fn area(&self) -> Result<f64> {
        Err(DrillError::NotImplemented {
            operation: "area()",
            type_name: self.type_name(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

impl Shape for Rectangle {
    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn area(&self) -> Result<f64> {
        Ok(self.length * self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn type_name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> Result<f64> {
        Ok(PI * self.radius.powi(2))
    }
}

/// Participates in `Shape` without providing an area.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareShape;

impl Shape for BareShape {
    fn type_name(&self) -> &'static str {
        "Shape"
    }
}
