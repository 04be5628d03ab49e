use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_non_negative;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stocked item: unit price and number of units on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2} x {} units = ${:.2}",
            self.name,
            self.price,
            self.quantity,
            self.total_value()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 從 CSV 載入商品 (name,price,quantity)
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut products = Vec::new();
        for row in csv_reader.deserialize() {
            let product: Product = row?;
            products.push(product);
        }
        Ok(Self { products })
    }

    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::total_value).sum()
    }
}

/// A product line with a count of units that arrived broken.
#[derive(Debug, Clone, PartialEq)]
pub struct Phone {
    product: Product,
    broken_phones: u32,
}

impl Phone {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32, broken_phones: i64) -> Result<Self> {
        if broken_phones < 0 {
            return Err(DrillError::ValidationError {
                message: format!(
                    "Broken phones {} is not greater than or equal to zero",
                    broken_phones
                ),
            });
        }
        validate_non_negative("Price", price)?;

        let broken_phones = u32::try_from(broken_phones).map_err(|_| DrillError::ValidationError {
            message: format!("Broken phones {} is out of range", broken_phones),
        })?;

        Ok(Self {
            product: Product::new(name, price, quantity),
            broken_phones,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn broken_phones(&self) -> u32 {
        self.broken_phones
    }

    pub fn total_value(&self) -> f64 {
        self.product.total_value()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone {} ({} broken)", self.product, self.broken_phones)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine;

impl Engine {
    pub fn start(&self) -> &'static str {
        "Engine starting..."
    }
}

/// Owns its engine; starting the car starts the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    engine: Engine,
}

impl Car {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn start(&self) -> &'static str {
        self.engine.start()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub pages: u32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {}, {} pages", self.title, self.author, self.pages)
    }
}

// 開發者用的表示法
impl fmt::Debug for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(title='{}', author='{}', pages={})",
            self.title, self.author, self.pages
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Consumes the person and returns the farewell line.
    pub fn farewell(self) -> String {
        format!(
            "Goodbye {}, you were {} years old. The object is being deleted.",
            self.name, self.age
        )
    }
}
