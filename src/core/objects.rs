use crate::core::{Console, Drill};
use crate::domain::animals::{Animal, Dog, Elephant, GenericAnimal, Lion};
use crate::domain::model::{Book, Car, Catalog, Engine, Person, Phone, Product};
use crate::domain::shapes::{Circle, Rectangle, Shape};
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_non_negative, validate_path};
use std::fs::File;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

impl ShapeSpec {
    pub fn build(self) -> Result<Box<dyn Shape>> {
        match self {
            ShapeSpec::Rectangle { length, width } => {
                validate_non_negative("length", length)?;
                validate_non_negative("width", width)?;
                Ok(Box::new(Rectangle::new(length, width)))
            }
            ShapeSpec::Circle { radius } => {
                validate_non_negative("radius", radius)?;
                Ok(Box::new(Circle::new(radius)))
            }
        }
    }
}

pub struct AreaDrill {
    pub shape: ShapeSpec,
}

impl Drill for AreaDrill {
    fn name(&self) -> &'static str {
        "area"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let shape = self.shape.build()?;
        let area = shape.area()?;
        console.say(&format!("{} area: {:.2}", shape.type_name(), area))
    }
}

pub struct ZooDrill {
    pub lions: Vec<String>,
    pub elephants: Vec<String>,
}

impl ZooDrill {
    pub fn zoo(&self) -> Vec<Box<dyn Animal>> {
        if self.lions.is_empty() && self.elephants.is_empty() {
            return vec![Box::new(Lion::new("Simba")), Box::new(Elephant::new("Julia"))];
        }

        let lions = self
            .lions
            .iter()
            .map(|name| Box::new(Lion::new(name.as_str())) as Box<dyn Animal>);
        let elephants = self
            .elephants
            .iter()
            .map(|name| Box::new(Elephant::new(name.as_str())) as Box<dyn Animal>);
        lions.chain(elephants).collect()
    }
}

impl Drill for ZooDrill {
    fn name(&self) -> &'static str {
        "zoo"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        for animal in self.zoo() {
            if let Some(line) = animal.speak() {
                console.say(&line)?;
            }
        }
        Ok(())
    }
}

pub struct DogDrill;

impl Drill for DogDrill {
    fn name(&self) -> &'static str {
        "dog"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let animal = GenericAnimal;
        console.say(&animal.eat())?;
        console.say(&animal.sleep())?;

        console.say("")?;

        let dog = Dog;
        console.say(&dog.eat())?;
        console.say(&dog.sleep())?;
        console.say(&dog.bark())
    }
}

pub struct CarDrill;

impl Drill for CarDrill {
    fn name(&self) -> &'static str {
        "car"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let car = Car::new(Engine);
        console.say(car.start())
    }
}

pub struct CatalogDrill {
    pub file: Option<String>,
    pub products: Vec<Product>,
}

impl CatalogDrill {
    pub fn load(&self) -> Result<Catalog> {
        match &self.file {
            Some(path) => {
                validate_path("catalog_file", path)?;
                validate_file_extension("catalog_file", path, &["csv"])?;
                tracing::info!("📁 Loading catalog from: {}", path);
                Catalog::from_csv_reader(File::open(path)?)
            }
            None => Ok(Catalog::new(self.products.clone())),
        }
    }
}

impl Drill for CatalogDrill {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let catalog = self.load()?;
        tracing::debug!("Catalog has {} products", catalog.products.len());

        for product in &catalog.products {
            console.say(&product.to_string())?;
        }
        console.say(&format!("Total catalog value: ${:.2}", catalog.total_value()))
    }
}

pub struct PhoneDrill {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub broken_phones: i64,
}

impl Drill for PhoneDrill {
    fn name(&self) -> &'static str {
        "phone"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let phone = Phone::new(self.name.as_str(), self.price, self.quantity, self.broken_phones)?;
        console.say(&phone.to_string())
    }
}

pub struct BookDrill {
    pub book: Book,
}

impl Drill for BookDrill {
    fn name(&self) -> &'static str {
        "book"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.say(&self.book.to_string())?;
        console.say(&format!("{:?}", self.book))
    }
}

pub struct PersonDrill {
    pub name: String,
    pub age: u32,
}

impl Drill for PersonDrill {
    fn name(&self) -> &'static str {
        "person"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let person = Person::new(self.name.as_str(), self.age);
        console.say(&format!("Name: {}", person.name))?;
        console.say(&format!("Age: {}", person.age))?;
        console.say(&person.farewell())
    }
}
