use anyhow::Result;
use lesson_drills::core::objects::{
    AreaDrill, BookDrill, CarDrill, CatalogDrill, DogDrill, PersonDrill, PhoneDrill, ShapeSpec,
    ZooDrill,
};
use lesson_drills::core::square::SquareDrill;
use lesson_drills::domain::model::{Book, Product};
use lesson_drills::{Drill, DrillError, DrillRunner, ScriptedConsole, TomlConfig};
use tempfile::TempDir;

fn run(drill: &dyn Drill) -> Result<Vec<String>> {
    let mut console = ScriptedConsole::default();
    drill.run(&mut console)?;
    Ok(console.lines().to_vec())
}

#[test]
fn test_area_drills() -> Result<()> {
    let lines = run(&AreaDrill {
        shape: ShapeSpec::Rectangle {
            length: 3.0,
            width: 4.5,
        },
    })?;
    assert_eq!(lines, vec!["Rectangle area: 13.50"]);

    let lines = run(&AreaDrill {
        shape: ShapeSpec::Circle { radius: 1.0 },
    })?;
    assert_eq!(lines, vec!["Circle area: 3.14"]);
    Ok(())
}

#[test]
fn test_area_rejects_negative_dimension() {
    let drill = AreaDrill {
        shape: ShapeSpec::Circle { radius: -1.0 },
    };
    let mut console = ScriptedConsole::default();
    let err = drill.run(&mut console).unwrap_err();
    assert!(matches!(err, DrillError::ValidationError { .. }));
    assert!(console.lines().is_empty());
}

#[test]
fn test_default_zoo() -> Result<()> {
    let lines = run(&ZooDrill {
        lions: vec![],
        elephants: vec![],
    })?;
    assert_eq!(lines, vec!["Simba the lion roars", "Julia the elephant trumpets"]);
    Ok(())
}

#[test]
fn test_custom_zoo() -> Result<()> {
    let lines = run(&ZooDrill {
        lions: vec!["Nala".to_string()],
        elephants: vec!["Dumbo".to_string(), "Babar".to_string()],
    })?;
    assert_eq!(
        lines,
        vec![
            "Nala the lion roars",
            "Dumbo the elephant trumpets",
            "Babar the elephant trumpets",
        ]
    );
    Ok(())
}

#[test]
fn test_dog_drill() -> Result<()> {
    let lines = run(&DogDrill)?;
    assert_eq!(
        lines,
        vec![
            "The animal is eating.",
            "The animal is sleeping.",
            "",
            "The dog is eating.",
            "The dog is sleeping.",
            "The dog is barking.",
        ]
    );
    Ok(())
}

#[test]
fn test_car_drill() -> Result<()> {
    assert_eq!(run(&CarDrill)?, vec!["Engine starting..."]);
    Ok(())
}

#[test]
fn test_default_catalog() -> Result<()> {
    let lines = run(&CatalogDrill {
        file: None,
        products: TomlConfig::default().catalog.products,
    })?;
    assert_eq!(
        lines,
        vec![
            "Laptop: $1200.00 x 5 units = $6000.00",
            "Smartphone: $800.00 x 10 units = $8000.00",
            "Total catalog value: $14000.00",
        ]
    );
    Ok(())
}

#[test]
fn test_catalog_from_csv_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("stock.csv");
    std::fs::write(&path, "name,price,quantity\nCable,9.99,10\nCharger,19.5,2\n")?;

    let lines = run(&CatalogDrill {
        file: Some(path.to_str().unwrap().to_string()),
        products: vec![Product::new("Ignored", 1.0, 1)],
    })?;
    assert_eq!(
        lines,
        vec![
            "Cable: $9.99 x 10 units = $99.90",
            "Charger: $19.50 x 2 units = $39.00",
            "Total catalog value: $138.90",
        ]
    );
    Ok(())
}

#[test]
fn test_catalog_rejects_non_csv_file() {
    let drill = CatalogDrill {
        file: Some("stock.json".to_string()),
        products: vec![],
    };
    let mut console = ScriptedConsole::default();
    assert!(matches!(
        drill.run(&mut console),
        Err(DrillError::InvalidConfigValueError { .. })
    ));
}

#[test]
fn test_phone_drill() -> Result<()> {
    let lines = run(&PhoneDrill {
        name: "iPhone".to_string(),
        price: 500.0,
        quantity: 2,
        broken_phones: 1,
    })?;
    assert_eq!(lines, vec!["Phone iPhone: $500.00 x 2 units = $1000.00 (1 broken)"]);
    Ok(())
}

#[test]
fn test_phone_with_negative_broken_count_aborts() {
    let runner = DrillRunner::new(Box::new(PhoneDrill {
        name: "iPhone".to_string(),
        price: 500.0,
        quantity: 2,
        broken_phones: -3,
    }));
    let mut console = ScriptedConsole::default();

    let err = runner.run(&mut console).unwrap_err();
    assert!(matches!(err, DrillError::ValidationError { .. }));
    assert_eq!(err.severity(), lesson_drills::utils::error::ErrorSeverity::High);
    assert_eq!(err.severity().exit_code(), 1);
    assert!(console.lines().is_empty());
}

#[test]
fn test_book_drill() -> Result<()> {
    let lines = run(&BookDrill {
        book: Book::new("The Great Gatsby", "F. Scott Fitzgerald", 180),
    })?;
    assert_eq!(
        lines,
        vec![
            "'The Great Gatsby' by F. Scott Fitzgerald, 180 pages",
            "Book(title='The Great Gatsby', author='F. Scott Fitzgerald', pages=180)",
        ]
    );
    Ok(())
}

#[test]
fn test_person_drill() -> Result<()> {
    let lines = run(&PersonDrill {
        name: "Alice".to_string(),
        age: 30,
    })?;
    assert_eq!(
        lines,
        vec![
            "Name: Alice",
            "Age: 30",
            "Goodbye Alice, you were 30 years old. The object is being deleted.",
        ]
    );
    Ok(())
}

#[test]
fn test_square_drill() -> Result<()> {
    let mut console = ScriptedConsole::new(["-4"]);
    SquareDrill { value: None }.run(&mut console)?;
    assert_eq!(console.prompts(), &["Enter a number to square: "]);
    assert_eq!(console.lines(), &["-4 squared is 16"]);

    let lines = run(&SquareDrill {
        value: Some("hello".to_string()),
    })?;
    assert_eq!(
        lines,
        vec!["Error: unsupported operand type for square: 'hello'"]
    );
    Ok(())
}
