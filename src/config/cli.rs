use crate::config::toml_config::TomlConfig;
use crate::core::calculators::{FinanceDrill, PatternDrill, ReminderDrill};
use crate::core::datetime::{FutureDateDrill, NowDrill};
use crate::core::exceptions::{ReadFileDrill, ValueCheckDrill};
use crate::core::objects::{
    AreaDrill, BookDrill, CarDrill, CatalogDrill, DogDrill, PersonDrill, PhoneDrill, ShapeSpec,
    ZooDrill,
};
use crate::core::square::SquareDrill;
use crate::core::Drill;
use crate::domain::model::Book;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-drills")]
#[command(about = "Small interactive drills: exceptions, traits, composition and control flow")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Values left out on the command line are prompted for interactively.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print a file, reporting a missing file instead of failing
    ReadFile {
        #[arg(long)]
        path: Option<String>,
    },
    /// Accept a number unless it is above the configured limit
    CheckValue {
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Monthly savings and a one-year projection with interest
    Finance {
        #[arg(long, allow_hyphen_values = true)]
        income: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        expenses: Option<String>,
    },
    /// Show the current local date and time
    Now,
    /// Add a number of days to today's date
    FutureDate {
        #[arg(long, allow_hyphen_values = true)]
        days: Option<String>,
    },
    /// Draw a square block of glyphs
    Pattern {
        #[arg(long, allow_hyphen_values = true)]
        size: Option<String>,
    },
    /// Pick a reminder message by priority and urgency
    Reminder {
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        time_bound: Option<String>,
    },
    /// Compute the area of a shape
    Area {
        #[command(subcommand)]
        shape: ShapeCommand,
    },
    /// Let every animal in the zoo speak
    Zoo {
        #[arg(long)]
        lion: Vec<String>,
        #[arg(long)]
        elephant: Vec<String>,
    },
    /// Compare a generic animal with a dog
    Dog,
    /// Start a car through its engine
    Car,
    /// List products and the total stock value
    Catalog {
        /// CSV file with a name,price,quantity header
        #[arg(long)]
        file: Option<String>,
    },
    /// Register a phone product line
    Phone {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value_t = 0)]
        quantity: u32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        broken: i64,
    },
    /// Show the display and debug forms of a book
    Book {
        #[arg(long, default_value = "The Great Gatsby")]
        title: String,
        #[arg(long, default_value = "F. Scott Fitzgerald")]
        author: String,
        #[arg(long, default_value_t = 180)]
        pages: u32,
    },
    /// Create a person, show it, then release it with a farewell
    Person {
        #[arg(long, default_value = "Alice")]
        name: String,
        #[arg(long, default_value_t = 30)]
        age: u32,
    },
    /// Square a number, rejecting non-numeric input
    Square {
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ShapeCommand {
    Rectangle {
        #[arg(long, allow_hyphen_values = true)]
        length: f64,
        #[arg(long, allow_hyphen_values = true)]
        width: f64,
    },
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
    },
}

impl From<ShapeCommand> for ShapeSpec {
    fn from(command: ShapeCommand) -> Self {
        match command {
            ShapeCommand::Rectangle { length, width } => ShapeSpec::Rectangle { length, width },
            ShapeCommand::Circle { radius } => ShapeSpec::Circle { radius },
        }
    }
}

impl CliConfig {
    /// Loads and validates the settings file, or falls back to defaults.
    pub fn load_settings(&self) -> Result<TomlConfig> {
        let settings = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Commands {
    pub fn into_drill(self, settings: &TomlConfig, now: NaiveDateTime) -> Box<dyn Drill> {
        match self {
            Commands::ReadFile { path } => Box::new(ReadFileDrill { path }),
            Commands::CheckValue { value } => Box::new(ValueCheckDrill {
                value,
                max_value: settings.limits.max_value,
            }),
            Commands::Finance { income, expenses } => Box::new(FinanceDrill {
                income,
                expenses,
                finance: settings.finance.clone(),
            }),
            Commands::Now => Box::new(NowDrill { now }),
            Commands::FutureDate { days } => Box::new(FutureDateDrill { days, now }),
            Commands::Pattern { size } => Box::new(PatternDrill {
                size,
                glyph: settings.glyph(),
            }),
            Commands::Reminder {
                task,
                priority,
                time_bound,
            } => Box::new(ReminderDrill {
                task,
                priority,
                time_bound,
            }),
            Commands::Area { shape } => Box::new(AreaDrill {
                shape: shape.into(),
            }),
            Commands::Zoo { lion, elephant } => Box::new(ZooDrill {
                lions: lion,
                elephants: elephant,
            }),
            Commands::Dog => Box::new(DogDrill),
            Commands::Car => Box::new(CarDrill),
            Commands::Catalog { file } => Box::new(CatalogDrill {
                file,
                products: settings.catalog.products.clone(),
            }),
            Commands::Phone {
                name,
                price,
                quantity,
                broken,
            } => Box::new(PhoneDrill {
                name,
                price,
                quantity,
                broken_phones: broken,
            }),
            Commands::Book {
                title,
                author,
                pages,
            } => Box::new(BookDrill {
                book: Book::new(title, author, pages),
            }),
            Commands::Person { name, age } => Box::new(PersonDrill { name, age }),
            Commands::Square { value } => Box::new(SquareDrill { value }),
        }
    }
}
