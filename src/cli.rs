use clap::Parser;
use std::path::PathBuf;

use crate::estimator::{ActivityLevel, Sex};

pub const DEFAULT_FOODS: &str = "떡볶이 1인분, 순대 1인분, 라면 1인분";

/// Personalized diet and exercise recommendation from body metrics and a food list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Body weight in kg
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Height in cm
    #[arg(long, default_value_t = 170.0)]
    pub height: f64,

    /// Age in years
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// male or female (남성 / 여성 also accepted)
    #[arg(long, default_value = "male")]
    pub sex: Sex,

    /// sedentary, moderate or active (낮음 / 보통 / 높음 also accepted)
    #[arg(short, long, default_value = "sedentary")]
    pub activity: ActivityLevel,

    /// Comma-separated list of foods the user wants to eat
    #[arg(short, long, default_value = DEFAULT_FOODS)]
    pub foods: String,

    /// Language of the recommendation (and of the spoken audio)
    #[arg(short, long, default_value = "ko")]
    pub language: String,

    /// Look the food names up as typed instead of translating them to English first
    #[arg(long)]
    pub no_translate: bool,

    /// Also synthesize the recommendation as MP3 and write it here
    #[arg(long, value_name = "FILE")]
    pub speak: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
