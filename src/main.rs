use anyhow::{Context, Result};
use diet_advisor::advisor::{Advice, AdviceRequest, DietAdvisor};
use diet_advisor::api_connection::{
    build_http_client, GoogleSpeech, GoogleTranslator, NutritionixClient, OpenAiChat,
};
use diet_advisor::cli::{parse_args, Cli};
use diet_advisor::config::AppConfig;
use diet_advisor::estimator::BodyProfile;
use diet_advisor::recommendation::describe_balance;
use tokio::fs;
use tracing_subscriber::EnvFilter;

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("diet_advisor=info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_advisor(cli: &Cli, config: &AppConfig) -> Result<DietAdvisor> {
    let client = build_http_client(config.http_timeout).context("Failed to build HTTP client")?;

    let mut advisor = DietAdvisor::new(
        Box::new(NutritionixClient::new(client.clone(), config.nutritionix.clone())),
        Box::new(OpenAiChat::new(client.clone(), config.openai.clone())),
    );

    if !cli.no_translate {
        let google = config
            .require_google()
            .context("Translation needs a Google API key (or pass --no-translate)")?;
        advisor = advisor.with_translator(Box::new(GoogleTranslator::new(client.clone(), google.clone())));
    }
    if cli.speak.is_some() {
        let google = config
            .require_google()
            .context("Speech output needs a Google API key")?;
        advisor = advisor.with_speech(Box::new(GoogleSpeech::new(client, google.clone())));
    }
    Ok(advisor)
}

fn print_advice(advice: &Advice) {
    println!("BMR: {:.2} kcal", advice.bmr);
    println!("Recommended daily intake: {:.2} kcal", advice.daily_calories);
    println!();
    for lookup in &advice.lookups {
        match (&lookup.record, &lookup.failure) {
            (Some(record), _) => println!(
                "  - {}: {:.1} kcal, carbs {:.1} g, protein {:.1} g, fat {:.1} g",
                lookup.item, record.calories, record.carbs_g, record.protein_g, record.fat_g
            ),
            (None, Some(failure)) => println!("  - {}: not found ({})", lookup.item, failure),
            (None, None) => println!("  - {}: not found", lookup.item),
        }
    }
    println!(
        "Total: {:.2} kcal (carbs {:.2} g, protein {:.2} g, fat {:.2} g)",
        advice.totals.calories, advice.totals.carbs_g, advice.totals.protein_g, advice.totals.fat_g
    );
    println!("Balance: {}", describe_balance(&advice.totals, advice.daily_calories));
    let unresolved = advice.unresolved();
    if !unresolved.is_empty() {
        println!("Excluded from totals: {}", unresolved.join(", "));
    }
    println!();
    println!("<Personalized feedback>");
    println!("{}", advice.text);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;

    let cli = parse_args();
    let profile = BodyProfile::validated(cli.weight, cli.height, cli.age, cli.sex)
        .context("Invalid body metrics")?;

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let advisor = build_advisor(&cli, &config)?;

    let request = AdviceRequest {
        profile,
        activity: cli.activity,
        food_text: cli.foods.clone(),
        language: cli.language.clone(),
    };
    let advice = advisor
        .advise(&request)
        .await
        .context("Failed to generate recommendation")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print_advice(&advice);
    }

    if let Some(path) = &cli.speak {
        let audio = advisor.speak(&advice, &cli.language).await?;
        fs::write(path, &audio)
            .await
            .with_context(|| format!("Failed to write audio to '{}'", path.display()))?;
        eprintln!("Audio written to {}", path.display());
    }

    Ok(())
}
