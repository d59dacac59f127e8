use crate::analyzers::dictation::phrases_for_age;
use anyhow::Result;

/// Print the age-appropriate dictation phrase set as JSON.
pub fn print_phrases(age: u32) -> Result<()> {
    let phrases = phrases_for_age(age)?;
    let payload = serde_json::json!({
        "age": age,
        "phrases": phrases,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
