use granska_core::error::GranskaError;
use granska_core::AnalysisRecord;

pub fn print(record: &AnalysisRecord) -> Result<(), GranskaError> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{json}");
    Ok(())
}
