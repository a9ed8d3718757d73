use granska_core::error::GranskaError;
use std::path::Path;

pub fn run(taxonomy_path: Option<&Path>) -> Result<(), GranskaError> {
    let taxonomy = super::load_taxonomy(taxonomy_path)?;
    let fields = taxonomy.fields();

    let id_width = fields.iter().map(|f| f.id.len()).max().unwrap_or(10);

    println!("Available job fields:\n");
    for field in &fields {
        println!(
            "  {:<width$}  {} ({} core skills)",
            field.id,
            field.name,
            field.skills_count,
            width = id_width
        );
    }
    println!();

    Ok(())
}
