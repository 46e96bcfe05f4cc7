use akal_core::{parser::format_date, Address, CollectionPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let street = args.next().unwrap_or_else(|| "Kaiserstraße".to_string());
    let nr = args.next().unwrap_or_else(|| "12".to_string());

    let address = Address::from_query(Some(&street), Some(&nr))?;
    let pipeline = CollectionPipeline::new()?;

    println!("Abfuhrtermine für {} {}:\n", address.street, address.house_nr);

    let entries = pipeline.run(&address).await?;
    for entry in &entries {
        match &entry.period {
            Some(period) => println!("{} ({})", entry.name, period),
            None => println!("{}", entry.name),
        }
        for date in &entry.dates {
            println!("  • {}", format_date(*date));
        }
    }

    println!("\n{} Abfallarten gefunden.", entries.len());
    Ok(())
}
