//! Basic usage example for virus-genealogy
//!
//! This example demonstrates:
//! - Creating a genealogy around a stem virus
//! - Adding viruses with one or several parents
//! - Walking children and parents
//! - Removing a virus and watching the cascade

use virus_genealogy::{export, SimpleVirus, Virus, VirusGenealogy};

fn main() -> virus_genealogy::Result<(), String> {
    let stem = "wuhan".to_string();
    let mut genealogy: VirusGenealogy<SimpleVirus<String>> = VirusGenealogy::new(stem.clone());
    println!("Created genealogy with stem: {stem}\n");

    genealogy.create("alpha".to_string(), &stem)?;
    genealogy.create("delta".to_string(), &stem)?;
    genealogy.create("omicron".to_string(), &stem)?;
    println!("✓ Added alpha, delta and omicron from {stem}");

    genealogy.create_with_parents(
        "deltacron".to_string(),
        &["delta".to_string(), "omicron".to_string()],
    )?;
    println!("✓ Added deltacron from delta and omicron");

    genealogy.create("ba.2".to_string(), &"omicron".to_string())?;
    genealogy.connect(&"ba.2".to_string(), &"deltacron".to_string())?;
    println!("✓ Added ba.2 from omicron, later linked to deltacron\n");

    print!("Children of {stem}:");
    for child in genealogy.children(&stem)? {
        print!(" {}", child.id());
    }
    println!();
    println!(
        "Parents of ba.2: {:?}",
        genealogy.get_parents(&"ba.2".to_string())?
    );
    println!(
        "Descendants of omicron: {:?}\n",
        genealogy.descendants(&"omicron".to_string(), None)?
    );

    let removed = genealogy.remove(&"delta".to_string())?;
    println!("Removing delta removed: {removed:?}");
    let removed = genealogy.remove(&"omicron".to_string())?;
    println!("Removing omicron removed: {removed:?}");

    match genealogy.remove(&stem) {
        Ok(_) => println!("Unexpectedly removed the stem"),
        Err(err) => println!("Refused: {err}"),
    }

    println!("\nRemaining genealogy:\n{}", export::export_dot(&genealogy));

    Ok(())
}
