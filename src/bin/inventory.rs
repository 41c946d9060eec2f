//! Menu-driven product inventory over a fixed-size hash table.
//!
//! Products are keyed by code with a modulo hash and linear probing, the
//! classic static-hashing exercise. Malformed input inside an action is
//! reported and drops back to the menu; only choice 7 (or EOF) ends the
//! session.

use anyhow::Result;
use colored::Colorize;
use drills::console;
use drills::hash_table::{InsertOutcome, Product, ProductTable};

fn main() -> Result<()> {
    let mut table = ProductTable::new();

    loop {
        print_menu();
        let choice = match console::prompt_opt("\nEnter your choice: ")? {
            Some(line) => line,
            None => break,
        };

        let outcome = match choice.trim() {
            "1" => insert(&mut table),
            "2" => delete(&mut table),
            "3" => search(&table),
            "4" => update(&mut table),
            "5" => restock(&mut table),
            "6" => {
                display(&table);
                Ok(())
            }
            "7" => {
                println!("Exiting...");
                break;
            }
            _ => {
                println!("{}", "Invalid choice!".red());
                Ok(())
            }
        };

        // Bad field input is terminal for the action, not the session.
        if let Err(err) = outcome {
            println!("{}", format!("Error: {:#}", err).red());
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n========> Product Inventory <========");
    println!("1. Insert Product");
    println!("2. Delete Product");
    println!("3. Search Product");
    println!("4. Update Product");
    println!("5. Restock Product");
    println!("6. Display Hash Table");
    println!("7. Exit");
}

fn insert(table: &mut ProductTable) -> Result<()> {
    let code: u32 = console::prompt_parsed("\nEnter Product Code: ")?;
    let stock: u32 = console::prompt_parsed("Enter Stock Quantity: ")?;
    let price: f32 = console::prompt_parsed("Enter Price: ")?;

    match table.insert(Product { code, stock, price }) {
        InsertOutcome::Stored { index, probed } => {
            if probed {
                println!(
                    "{}",
                    format!(
                        "Collision at index {}, applying linear probing...",
                        ProductTable::home_slot(code)
                    )
                    .yellow()
                );
            }
            println!("{}", format!("Product inserted at index {}", index).green());
        }
        InsertOutcome::Full => {
            println!("{}", "Hash table is full. Cannot insert product.".red());
        }
    }

    Ok(())
}

fn delete(table: &mut ProductTable) -> Result<()> {
    let code: u32 = console::prompt_parsed("\nEnter Product Code to delete: ")?;

    match table.remove(code) {
        Some(index) => println!(
            "{}",
            format!("Product with code {} deleted from index {}", code, index).green()
        ),
        None => println!("{}", "Product not found in hash table.".red()),
    }

    Ok(())
}

fn search(table: &ProductTable) -> Result<()> {
    let code: u32 = console::prompt_parsed("\nEnter Product Code to search: ")?;

    match table.find(code) {
        Some((index, product)) => {
            println!("{}", format!("Product found at index {}", index).green());
            println!(
                "Code: {}\tStock: {}\tPrice: {}",
                product.code, product.stock, product.price
            );
        }
        None => println!("{}", "Product not found.".red()),
    }

    Ok(())
}

fn update(table: &mut ProductTable) -> Result<()> {
    let code: u32 = console::prompt_parsed("\nEnter Product Code to update: ")?;

    if table.find(code).is_none() {
        println!("{}", "Product not found. Cannot update.".red());
        return Ok(());
    }

    let stock: u32 = console::prompt_parsed("Enter new stock quantity: ")?;
    let price: f32 = console::prompt_parsed("Enter new price: ")?;
    table.update(code, stock, price);
    println!("{}", "Product details updated successfully.".green());

    Ok(())
}

fn restock(table: &mut ProductTable) -> Result<()> {
    let code: u32 = console::prompt_parsed("\nEnter Product Code to restock: ")?;
    let quantity: u32 = console::prompt_parsed("Enter quantity to add: ")?;

    match table.restock(code, quantity) {
        Some(stock) => println!("{}", format!("Stock updated. New stock: {}", stock).green()),
        None => println!("{}", "Product not found. Cannot restock.".red()),
    }

    Ok(())
}

fn display(table: &ProductTable) {
    println!("\nIndex\tCode\tStock\tPrice");
    println!("-----------------------------------");
    for (index, slot) in table.slots().iter().enumerate() {
        match slot {
            Some(product) => println!(
                "{}\t{}\t{}\t{}",
                index, product.code, product.stock, product.price
            ),
            None => println!("{}\t-\t-\t-", index),
        }
    }
}
