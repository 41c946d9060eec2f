//! Menu-driven singly linked list of integers.
//!
//! Mirrors the classic exercise: insert and delete at front, back, or an
//! arbitrary 0-based position, search, reverse in place, display. Malformed
//! input inside an action is reported and drops back to the menu; only choice
//! 10 (or EOF) ends the session.

use anyhow::Result;
use colored::Colorize;
use drills::console;
use drills::linked_list::LinkedList;

fn main() -> Result<()> {
    let mut list = LinkedList::new();

    loop {
        print_menu();
        let choice = match console::prompt_opt("Enter choice: ")? {
            Some(line) => line,
            None => break,
        };

        let outcome = match choice.trim() {
            "1" => insert_front(&mut list),
            "2" => insert_back(&mut list),
            "3" => insert_at(&mut list),
            "4" => {
                delete_front(&mut list);
                Ok(())
            }
            "5" => {
                delete_back(&mut list);
                Ok(())
            }
            "6" => delete_at(&mut list),
            "7" => search(&list),
            "8" => {
                list.reverse();
                println!("{}", "List reversed".green());
                Ok(())
            }
            "9" => {
                display(&list);
                Ok(())
            }
            "10" => {
                println!("Exiting...");
                break;
            }
            _ => {
                println!("{}", "Invalid choice".red());
                Ok(())
            }
        };

        if let Err(err) = outcome {
            println!("{}", format!("Error: {:#}", err).red());
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\n--- Singly Linked List Menu ---");
    println!("1. Insert at Front");
    println!("2. Insert at Back");
    println!("3. Insert at Position");
    println!("4. Delete Front");
    println!("5. Delete Back");
    println!("6. Delete at Position");
    println!("7. Search");
    println!("8. Reverse List");
    println!("9. Display");
    println!("10. Exit");
}

fn insert_front(list: &mut LinkedList) -> Result<()> {
    let value: i64 = console::prompt_parsed("Enter value: ")?;
    list.push_front(value);
    println!("{}", format!("{} inserted at front", value).green());
    Ok(())
}

fn insert_back(list: &mut LinkedList) -> Result<()> {
    let value: i64 = console::prompt_parsed("Enter value: ")?;
    list.push_back(value);
    println!("{}", format!("{} inserted at back", value).green());
    Ok(())
}

fn insert_at(list: &mut LinkedList) -> Result<()> {
    let value: i64 = console::prompt_parsed("Enter value: ")?;
    let pos: usize = console::prompt_parsed("Enter position: ")?;

    match list.insert_at(pos, value) {
        Ok(()) => println!(
            "{}",
            format!("{} inserted at position {}", value, pos).green()
        ),
        Err(_) => println!("{}", "Invalid position".red()),
    }
    Ok(())
}

fn delete_front(list: &mut LinkedList) {
    match list.pop_front() {
        Some(_) => println!("{}", "First element deleted".green()),
        None => println!("{}", "List is empty".red()),
    }
}

fn delete_back(list: &mut LinkedList) {
    match list.pop_back() {
        Some(_) => println!("{}", "Last element deleted".green()),
        None => println!("{}", "List is empty".red()),
    }
}

fn delete_at(list: &mut LinkedList) -> Result<()> {
    let pos: usize = console::prompt_parsed("Enter position: ")?;

    match list.remove_at(pos) {
        Ok(_) => println!("{}", format!("Node deleted at position {}", pos).green()),
        Err(_) => println!("{}", "Invalid position".red()),
    }
    Ok(())
}

fn search(list: &LinkedList) -> Result<()> {
    let value: i64 = console::prompt_parsed("Enter value to search: ")?;

    match list.position(value) {
        Some(pos) => println!("{}", format!("{} found at position {}", value, pos).green()),
        None => println!("{}", format!("{} not found", value).red()),
    }
    Ok(())
}

fn display(list: &LinkedList) {
    if list.is_empty() {
        println!("List is empty");
    } else {
        println!("{}", list);
    }
}
