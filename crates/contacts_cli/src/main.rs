//! Interactive console front-end for the contact book.
//!
//! # Responsibility
//! - Drive `contacts_core` through a numbered menu over stdin/stdout.
//! - Re-prompt on invalid input; the core stays free of console I/O.
//!
//! # Invariants
//! - Each menu action runs to completion before the next is accepted.
//! - Exit performs an implicit save before terminating.

use contacts_core::{
    default_log_level, init_logging, validate_email, validate_phone, AddOutcome, Contact,
    ContactDraft, ContactService, ContactUpdate,
};
use log::error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "contacts.json";
const CSV_FILE: &str = "contacts.csv";

const MENU: &str = "
========== CONTACT MANAGER ==========
1. Add Contact
2. Search Contact
3. Update Contact
4. Delete Contact
5. Display All Contacts
6. Save to File
7. Export to CSV
8. Backup Data
9. Statistics
10. Exit
=====================================
";

fn main() {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    setup_logging(&data_dir);

    let mut service = ContactService::new(data_dir.join(DATA_FILE));
    match service.load() {
        Ok(true) => println!("Contacts loaded successfully."),
        Ok(false) => println!("No contacts file found. Starting fresh..."),
        Err(err) => {
            eprintln!("Failed to load contacts: {err}");
            std::process::exit(1);
        }
    }

    if let Err(err) = run_menu(&mut service, &data_dir) {
        eprintln!("Console input failed: {err}");
        std::process::exit(1);
    }
}

fn setup_logging(data_dir: &Path) {
    // flexi_logger needs an absolute directory; anchor relative data dirs
    // at the current working directory.
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(data_dir).join("logs"),
        Err(_) => return,
    };
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("Logging disabled: {err}");
    }
}

fn run_menu(service: &mut ContactService, data_dir: &Path) -> io::Result<()> {
    loop {
        println!("{MENU}");
        let choice = prompt("Choose (1-10): ")?;
        match choice.as_str() {
            "1" => add_contact(service)?,
            "2" => search_contacts(service)?,
            "3" => update_contact(service, None)?,
            "4" => delete_contact(service)?,
            "5" => display_all(service),
            "6" => save(service),
            "7" => export_csv(service, data_dir),
            "8" => backup(service, data_dir),
            "9" => statistics(service),
            "10" => {
                save(service);
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice, try again."),
        }
    }
}

fn add_contact(service: &mut ContactService) -> io::Result<()> {
    println!("\n--- ADD NEW CONTACT ---");

    let name = loop {
        let name = prompt("Enter contact name: ")?;
        if name.is_empty() {
            println!("Name cannot be empty.");
            continue;
        }
        if service.store().contains(&name) {
            println!("Contact '{name}' already exists.");
            if confirm("Update instead? (y/n): ")? {
                return update_contact(service, Some(name));
            }
            continue;
        }
        break name;
    };

    let phone = loop {
        let phone = prompt("Enter phone number: ")?;
        if validate_phone(&phone).is_some() {
            break phone;
        }
        println!("Invalid phone number. Enter 10-15 digits.");
    };

    let email = loop {
        let email = prompt("Enter email (optional): ")?;
        if email.is_empty() || validate_email(&email) {
            break email;
        }
        println!("Invalid email format.");
    };

    let address = prompt("Enter address (optional): ")?;
    let group = prompt("Enter group (Friends/Family/Work/Other): ")?;

    let draft = ContactDraft {
        name,
        phone,
        email: Some(email),
        address: Some(address),
        group: Some(group),
    };
    match service.add_contact(draft) {
        Ok(AddOutcome::Added(name)) => println!("Contact '{name}' added successfully."),
        Ok(AddOutcome::DuplicateName(name)) => println!("Contact '{name}' already exists."),
        Err(err) => {
            error!("event=add_failed module=cli status=error");
            println!("Could not add contact: {err}");
        }
    }
    Ok(())
}

fn search_contacts(service: &ContactService) -> io::Result<()> {
    let term = prompt("\nEnter name or phone to search: ")?;
    let hits = service.search_contacts(&term);
    if hits.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    println!("\nFound {} contact(s):", hits.len());
    println!("{}", "-".repeat(50));
    for (index, (name, contact)) in hits.iter().enumerate() {
        print_contact(index + 1, name, contact);
    }
    Ok(())
}

fn update_contact(service: &mut ContactService, name: Option<String>) -> io::Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt("Enter name to update: ")?,
    };
    if !service.store().contains(&name) {
        println!("Contact not found.");
        return Ok(());
    }

    println!("\n--- UPDATE CONTACT (Leave blank to keep old value) ---");
    let update = ContactUpdate {
        phone: optional(prompt("New phone: ")?),
        email: optional(prompt("New email: ")?),
        address: optional(prompt("New address: ")?),
        group: optional(prompt("New group: ")?),
    };

    match service.update_contact(&name, &update) {
        Ok(_) => println!("Contact updated successfully."),
        Err(err) => println!("Could not update contact: {err}"),
    }
    Ok(())
}

fn delete_contact(service: &mut ContactService) -> io::Result<()> {
    let name = prompt("Enter name to delete: ")?;
    if !service.store().contains(&name) {
        println!("Contact not found.");
        return Ok(());
    }

    let confirmed = confirm("Are you sure? (y/n): ")?;
    match service.delete_contact(&name, confirmed) {
        Ok(true) => println!("Contact deleted."),
        Ok(false) => println!("Contact kept."),
        Err(err) => println!("Could not delete contact: {err}"),
    }
    Ok(())
}

fn display_all(service: &ContactService) {
    let contacts = service.list_all();
    if contacts.is_empty() {
        println!("No contacts available.");
        return;
    }
    println!("\nALL CONTACTS:");
    for (name, contact) in contacts {
        println!("- {name} -> {} ({})", contact.phone, contact.group);
    }
}

fn save(service: &ContactService) {
    match service.save() {
        Ok(()) => println!("Contacts saved to {}", service.data_path().display()),
        Err(err) => {
            error!("event=save_failed module=cli status=error");
            println!("Could not save contacts: {err}");
        }
    }
}

fn export_csv(service: &ContactService, data_dir: &Path) {
    let path = data_dir.join(CSV_FILE);
    match service.export_csv(&path) {
        Ok(()) => println!("Exported to {}", path.display()),
        Err(err) => println!("Could not export contacts: {err}"),
    }
}

fn backup(service: &ContactService, data_dir: &Path) {
    match service.backup(data_dir) {
        Ok(path) => println!("Backup saved as {}", path.display()),
        Err(err) => println!("Could not back up contacts: {err}"),
    }
}

fn statistics(service: &ContactService) {
    let stats = service.statistics();
    println!("\nContact Statistics:");
    println!("Total contacts: {}", stats.total);
    if !stats.by_group.is_empty() {
        println!("\nGroup count:");
        for (group, count) in &stats.by_group {
            println!("   {group}: {count}");
        }
    }
}

fn print_contact(index: usize, name: &str, contact: &Contact) {
    println!("\n{index}. {name}");
    println!("   Phone   : {}", contact.phone);
    println!("   Email   : {}", contact.email.as_deref().unwrap_or("None"));
    println!(
        "   Address : {}",
        contact.address.as_deref().unwrap_or("None")
    );
    println!("   Group   : {}", contact.group);
    println!("{}", "-".repeat(50));
}

/// Prints `label` and reads one trimmed line from stdin.
///
/// End of input is an error so re-prompt loops terminate when stdin closes.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        ));
    }
    Ok(line.trim().to_string())
}

fn confirm(label: &str) -> io::Result<bool> {
    Ok(prompt(label)?.eq_ignore_ascii_case("y"))
}

/// Blank console input means "field not supplied".
fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
